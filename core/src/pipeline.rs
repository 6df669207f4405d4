use crate::config::RankConfig;
use crate::corpus::{Corpus, RawCorpus};
use crate::error::RankError;
use crate::query::Query;
use crate::rank::{rank_documents, rank_sentences};
use crate::score::{DocumentScore, SentenceScore};
use crate::segment::{PunctuationSegmenter, SentenceSegmenter};
use crate::sentences::SentenceSet;
use crate::tokenizer::{EnglishNormalizer, Normalizer};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Answer {
    pub query: Query,
    /// Top documents, at most `file_matches`.
    pub documents: Vec<DocumentScore>,
    /// Top sentences, at most `sentence_matches`.
    pub sentences: Vec<SentenceScore>,
}

impl Answer {
    pub fn lines(&self) -> impl Iterator<Item = &str> + '_ {
        self.sentences.iter().map(|s| s.text.as_str())
    }

    pub fn is_empty(&self) -> bool { self.sentences.is_empty() }
}

/// Answers queries against one loaded corpus. The tokenized corpus is built once and
/// reused; IDF tables and candidate sentences are recomputed for every query.
pub struct Pipeline<N = EnglishNormalizer, S = PunctuationSegmenter> {
    raw: RawCorpus,
    corpus: Corpus,
    normalizer: N,
    segmenter: S,
    config: RankConfig,
}

impl Pipeline {
    pub fn new(raw: RawCorpus, config: RankConfig) -> Result<Self, RankError> {
        let normalizer = EnglishNormalizer::new(config.stem);
        Pipeline::with_components(raw, config, normalizer, PunctuationSegmenter)
    }
}

impl<N: Normalizer, S: SentenceSegmenter> Pipeline<N, S> {
    pub fn with_components(raw: RawCorpus, config: RankConfig, normalizer: N, segmenter: S) -> Result<Self, RankError> {
        config.validate()?;
        let corpus = Corpus::build(&raw, &normalizer);
        Ok(Self { raw, corpus, normalizer, segmenter, config })
    }

    pub fn corpus(&self) -> &Corpus { &self.corpus }

    pub fn config(&self) -> &RankConfig { &self.config }

    pub fn answer(&self, text: &str) -> Result<Answer, RankError> {
        let query = Query::parse(text, &self.normalizer);
        if query.is_empty() {
            tracing::warn!("query has no words left after normalization");
        }

        let doc_idfs = self.corpus.compute_idfs();
        let mut documents = rank_documents(&query, &self.corpus, &doc_idfs);
        documents.truncate(self.config.file_matches);

        let sentences = SentenceSet::extract(
            &self.raw,
            documents.iter().map(|d| d.id.as_str()),
            &self.normalizer,
            &self.segmenter,
        );
        let sentence_idfs = sentences.compute_idfs();
        let mut ranked = rank_sentences(&query, &sentences, &sentence_idfs)?;
        ranked.truncate(self.config.sentence_matches);

        tracing::info!(
            query_words = query.len(),
            top_document = documents.first().map(|d| d.id.as_str()).unwrap_or(""),
            candidates = sentences.len(),
            answers = ranked.len(),
            "answered query"
        );
        Ok(Answer { query, documents, sentences: ranked })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn answers_from_the_best_document() {
        let raw: RawCorpus = vec![
            ("a.txt", "The cat sat on the mat. It was warm."),
            ("b.txt", "Dogs bark loudly at night."),
        ]
        .into_iter()
        .collect();
        let pipeline = Pipeline::new(raw, RankConfig::default()).unwrap();
        let answer = pipeline.answer("cat").unwrap();
        assert_eq!(answer.documents[0].id, "a.txt");
        assert_eq!(answer.lines().collect::<Vec<_>>(), vec!["The cat sat on the mat."]);
    }

    #[test]
    fn empty_corpus_gives_empty_answer() {
        let pipeline = Pipeline::new(RawCorpus::new(), RankConfig::default()).unwrap();
        let answer = pipeline.answer("anything").unwrap();
        assert!(answer.documents.is_empty());
        assert!(answer.is_empty());
    }

    #[test]
    fn zero_result_counts_are_rejected() {
        let config = RankConfig { sentence_matches: 0, ..RankConfig::default() };
        assert!(matches!(Pipeline::new(RawCorpus::new(), config), Err(RankError::InvalidConfig(_))));
    }
}
