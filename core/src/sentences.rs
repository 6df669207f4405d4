use crate::corpus::RawCorpus;
use crate::idf::{compute_idfs, IdfTable, SentenceScope};
use crate::segment::{split_sentences, SentenceSegmenter};
use crate::tokenizer::Normalizer;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct Sentence {
    /// Exact sentence text; also its identity within a [`SentenceSet`].
    pub text: String,
    /// Document the sentence was first extracted from.
    pub document: String,
    pub tokens: Vec<String>,
}

/// Candidate answer sentences keyed by their text, in first-seen order.
///
/// Sentences with identical text collapse into the first occurrence, so a sentence
/// repeated across documents competes once.
#[derive(Debug, Clone, Default)]
pub struct SentenceSet {
    sentences: Vec<Sentence>,
    by_text: HashMap<String, usize>,
}

impl SentenceSet {
    pub fn new() -> Self { Self::default() }

    /// Add a sentence. Returns false when it was dropped: no tokens survived
    /// normalization, or the same text is already present.
    pub fn insert(&mut self, text: impl Into<String>, document: impl Into<String>, tokens: Vec<String>) -> bool {
        if tokens.is_empty() { return false; }
        let text = text.into();
        if self.by_text.contains_key(&text) { return false; }
        self.by_text.insert(text.clone(), self.sentences.len());
        self.sentences.push(Sentence { text, document: document.into(), tokens });
        true
    }

    /// Segment and normalize the given documents into a candidate set.
    pub fn extract<'a, I, N, S>(raw: &RawCorpus, ids: I, normalizer: &N, segmenter: &S) -> Self
    where
        I: IntoIterator<Item = &'a str>,
        N: Normalizer + ?Sized,
        S: SentenceSegmenter + ?Sized,
    {
        let mut set = SentenceSet::new();
        for id in ids {
            let Some(text) = raw.get(id) else {
                tracing::warn!(%id, "ranked document missing from raw corpus");
                continue;
            };
            for sentence in split_sentences(segmenter, text) {
                let tokens = normalizer.normalize(&sentence);
                set.insert(sentence, id, tokens);
            }
        }
        tracing::debug!(num_sentences = set.len(), "extracted candidate sentences");
        set
    }

    pub fn get(&self, text: &str) -> Option<&Sentence> {
        self.by_text.get(text).map(|&idx| &self.sentences[idx])
    }

    pub fn sentences(&self) -> &[Sentence] { &self.sentences }

    pub fn len(&self) -> usize { self.sentences.len() }

    pub fn is_empty(&self) -> bool { self.sentences.is_empty() }

    pub fn compute_idfs(&self) -> IdfTable<SentenceScope> {
        compute_idfs(self.sentences.iter().map(|s| s.tokens.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::PunctuationSegmenter;
    use crate::tokenizer::EnglishNormalizer;

    #[test]
    fn stopword_only_sentences_are_dropped() {
        let raw: RawCorpus = vec![("a.txt", "It is what it is. Cats purr.")].into_iter().collect();
        let set = SentenceSet::extract(&raw, ["a.txt"], &EnglishNormalizer::default(), &PunctuationSegmenter);
        assert_eq!(set.len(), 1);
        assert_eq!(set.sentences()[0].text, "Cats purr.");
    }

    #[test]
    fn repeated_text_collapses_to_first_document() {
        let raw: RawCorpus = vec![("a.txt", "Cats purr."), ("b.txt", "Dogs bark.\nCats purr.")].into_iter().collect();
        let set = SentenceSet::extract(&raw, ["b.txt", "a.txt"], &EnglishNormalizer::default(), &PunctuationSegmenter);
        assert_eq!(set.len(), 2);
        assert_eq!(set.get("Cats purr.").map(|s| s.document.as_str()), Some("b.txt"));
    }
}
