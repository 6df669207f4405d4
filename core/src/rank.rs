//! Document and sentence ranking against a query.
//!
//! Both rankers sort with a stable sort, so equal keys keep their collection order:
//! corpus load order for documents, first-seen extraction order for sentences.

use crate::corpus::Corpus;
use crate::error::RankError;
use crate::idf::{DocumentScope, IdfTable, SentenceScope};
use crate::query::Query;
use crate::score::{density, term_frequency, DocumentScore, SentenceScore};
use crate::sentences::SentenceSet;

/// Score every document by `sum(tf(w, doc) * idf(w))` over the query words.
/// Query words missing from the corpus IDF table contribute nothing.
pub fn rank_documents(query: &Query, corpus: &Corpus, idfs: &IdfTable<DocumentScope>) -> Vec<DocumentScore> {
    // Out-of-vocabulary words are dropped up front; every document would score zero on them.
    let weighted: Vec<(&str, f64)> = query
        .iter()
        .filter_map(|w| idfs.get(w).map(|idf| (w, idf)))
        .collect();

    let mut scored: Vec<DocumentScore> = corpus
        .documents()
        .iter()
        .map(|doc| {
            let score = weighted
                .iter()
                .map(|&(w, idf)| term_frequency(w, &doc.tokens) as f64 * idf)
                .sum();
            DocumentScore { id: doc.id.clone(), score }
        })
        .collect();
    scored.sort_by(DocumentScore::rank_cmp);
    scored
}

/// Identifiers of the `n` best-scoring documents, fewer if the corpus is smaller.
pub fn top_files(query: &Query, corpus: &Corpus, idfs: &IdfTable<DocumentScope>, n: usize) -> Vec<String> {
    rank_documents(query, corpus, idfs)
        .into_iter()
        .take(n)
        .map(|d| d.id)
        .collect()
}

/// Score every candidate sentence by the IDF sum of its matched query words, with
/// the share of its token positions that are query words as tie-break.
///
/// `idfs` must come from [`SentenceSet::compute_idfs`] on this same set; a matched word
/// absent from it is reported as [`RankError::MissingIdf`].
pub fn rank_sentences(
    query: &Query,
    sentences: &SentenceSet,
    idfs: &IdfTable<SentenceScope>,
) -> Result<Vec<SentenceScore>, RankError> {
    let mut scored = Vec::with_capacity(sentences.len());
    for sentence in sentences.sentences() {
        let mut idf_sum = 0.0;
        for word in query.iter().filter(|w| sentence.tokens.iter().any(|t| t.as_str() == *w)) {
            idf_sum += idfs.lookup(word)?;
        }
        let density = density(&sentence.tokens, |t| query.contains(t));
        scored.push(SentenceScore {
            text: sentence.text.clone(),
            document: sentence.document.clone(),
            idf_sum,
            density,
        });
    }
    scored.sort_by(SentenceScore::rank_cmp);
    Ok(scored)
}

/// Text of the `n` best-scoring sentences, fewer if the set is smaller.
pub fn top_sentences(
    query: &Query,
    sentences: &SentenceSet,
    idfs: &IdfTable<SentenceScope>,
    n: usize,
) -> Result<Vec<String>, RankError> {
    Ok(rank_sentences(query, sentences, idfs)?
        .into_iter()
        .take(n)
        .map(|s| s.text)
        .collect())
}
