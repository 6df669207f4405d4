//! Inverse document frequency over an arbitrary collection of token sequences.
//!
//! The same computation runs twice per query: once over the corpus documents and
//! once over the candidate sentences. The resulting tables carry their scope in the
//! type so one cannot be handed to a ranker expecting the other.

use crate::error::RankError;
use std::collections::{HashMap, HashSet};
use std::marker::PhantomData;

/// Marker for the collection an [`IdfTable`] was computed over.
pub trait Scope {
    const NAME: &'static str;
}

/// IDF computed across whole corpus documents.
#[derive(Debug, Clone, Copy)]
pub struct DocumentScope;

/// IDF computed across the candidate sentences of one query.
#[derive(Debug, Clone, Copy)]
pub struct SentenceScope;

impl Scope for DocumentScope {
    const NAME: &'static str = "document";
}

impl Scope for SentenceScope {
    const NAME: &'static str = "sentence";
}

#[derive(Debug, Clone)]
pub struct IdfTable<S: Scope> {
    values: HashMap<String, f64>,
    num_entries: usize,
    _scope: PhantomData<S>,
}

impl<S: Scope> IdfTable<S> {
    /// IDF of `word`, or `None` when no member of the source collection contains it.
    pub fn get(&self, word: &str) -> Option<f64> {
        self.values.get(word).copied()
    }

    /// IDF of `word`, treating absence as a [`RankError::MissingIdf`].
    pub fn lookup(&self, word: &str) -> Result<f64, RankError> {
        self.get(word).ok_or_else(|| RankError::MissingIdf { word: word.to_string(), scope: S::NAME })
    }

    /// Number of distinct words in the table.
    pub fn len(&self) -> usize { self.values.len() }

    pub fn is_empty(&self) -> bool { self.values.is_empty() }

    /// Number of collection members (N) the table was computed over.
    pub fn collection_size(&self) -> usize { self.num_entries }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.values.iter().map(|(w, v)| (w.as_str(), *v))
    }
}

/// Compute `ln(N / df(w))` for every word appearing in at least one member of
/// `collection`. Document frequency counts presence, not occurrences.
pub fn compute_idfs<'a, S, I>(collection: I) -> IdfTable<S>
where
    S: Scope,
    I: IntoIterator<Item = &'a [String]>,
{
    let mut df: HashMap<&'a str, u32> = HashMap::new();
    let mut n = 0usize;
    for tokens in collection {
        n += 1;
        let seen: HashSet<&'a str> = tokens.iter().map(String::as_str).collect();
        for word in seen {
            *df.entry(word).or_insert(0) += 1;
        }
    }

    let values = df
        .into_iter()
        .map(|(word, df_w)| (word.to_string(), (n as f64 / df_w as f64).ln()))
        .collect();
    tracing::debug!(scope = S::NAME, entries = n, "computed idf table");
    IdfTable { values, num_entries: n, _scope: PhantomData }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn docs(raw: &[&[&str]]) -> Vec<Vec<String>> {
        raw.iter().map(|d| d.iter().map(|w| w.to_string()).collect()).collect()
    }

    #[test]
    fn ubiquitous_word_is_zero_and_unique_word_is_ln_n() {
        let c = docs(&[&["rust", "fast"], &["rust", "safe"], &["rust", "rust", "fun"]]);
        let idfs: IdfTable<DocumentScope> = compute_idfs(c.iter().map(Vec::as_slice));
        assert_eq!(idfs.get("rust"), Some(0.0));
        let ln3 = 3f64.ln();
        assert!((idfs.get("fast").unwrap() - ln3).abs() < 1e-12);
        assert!((idfs.get("fun").unwrap() - ln3).abs() < 1e-12);
        assert_eq!(idfs.len(), 4);
        assert_eq!(idfs.collection_size(), 3);
    }

    #[test]
    fn repeats_within_a_member_count_once() {
        let c = docs(&[&["echo", "echo", "echo"], &["quiet"]]);
        let idfs: IdfTable<DocumentScope> = compute_idfs(c.iter().map(Vec::as_slice));
        assert!((idfs.get("echo").unwrap() - 2f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn empty_collection_yields_empty_table() {
        let idfs: IdfTable<SentenceScope> = compute_idfs(std::iter::empty::<&[String]>());
        assert!(idfs.is_empty());
        assert_eq!(idfs.collection_size(), 0);
    }

    #[test]
    fn missing_word_lookup_names_the_scope() {
        let c = docs(&[&["alpha"]]);
        let idfs: IdfTable<SentenceScope> = compute_idfs(c.iter().map(Vec::as_slice));
        assert_eq!(idfs.get("beta"), None);
        assert_eq!(
            idfs.lookup("beta"),
            Err(RankError::MissingIdf { word: "beta".into(), scope: "sentence" })
        );
    }
}
