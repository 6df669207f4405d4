use crate::idf::{compute_idfs, DocumentScope, IdfTable};
use crate::tokenizer::Normalizer;
use anyhow::{bail, Context, Result};
use std::collections::HashMap;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

#[derive(Debug, Clone)]
pub struct RawDocument {
    pub id: String,
    pub text: String,
}

/// Raw document texts keyed by identifier, in load order.
#[derive(Debug, Clone, Default)]
pub struct RawCorpus {
    docs: Vec<RawDocument>,
    by_id: HashMap<String, usize>,
}

impl RawCorpus {
    pub fn new() -> Self { Self::default() }

    /// Insert a document. Re-inserting an existing id replaces its text but keeps
    /// its original position.
    pub fn insert(&mut self, id: impl Into<String>, text: impl Into<String>) {
        let id = id.into();
        let text = text.into();
        match self.by_id.get(&id) {
            Some(&idx) => {
                tracing::warn!(%id, "duplicate document id, replacing earlier text");
                self.docs[idx].text = text;
            }
            None => {
                self.by_id.insert(id.clone(), self.docs.len());
                self.docs.push(RawDocument { id, text });
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&str> {
        self.by_id.get(id).map(|&idx| self.docs[idx].text.as_str())
    }

    pub fn documents(&self) -> &[RawDocument] { &self.docs }

    pub fn len(&self) -> usize { self.docs.len() }

    pub fn is_empty(&self) -> bool { self.docs.is_empty() }
}

impl<I: Into<String>, T: Into<String>> FromIterator<(I, T)> for RawCorpus {
    fn from_iter<It: IntoIterator<Item = (I, T)>>(iter: It) -> Self {
        let mut corpus = RawCorpus::new();
        for (id, text) in iter {
            corpus.insert(id, text);
        }
        corpus
    }
}

/// Load every `.txt` file under `dir`, recursively and in file-name order.
///
/// Documents are identified by their path relative to `dir` with `/` separators, so
/// `dir/a.txt` is `a.txt` and `dir/sub/a.txt` is `sub/a.txt`. Files that are not
/// valid UTF-8 are skipped with a warning.
pub fn load_corpus<P: AsRef<Path>>(dir: P) -> Result<RawCorpus> {
    let root = dir.as_ref();
    if !root.is_dir() {
        bail!("corpus path {} is not a directory", root.display());
    }

    let mut corpus = RawCorpus::new();
    for entry in WalkDir::new(root).sort_by_file_name() {
        let entry = entry.with_context(|| format!("walking {}", root.display()))?;
        let p = entry.path();
        if !p.is_file() { continue; }
        if p.extension().and_then(|s| s.to_str()) != Some("txt") { continue; }
        let bytes = fs::read(p).with_context(|| format!("reading {}", p.display()))?;
        let text = match String::from_utf8(bytes) {
            Ok(text) => text,
            Err(e) => {
                tracing::warn!(path = %p.display(), error = %e, "skipping file that is not valid UTF-8");
                continue;
            }
        };
        corpus.insert(document_id(root, p), text);
    }

    tracing::info!(num_docs = corpus.len(), dir = %root.display(), "loaded corpus");
    Ok(corpus)
}

fn document_id(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}

#[derive(Debug, Clone)]
pub struct Document {
    pub id: String,
    pub tokens: Vec<String>,
}

/// Normalized token sequence of every corpus document.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    pub fn build<N: Normalizer + ?Sized>(raw: &RawCorpus, normalizer: &N) -> Self {
        let documents: Vec<Document> = raw
            .documents()
            .iter()
            .map(|d| Document { id: d.id.clone(), tokens: normalizer.normalize(&d.text) })
            .collect();
        let num_tokens: usize = documents.iter().map(|d| d.tokens.len()).sum();
        tracing::debug!(num_docs = documents.len(), num_tokens, "tokenized corpus");
        Self { documents }
    }

    /// Build directly from already-normalized token sequences.
    pub fn from_tokens<I, S>(docs: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<String>)>,
        S: Into<String>,
    {
        let documents = docs.into_iter().map(|(id, tokens)| Document { id: id.into(), tokens }).collect();
        Self { documents }
    }

    pub fn documents(&self) -> &[Document] { &self.documents }

    pub fn len(&self) -> usize { self.documents.len() }

    pub fn is_empty(&self) -> bool { self.documents.is_empty() }

    pub fn compute_idfs(&self) -> IdfTable<DocumentScope> {
        compute_idfs(self.documents.iter().map(|d| d.tokens.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokenizer::EnglishNormalizer;

    #[test]
    fn duplicate_ids_replace_in_place() {
        let raw: RawCorpus = vec![("a", "one"), ("b", "two"), ("a", "three")].into_iter().collect();
        assert_eq!(raw.len(), 2);
        assert_eq!(raw.documents()[0].id, "a");
        assert_eq!(raw.get("a"), Some("three"));
    }

    #[test]
    fn build_normalizes_each_document() {
        let raw: RawCorpus = vec![("a.txt", "The cat sat on the mat.")].into_iter().collect();
        let corpus = Corpus::build(&raw, &EnglishNormalizer::default());
        assert_eq!(corpus.documents()[0].tokens, vec!["cat", "sat", "mat"]);
    }
}
