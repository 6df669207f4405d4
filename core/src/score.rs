use serde::Serialize;
use std::cmp::Ordering;

/// Summed TF-IDF of the query words in one document.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentScore {
    pub id: String,
    pub score: f64,
}

/// Composite sentence key: matched-word IDF first, query-term density as tie-break.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SentenceScore {
    pub text: String,
    pub document: String,
    pub idf_sum: f64,
    pub density: f64,
}

impl DocumentScore {
    /// Descending by score.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        desc(self.score, other.score)
    }
}

impl SentenceScore {
    /// Descending by `idf_sum`, then descending by `density`.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        desc(self.idf_sum, other.idf_sum).then_with(|| desc(self.density, other.density))
    }
}

fn desc(a: f64, b: f64) -> Ordering {
    b.partial_cmp(&a).unwrap_or(Ordering::Equal)
}

/// Raw occurrence count of `word` in `tokens`.
pub fn term_frequency(word: &str, tokens: &[String]) -> usize {
    tokens.iter().filter(|t| t.as_str() == word).count()
}

/// Fraction of token positions for which `is_match` holds. Zero for an empty sequence.
pub fn density<F: Fn(&str) -> bool>(tokens: &[String], is_match: F) -> f64 {
    if tokens.is_empty() { return 0.0; }
    let hits = tokens.iter().filter(|t| is_match(t.as_str())).count();
    hits as f64 / tokens.len() as f64
}
