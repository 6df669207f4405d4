use crate::error::RankError;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Result counts and normalization options for one answering run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RankConfig {
    /// Number of top documents whose sentences become answer candidates.
    pub file_matches: usize,
    /// Number of sentences returned as the answer.
    pub sentence_matches: usize,
    /// Apply Snowball stemming during normalization.
    pub stem: bool,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self { file_matches: 1, sentence_matches: 1, stem: false }
    }
}

impl RankConfig {
    /// Read a JSON config file; absent keys keep their defaults.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        let config: RankConfig = serde_json::from_str(&text)
            .with_context(|| format!("parsing config {}", path.display()))?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), RankError> {
        if self.file_matches == 0 {
            return Err(RankError::InvalidConfig("file_matches must be at least 1".into()));
        }
        if self.sentence_matches == 0 {
            return Err(RankError::InvalidConfig("sentence_matches must be at least 1".into()));
        }
        Ok(())
    }
}
