use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum RankError {
    /// A word was looked up in an IDF table built over a collection that never contained it.
    #[error("no {scope}-level IDF entry for word {word:?}")]
    MissingIdf { word: String, scope: &'static str },
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
