//! Extractive question answering over a fixed text corpus.
//!
//! Documents are ranked against the query by TF-IDF; sentences from the best
//! documents are then ranked by the IDF of the query words they contain, with
//! query-term density as tie-break.

pub mod config;
pub mod corpus;
pub mod error;
pub mod idf;
pub mod pipeline;
pub mod query;
pub mod rank;
pub mod score;
pub mod segment;
pub mod sentences;
pub mod tokenizer;

pub use config::RankConfig;
pub use corpus::{load_corpus, Corpus, Document, RawCorpus};
pub use error::RankError;
pub use idf::{compute_idfs, DocumentScope, IdfTable, SentenceScope};
pub use pipeline::{Answer, Pipeline};
pub use query::Query;
pub use rank::{rank_documents, rank_sentences, top_files, top_sentences};
pub use score::{DocumentScore, SentenceScore};
pub use sentences::{Sentence, SentenceSet};
