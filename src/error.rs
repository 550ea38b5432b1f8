//! Error types for link-rank

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using [`Error`]
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    #[error("no documents found")]
    EmptyCorpus,

    #[error("failed to read {}: {source}", path.display())]
    ReadDocument {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid document {}: {reason}", path.display())]
    InvalidDocument { path: PathBuf, reason: String },

    #[error("unknown page: {0}")]
    UnknownPage(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("PageRank did not converge within {iterations} iterations")]
    NonConvergence { iterations: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("walk directory error: {0}")]
    WalkDir(#[from] walkdir::Error),
}
