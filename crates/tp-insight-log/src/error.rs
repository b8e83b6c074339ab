//! Insight log error types.

use thiserror::Error;

/// Errors that can occur while reading, querying or appending to the log.
///
/// Malformed blocks are never an error; the parser drops them and counts
/// them in `ParsedDocument::skipped`.
#[derive(Debug, Error)]
pub enum InsightError {
    #[error("validation error: {0}")]
    Validation(String),

    /// Any read error other than "file does not exist".
    #[error("failed to read {path}: {source}")]
    ReadFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    WriteFailure {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl InsightError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// True for errors caused by caller input rather than the filesystem.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

/// Convenience alias for insight log results.
pub type InsightResult<T> = Result<T, InsightError>;
