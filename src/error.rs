//! Error types for collection failures.
//!
//! Nothing here crosses a record boundary: collectors convert these into
//! `None` for the single field that failed.

use thiserror::Error;

/// Error type for parsing failures.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("parse error: {message}")]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }
}

/// Error type for collection failures.
#[derive(Debug, Error)]
pub enum CollectError {
    /// I/O error reading a pseudo-file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// The file was read but its content did not have the expected shape.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// A record could not be encoded for the caller.
    #[error("encode error: {0}")]
    Encode(#[from] serde_json::Error),
}

/// Converts a collection result into an optional value, logging the failure.
pub(crate) fn absorb<T>(what: &str, result: Result<T, CollectError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            tracing::debug!(field = what, error = %e, "value unavailable");
            None
        }
    }
}
