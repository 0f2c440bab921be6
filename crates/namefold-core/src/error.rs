//! Error types for namefold-core

use thiserror::Error;

/// Result type alias for label fetching and the variant pipeline
pub type Result<T> = std::result::Result<T, FetchError>;

/// Errors raised at the label source boundary.
///
/// Canonicalization and deduplication cannot fail, so every error a caller
/// sees originates here.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// The fetch could not complete (transport failure, timeout, bad status)
    #[error("Source unavailable: {message}")]
    SourceUnavailable { message: String },

    /// The source answered with data that could not be read as labels
    #[error("Malformed response: {message}")]
    MalformedResponse { message: String },

    /// The entity name was empty or whitespace
    #[error("Entity name must not be empty")]
    InvalidEntity,
}

impl FetchError {
    pub fn unavailable(message: impl Into<String>) -> Self {
        FetchError::SourceUnavailable {
            message: message.into(),
        }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        FetchError::MalformedResponse {
            message: message.into(),
        }
    }
}
