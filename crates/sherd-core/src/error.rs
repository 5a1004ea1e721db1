//! Error types for sherd.

use thiserror::Error;

/// Result type alias using sherd's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for sherd operations.
///
/// Attribute extractors never produce these; they surface from taxonomy
/// configuration and from the fallible bundle-construction path, where the
/// mapper converts them into a degraded per-item result.
#[derive(Error, Debug)]
pub enum Error {
    /// Taxonomy category name not recognised
    #[error("Unknown taxonomy category: {0}")]
    UnknownCategory(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
