//! Error types for docportal.

use thiserror::Error;

/// Result type alias using docportal's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for docportal operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Category tag outside the closed documentation category set
    #[error("Unknown document category: {0}")]
    UnknownCategory(String),

    /// Invalid input
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Key-value storage operation failed
    #[error("Storage error: {0}")]
    Storage(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
