//! Error types for serein.

use thiserror::Error;

/// Errors that can occur in serein.
#[derive(Debug, Error)]
pub enum SereinError {
    /// Configuration problem (missing home, bad config file, bad argument).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Local database problem.
    #[error("Database error: {0}")]
    Database(String),

    /// The journal backend rejected or failed an operation.
    #[error("Journal error: {0}")]
    Journal(String),

    /// Input failed validation before reaching any store.
    #[error("Validation error: {0}")]
    Validation(String),

    /// A requested item does not exist.
    #[error("Not found: {0}")]
    NotFound(String),

    /// JSON serialization or deserialization failed.
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Underlying I/O failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Terminal setup or event handling failed.
    #[error("Terminal error: {0}")]
    Terminal(String),
}
