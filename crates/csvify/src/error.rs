//! Error types for the csvify library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for csvify operations.
#[derive(Debug, Error)]
pub enum CsvifyError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// No records to derive columns or rows from.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// A record nests deeper than the configured limit.
    #[error("Record nesting exceeds {max_depth} levels at '{path}'")]
    DepthExceeded { path: String, max_depth: usize },

    /// Input document is not a collection of records.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Error delivering or persisting a finished document.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for csvify operations.
pub type Result<T> = std::result::Result<T, CsvifyError>;
