//! Source loading error types
//!
//! # Error Types
//!
//! - **`IoError`**: The input file or stdin could not be read
//! - **`JsonError`**: Malformed JSON item list
//! - **`CsvError`**: Malformed CSV item list
//! - **`UnknownFormat`**: The input format could not be determined

use thiserror::Error;

/// Errors raised while loading a source collection
#[derive(Debug, Error)]
pub enum SourceError {
    /// Reading the input failed
    #[error("Failed to read items: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON input could not be parsed
    #[error("Invalid JSON item list: {0}")]
    JsonError(#[from] serde_json::Error),

    /// CSV input could not be parsed
    #[error("Invalid CSV item list: {0}")]
    CsvError(#[from] csv::Error),

    /// No format given and none could be inferred
    #[error("Unknown input format: {0}")]
    UnknownFormat(String),
}

/// Result type for source loading
pub type Result<T> = std::result::Result<T, SourceError>;
