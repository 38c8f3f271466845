//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// Invalid configuration
    #[error("Invalid UI configuration: {0}")]
    InvalidConfig(String),

    /// IO error during UI operations
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Reloading the source collection failed
    #[error("Failed to reload items: {0}")]
    ReloadError(#[from] crate::source::SourceError),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
