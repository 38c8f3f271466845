//! Picklist - a debounced, filterable multi-select list picker
//!
//! This library provides a search-and-select controller that filters a
//! collection of items as the user types (after a short quiet period) and
//! keeps a selection that survives filtering, clearing and reloads, plus a
//! terminal frontend built on ratatui.

use thiserror::Error;

pub mod cli;
pub mod config;
pub mod logging;
pub mod output;
pub mod select;
pub mod source;
pub mod ui;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum PicklistError {
    /// Picker session error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// Loading items failed
    #[error("Source error: {0}")]
    SourceError(#[from] source::SourceError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Serializing the output failed
    #[error("Output error: {0}")]
    OutputError(#[from] serde_json::Error),
}

/// Result type for picklist operations
pub type Result<T> = std::result::Result<T, PicklistError>;
