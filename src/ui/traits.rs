//! Core traits for UI abstraction layer

use super::error::{Result, UiError};
use super::types::PickResult;
use crate::select::{DEFAULT_DELAY, Item};
use crate::source::SourceSpec;
use std::time::Duration;

/// Configuration for a picker session
#[derive(Debug, Clone)]
pub struct PickerConfig {
    /// Initial source collection
    pub items: Vec<Item>,
    /// Allow toggling several items (otherwise the cursor item is returned)
    pub multi_select: bool,
    /// Placeholder shown in the search bar
    pub prompt: String,
    /// Quiet period before typed text filters the list
    pub debounce: Duration,
    /// Where to reload items from on request (None = reload disabled)
    pub reload: Option<SourceSpec>,
}

impl PickerConfig {
    /// Create a basic picker configuration
    #[must_use]
    pub fn new(items: Vec<Item>, prompt: String) -> Self {
        Self {
            items,
            multi_select: true,
            prompt,
            debounce: DEFAULT_DELAY,
            reload: None,
        }
    }

    /// Enable or disable multi-select
    #[must_use]
    pub const fn with_multi_select(mut self, multi: bool) -> Self {
        self.multi_select = multi;
        self
    }

    /// Set the debounce delay
    #[must_use]
    pub const fn with_debounce(mut self, delay: Duration) -> Self {
        self.debounce = delay;
        self
    }

    /// Allow reloading items from `spec`
    #[must_use]
    pub fn with_reload(mut self, spec: SourceSpec) -> Self {
        self.reload = spec.is_reloadable().then_some(spec);
        self
    }

    /// Check the configuration before starting a session
    ///
    /// # Errors
    ///
    /// Returns `UiError::InvalidConfig` if an item has an empty id.
    pub fn validate(&self) -> Result<()> {
        if let Some(item) = self.items.iter().find(|item| item.id.is_empty()) {
            return Err(UiError::InvalidConfig(format!(
                "item '{}' has an empty id",
                item.name
            )));
        }
        Ok(())
    }
}

/// Trait for picker implementations
///
/// Abstracts the presentation backend so the same selection logic can be
/// driven by a terminal UI, a scripted replay in tests, or another frontend.
pub trait Picker {
    /// Run an interactive session
    ///
    /// # Errors
    ///
    /// Returns an error if the picker cannot be initialized or if an I/O
    /// operation fails during the session.
    fn run(&self, config: PickerConfig) -> Result<PickResult>;
}
