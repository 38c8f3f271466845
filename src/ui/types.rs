//! Common types for UI abstraction layer

use crate::select::Item;

/// Result from a picker session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PickResult {
    /// Picked items, in the order they were selected
    pub selected: Vec<Item>,
    /// Whether the user aborted
    pub aborted: bool,
}

impl PickResult {
    /// Create result with selections
    #[must_use]
    pub const fn selected(items: Vec<Item>) -> Self {
        Self {
            selected: items,
            aborted: false,
        }
    }

    /// Create result for aborted operation
    #[must_use]
    pub const fn aborted() -> Self {
        Self {
            selected: Vec::new(),
            aborted: true,
        }
    }
}
