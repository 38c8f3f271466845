//! Toggle-only selection set keyed by item id

use super::item::Item;
use indexmap::IndexSet;

/// Set of selected item ids
///
/// Membership is O(1). Ids are kept in the order they were toggled on so the
/// final result reads back in pick order. Nothing here looks at the current
/// view: an id stays selected while its item is filtered out, and ids whose
/// items vanished from the source stay as inert entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    ids: IndexSet<String>,
}

impl Selection {
    /// Create an empty selection
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip membership of `item`
    ///
    /// Returns `true` if the item is selected afterwards.
    pub fn toggle(&mut self, item: &Item) -> bool {
        if self.ids.shift_remove(item.id.as_str()) {
            false
        } else {
            self.ids.insert(item.id.clone());
            true
        }
    }

    /// Check membership by id
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.ids.contains(id)
    }

    /// Number of selected ids
    #[must_use]
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether nothing is selected
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Selected ids in pick order
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }
}
