//! Item type shared by the controller and its collaborators

use serde::{Deserialize, Serialize};
use std::fmt;

/// A named entry in the source collection
///
/// `id` is the stable identity used for selection; `name` is what the user
/// sees and what the filter matches against. Two items with the same name but
/// different ids are distinct.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    /// Unique, stable identifier
    pub id: String,
    /// Display text and search key
    pub name: String,
}

impl Item {
    /// Create a new item
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}
