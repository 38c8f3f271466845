//! View derivation from the source collection and the settled query
//!
//! The predicate is a case-insensitive substring match against the item
//! name. An empty query matches everything. Results keep source order.
//!
//! ```
//! use picklist::select::{Item, filter::compute_view};
//!
//! let source = vec![Item::new("1", "Apple"), Item::new("2", "Banana")];
//! let view = compute_view(&source, "AN");
//! assert_eq!(view, vec![&source[1]]);
//! ```

use super::item::Item;

/// Lowercased query ready for repeated matching
///
/// Folding the query once avoids re-lowercasing it for every item.
#[derive(Debug, Clone)]
pub struct NameMatcher {
    needle: String,
}

impl NameMatcher {
    /// Build a matcher for `query`
    #[must_use]
    pub fn new(query: &str) -> Self {
        Self {
            needle: query.to_lowercase(),
        }
    }

    /// Whether this matcher accepts every item
    #[must_use]
    pub fn matches_all(&self) -> bool {
        self.needle.is_empty()
    }

    /// Check a single item
    #[must_use]
    pub fn is_match(&self, item: &Item) -> bool {
        self.matches_all() || item.name.to_lowercase().contains(&self.needle)
    }
}

/// Indices into `source` of the items matching `query`, in source order
#[must_use]
pub fn matching_indices(source: &[Item], query: &str) -> Vec<usize> {
    let matcher = NameMatcher::new(query);
    if matcher.matches_all() {
        return (0..source.len()).collect();
    }

    source
        .iter()
        .enumerate()
        .filter(|(_, item)| matcher.is_match(item))
        .map(|(idx, _)| idx)
        .collect()
}

/// Items of `source` whose name contains `query`, ignoring case
#[must_use]
pub fn compute_view<'a>(source: &'a [Item], query: &str) -> Vec<&'a Item> {
    let matcher = NameMatcher::new(query);
    source.iter().filter(|item| matcher.is_match(item)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fruits() -> Vec<Item> {
        vec![
            Item::new("1", "Apple"),
            Item::new("2", "Banana"),
            Item::new("3", "Cherry"),
            Item::new("4", "Date"),
            Item::new("5", "Elderberry"),
        ]
    }

    fn names<'a>(view: &[&'a Item]) -> Vec<&'a str> {
        view.iter().map(|item| item.name.as_str()).collect()
    }

    #[test]
    fn test_empty_query_returns_source() {
        let source = fruits();
        let view = compute_view(&source, "");
        assert_eq!(view.len(), source.len());
        assert!(view.iter().zip(&source).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_substring_not_prefix() {
        let source = fruits();
        assert_eq!(names(&compute_view(&source, "err")), vec!["Cherry", "Elderberry"]);
        assert_eq!(names(&compute_view(&source, "an")), vec!["Banana"]);
    }

    #[test]
    fn test_case_insensitive() {
        let source = fruits();
        assert_eq!(names(&compute_view(&source, "APPLE")), vec!["Apple"]);
        assert_eq!(names(&compute_view(&source, "dAtE")), vec!["Date"]);
    }

    #[test]
    fn test_no_match() {
        let source = fruits();
        assert!(compute_view(&source, "kiwi").is_empty());
        assert!(matching_indices(&source, "kiwi").is_empty());
    }

    #[test]
    fn test_empty_source() {
        assert!(compute_view(&[], "a").is_empty());
        assert!(compute_view(&[], "").is_empty());
        assert!(matching_indices(&[], "").is_empty());
    }

    #[test]
    fn test_indices_preserve_order() {
        let source = fruits();
        assert_eq!(matching_indices(&source, "e"), vec![0, 2, 3, 4]);
        assert_eq!(matching_indices(&source, ""), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_whitespace_is_literal() {
        let source = vec![Item::new("a", "Blood Orange"), Item::new("b", "Orange")];
        assert_eq!(names(&compute_view(&source, "d o")), vec!["Blood Orange"]);
    }

    #[test]
    fn test_unicode_folding() {
        let source = vec![Item::new("1", "Äpfel"), Item::new("2", "Birne")];
        assert_eq!(names(&compute_view(&source, "äp")), vec!["Äpfel"]);
    }
}
