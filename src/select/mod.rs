//! Debounced filtering and multi-selection over a list of items
//!
//! The [`SelectionController`] keeps three pieces of state apart:
//!
//! - the **query**: raw input text plus the debounced ("settled") copy,
//! - the **view**: source items whose name contains the settled query,
//! - the **selection**: ids toggled on by the user.
//!
//! Filtering never touches the selection, and replacing the source never
//! resets it.
//!
//! ```
//! use picklist::select::{Item, ManualClock, SelectionController, Update};
//! use std::time::Duration;
//!
//! let clock = ManualClock::new();
//! let source = vec![
//!     Item::new("1", "Apple"),
//!     Item::new("2", "Banana"),
//!     Item::new("3", "Cherry"),
//! ];
//! let mut controller =
//!     SelectionController::with_clock(source, Duration::from_millis(300), clock.clone());
//!
//! controller.on_query_change("an");
//! clock.advance(Duration::from_millis(300));
//! assert_eq!(controller.tick(), Update::Redraw);
//! assert_eq!(controller.view_len(), 1);
//!
//! controller.toggle(&Item::new("2", "Banana"));
//! assert_eq!(controller.clear(), Update::ResetInput);
//! assert_eq!(controller.view_len(), 3);
//! assert!(controller.is_selected("2"));
//! ```

pub mod clock;
pub mod controller;
pub mod debounce;
pub mod filter;
pub mod item;
pub mod selection;

pub use clock::{Clock, ManualClock, SystemClock};
pub use controller::{ControllerEvent, QueryPhase, RenderFrame, SelectionController, Update};
pub use debounce::{DEFAULT_DELAY, Debouncer};
pub use filter::compute_view;
pub use item::Item;
pub use selection::Selection;
