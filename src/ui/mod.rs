//! UI abstraction layer
//!
//! This module provides a backend-agnostic interface for running an
//! interactive picker session. The selection logic lives in
//! [`crate::select`]; a [`Picker`] only translates user input into
//! controller events and renders what the controller reports.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │      Caller (CLI, library user)         │
//! └────────────────┬────────────────────────┘
//!                  │ Uses trait
//!                  ▼
//! ┌─────────────────────────────────────────┐
//! │      Picker trait                       │
//! └────────────────┬────────────────────────┘
//!                  │ Implemented by
//!         ┌────────┴────────┐
//!         ▼                 ▼
//! ┌───────────────┐  ┌───────────────────┐
//! │ RatatuiPicker │  │ MockPicker        │
//! │ (terminal)    │  │ (tests)           │
//! └───────────────┘  └───────────────────┘
//! ```
//!
//! ## Running a session
//!
//! ```no_run
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use picklist::select::Item;
//! use picklist::ui::{Picker, PickerConfig};
//! use picklist::ui::ratatui_adapter::RatatuiPicker;
//!
//! let items = vec![Item::new("1", "Apple"), Item::new("2", "Banana")];
//! let config = PickerConfig::new(items, "Search...".into()).with_multi_select(true);
//!
//! let result = RatatuiPicker::new().run(config)?;
//! if !result.aborted {
//!     println!("Selected: {:?}", result.selected);
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Implementing a custom picker
//!
//! ```no_run
//! use picklist::ui::{PickResult, Picker, PickerConfig, Result};
//!
//! struct FirstItem;
//!
//! impl Picker for FirstItem {
//!     fn run(&self, config: PickerConfig) -> Result<PickResult> {
//!         Ok(PickResult::selected(config.items.into_iter().take(1).collect()))
//!     }
//! }
//! ```

mod error;
mod traits;
mod types;

pub mod ratatui_adapter;

#[cfg(test)]
pub mod mock;

pub use error::{Result, UiError};
pub use ratatui_adapter::RatatuiPicker;
pub use traits::{Picker, PickerConfig};
pub use types::PickResult;
