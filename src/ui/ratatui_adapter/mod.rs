//! Ratatui-based picker adapter
//!
//! This module provides an implementation of the `Picker` trait using
//! ratatui (TUI framework) and crossterm (terminal events) as the backend.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │           RatatuiPicker                     │
//! │  (implements Picker trait)                  │
//! └────────────────────┬────────────────────────┘
//!                      │
//!        ┌─────────────┼─────────────┐
//!        ▼             ▼             ▼
//! ┌────────────┐ ┌───────────┐ ┌───────────┐
//! │ Selection  │ │  Ratatui  │ │ Crossterm │
//! │ controller │ │ (widgets) │ │  (events) │
//! └────────────┘ └───────────┘ └───────────┘
//! ```
//!
//! The event loop never blocks longer than the time left until a pending
//! query settles, so filtering kicks in as soon as typing pauses.

mod events;
mod picker;
mod state;
mod theme;
pub mod widgets;

pub use events::{EventResult, handle_event};
pub use picker::RatatuiPicker;
pub use state::{AppState, MessageLevel, Mode, StatusMessage};
pub use theme::Theme;
