//! Event handling for the ratatui TUI
//!
//! Handles keyboard and mouse events, mapping them to application actions.

use super::state::{AppState, Mode};
use crate::select::{Clock, Update};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers, MouseEvent, MouseEventKind};
use std::time::Duration;

/// Result of handling an event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Continue running the event loop
    Continue,
    /// Exit the picker with the current selection
    Confirm,
    /// Exit the picker as aborted
    Abort,
    /// Visible state changed and needs rendering
    Redraw,
    /// Reload the source collection
    Reload,
    /// No action taken
    Ignored,
}

impl From<Update> for EventResult {
    fn from(update: Update) -> Self {
        if update.needs_redraw() {
            Self::Redraw
        } else {
            Self::Ignored
        }
    }
}

/// Handle events in normal mode
fn handle_normal_mode<C: Clock>(state: &mut AppState<C>, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        // Exit
        (KeyCode::Esc, _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => EventResult::Abort,
        (KeyCode::Enter, _) => EventResult::Confirm,

        // Navigation
        (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::CONTROL) => {
            state.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::CONTROL) => {
            state.cursor_down();
            EventResult::Continue
        }
        (KeyCode::PageUp, _) => {
            state.page_up();
            EventResult::Continue
        }
        (KeyCode::PageDown, _) => {
            state.page_down();
            EventResult::Continue
        }
        (KeyCode::Home, _) => {
            state.jump_to_start();
            EventResult::Continue
        }
        (KeyCode::End, _) => {
            state.jump_to_end();
            EventResult::Continue
        }

        // Multi-select
        (KeyCode::Tab, _) => {
            state.toggle_selection();
            state.cursor_down();
            EventResult::Continue
        }
        (KeyCode::BackTab, _) => {
            state.toggle_selection();
            state.cursor_up();
            EventResult::Continue
        }

        // Help overlay
        (KeyCode::F(1), _) => {
            state.mode = Mode::Help;
            EventResult::Continue
        }

        // Source
        (KeyCode::Char('r'), KeyModifiers::CONTROL) => EventResult::Reload,

        // Query editing
        (KeyCode::Char('l' | 'u'), KeyModifiers::CONTROL) => state.clear_query().into(),
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => state.input_delete_word().into(),
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => state.input_push(c).into(),
        (KeyCode::Backspace, _) => state.input_backspace().into(),
        (KeyCode::Delete, _) => state.input_delete().into(),
        (KeyCode::Left, _) => {
            state.input_cursor_left();
            EventResult::Continue
        }
        (KeyCode::Right, _) => {
            state.input_cursor_right();
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    }
}

/// Handle events in help mode
fn handle_help_mode<C: Clock>(state: &mut AppState<C>, _key: KeyEvent) -> EventResult {
    // Any key closes help
    state.mode = Mode::Normal;
    EventResult::Continue
}

/// Handle mouse events
fn handle_mouse<C: Clock>(state: &mut AppState<C>, mouse: MouseEvent) -> EventResult {
    match mouse.kind {
        MouseEventKind::ScrollUp => {
            state.cursor_up();
            EventResult::Continue
        }
        MouseEventKind::ScrollDown => {
            state.cursor_down();
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

/// Dispatch a single terminal event
pub fn handle_event<C: Clock>(state: &mut AppState<C>, event: Event) -> EventResult {
    match event {
        Event::Key(key) => match state.mode {
            Mode::Normal => handle_normal_mode(state, key),
            Mode::Help => handle_help_mode(state, key),
        },
        Event::Mouse(mouse) => handle_mouse(state, mouse),
        Event::Resize(_, _) => EventResult::Redraw,
        _ => EventResult::Ignored,
    }
}

/// Poll for events and handle them
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn poll_and_handle<C: Clock>(
    state: &mut AppState<C>,
    timeout: Duration,
) -> std::io::Result<EventResult> {
    if !event::poll(timeout)? {
        return Ok(EventResult::Continue);
    }

    Ok(handle_event(state, event::read()?))
}
