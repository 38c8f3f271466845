//! Application state for the ratatui TUI
//!
//! Wraps the selection controller with the purely visual state of the
//! picker: cursor, scrolling, the text shown in the search bar, status
//! messages and the current mode.

use crate::select::{Clock, Item, SelectionController, SystemClock, Update};
use std::time::{Duration, Instant};

/// Current mode of the TUI application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Normal browsing mode
    #[default]
    Normal,
    /// Help overlay is visible
    Help,
}

/// Severity of a status message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Operation succeeded
    Success,
    /// Operation failed
    Error,
    /// Informational
    Info,
}

/// A status message with timestamp for TTL-based expiry
#[derive(Debug, Clone)]
pub struct StatusMessage {
    /// Message level
    pub level: MessageLevel,
    /// Message text
    pub text: String,
    /// When the message was created
    pub created_at: Instant,
}

impl StatusMessage {
    /// Create a new status message
    #[must_use]
    pub fn new(level: MessageLevel, text: String) -> Self {
        Self {
            level,
            text,
            created_at: Instant::now(),
        }
    }

    /// Check if the message has expired based on TTL
    #[must_use]
    pub fn is_expired(&self, ttl: Duration) -> bool {
        self.created_at.elapsed() > ttl
    }
}

/// Application state for the picker
#[derive(Debug)]
pub struct AppState<C: Clock = SystemClock> {
    /// Filter/selection logic
    pub controller: SelectionController<C>,
    /// Text displayed in the search bar
    pub input: String,
    /// Byte position of the cursor within `input`
    pub input_cursor: usize,
    /// Current cursor position in the view
    pub cursor: usize,
    /// Scroll offset for the item list
    pub scroll_offset: usize,
    /// Height of the visible item list area (set during render)
    pub visible_height: usize,
    /// Current UI mode
    pub mode: Mode,
    /// Whether more than one item can be selected
    pub multi_select: bool,
    /// Placeholder for the search bar
    pub prompt: String,
    /// Status messages
    pub messages: Vec<StatusMessage>,
    /// Message TTL for auto-expiry
    pub message_ttl: Duration,
    /// Whether the picker should exit
    pub should_exit: bool,
    /// Whether the session was aborted
    pub aborted: bool,
}

impl<C: Clock> AppState<C> {
    /// Create new application state around a controller
    #[must_use]
    pub fn new(controller: SelectionController<C>, multi_select: bool, prompt: String) -> Self {
        Self {
            controller,
            input: String::new(),
            input_cursor: 0,
            cursor: 0,
            scroll_offset: 0,
            visible_height: 20, // Default, updated during render
            mode: Mode::Normal,
            multi_select,
            prompt,
            messages: Vec::new(),
            message_ttl: Duration::from_secs(5),
            should_exit: false,
            aborted: false,
        }
    }

    /// Move cursor up
    pub const fn cursor_up(&mut self) {
        if self.cursor > 0 {
            self.cursor -= 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor down
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.controller.view_len() {
            self.cursor += 1;
            self.adjust_scroll();
        }
    }

    /// Move cursor up by one page
    pub const fn page_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(self.visible_height);
        self.adjust_scroll();
    }

    /// Move cursor down by one page
    pub fn page_down(&mut self) {
        let max_cursor = self.controller.view_len().saturating_sub(1);
        self.cursor = (self.cursor + self.visible_height).min(max_cursor);
        self.adjust_scroll();
    }

    /// Jump to first item
    pub const fn jump_to_start(&mut self) {
        self.cursor = 0;
        self.adjust_scroll();
    }

    /// Jump to last item
    pub fn jump_to_end(&mut self) {
        self.cursor = self.controller.view_len().saturating_sub(1);
        self.adjust_scroll();
    }

    /// Adjust scroll offset to keep cursor visible
    const fn adjust_scroll(&mut self) {
        if self.cursor < self.scroll_offset {
            self.scroll_offset = self.cursor;
        } else if self.visible_height > 0 && self.cursor >= self.scroll_offset + self.visible_height
        {
            self.scroll_offset = self.cursor + 1 - self.visible_height;
        }
    }

    /// Keep the cursor inside the view after it was recomputed
    fn clamp_cursor(&mut self) {
        let len = self.controller.view_len();
        if self.cursor >= len {
            self.cursor = len.saturating_sub(1);
        }
        if self.scroll_offset > self.cursor {
            self.scroll_offset = self.cursor;
        }
        self.adjust_scroll();
    }

    /// Item under the cursor
    #[must_use]
    pub fn current_item(&self) -> Option<&Item> {
        self.controller.view_item(self.cursor)
    }

    /// Toggle selection of the item under the cursor
    pub fn toggle_selection(&mut self) {
        if !self.multi_select {
            return;
        }
        if let Some(item) = self.current_item().cloned() {
            self.controller.toggle(&item);
        }
    }

    /// Apply a controller update to the visual state
    fn apply(&mut self, update: Update) -> Update {
        match update {
            Update::ResetInput => {
                self.input.clear();
                self.input_cursor = 0;
                self.clamp_cursor();
            }
            Update::Redraw => self.clamp_cursor(),
            Update::Unchanged => {}
        }
        update
    }

    /// Forward the current input text to the controller
    fn input_changed(&mut self) -> Update {
        let update = self.controller.on_query_change(self.input.clone());
        self.apply(update)
    }

    /// Settle a pending query if due
    pub fn tick(&mut self) -> Update {
        let update = self.controller.tick();
        self.apply(update)
    }

    /// Clear the search, keeping the selection
    pub fn clear_query(&mut self) -> Update {
        let update = self.controller.clear();
        self.apply(update)
    }

    /// Replace the source collection
    pub fn replace_items(&mut self, items: Vec<Item>) -> Update {
        let update = self.controller.set_source(items);
        self.apply(update)
    }

    /// Add a character to the input
    pub fn input_push(&mut self, c: char) -> Update {
        self.input.insert(self.input_cursor, c);
        self.input_cursor += c.len_utf8();
        self.input_changed()
    }

    /// Remove the character before the cursor (backspace)
    pub fn input_backspace(&mut self) -> Update {
        if self.input_cursor == 0 {
            return Update::Unchanged;
        }
        let prev_char_boundary = self.input[..self.input_cursor]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i);
        self.input.remove(prev_char_boundary);
        self.input_cursor = prev_char_boundary;
        self.input_changed()
    }

    /// Delete the character under the cursor
    pub fn input_delete(&mut self) -> Update {
        if self.input_cursor >= self.input.len() {
            return Update::Unchanged;
        }
        self.input.remove(self.input_cursor);
        self.input_changed()
    }

    /// Delete the word before the cursor
    pub fn input_delete_word(&mut self) -> Update {
        if self.input_cursor == 0 {
            return Update::Unchanged;
        }
        let trimmed = self.input[..self.input_cursor].trim_end();
        let start = trimmed.rfind(' ').map_or(0, |space| space + 1);
        self.input.drain(start..self.input_cursor);
        self.input_cursor = start;
        self.input_changed()
    }

    /// Move input cursor left
    pub fn input_cursor_left(&mut self) {
        if self.input_cursor > 0 {
            self.input_cursor = self.input[..self.input_cursor]
                .char_indices()
                .next_back()
                .map_or(0, |(i, _)| i);
        }
    }

    /// Move input cursor right
    pub fn input_cursor_right(&mut self) {
        if self.input_cursor < self.input.len() {
            self.input_cursor = self.input[self.input_cursor..]
                .char_indices()
                .nth(1)
                .map_or(self.input.len(), |(i, _)| self.input_cursor + i);
        }
    }

    /// Items to return when the session is confirmed
    ///
    /// Multi-select returns the selection in pick order; single-select
    /// returns the item under the cursor.
    #[must_use]
    pub fn picked_items(&self) -> Vec<Item> {
        if self.multi_select {
            self.controller
                .selected_items()
                .into_iter()
                .cloned()
                .collect()
        } else {
            self.current_item().cloned().into_iter().collect()
        }
    }

    /// Add a status message
    pub fn add_message(&mut self, level: MessageLevel, text: String) {
        self.messages.push(StatusMessage::new(level, text));
    }

    /// Get non-expired messages
    #[must_use]
    pub fn active_messages(&self) -> Vec<&StatusMessage> {
        self.messages
            .iter()
            .filter(|m| !m.is_expired(self.message_ttl))
            .collect()
    }

    /// Clean up expired messages
    pub fn cleanup_messages(&mut self) {
        self.messages.retain(|m| !m.is_expired(self.message_ttl));
    }

    /// Mark the picker to exit with confirmation
    pub const fn confirm(&mut self) {
        self.should_exit = true;
        self.aborted = false;
    }

    /// Mark the picker to exit as aborted
    pub const fn abort(&mut self) {
        self.should_exit = true;
        self.aborted = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::ManualClock;

    const DELAY: Duration = Duration::from_millis(300);

    fn make_state(count: usize, multi_select: bool) -> (AppState<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let items = (0..count)
            .map(|i| Item::new(format!("id{i}"), format!("Item {i}")))
            .collect();
        let controller = SelectionController::with_clock(items, DELAY, clock.clone());
        (
            AppState::new(controller, multi_select, "Search...".into()),
            clock,
        )
    }

    fn type_text(state: &mut AppState<ManualClock>, text: &str) {
        for c in text.chars() {
            state.input_push(c);
        }
    }

    #[test]
    fn test_cursor_navigation() {
        let (mut state, _) = make_state(5, false);

        assert_eq!(state.cursor, 0);

        state.cursor_down();
        assert_eq!(state.cursor, 1);

        state.cursor_down();
        state.cursor_down();
        state.cursor_down();
        assert_eq!(state.cursor, 4);

        // Should not go past end
        state.cursor_down();
        assert_eq!(state.cursor, 4);

        state.cursor_up();
        assert_eq!(state.cursor, 3);

        state.jump_to_start();
        assert_eq!(state.cursor, 0);

        state.jump_to_end();
        assert_eq!(state.cursor, 4);
    }

    #[test]
    fn test_scroll_follows_cursor() {
        let (mut state, _) = make_state(30, false);
        state.visible_height = 10;

        state.page_down();
        assert_eq!(state.cursor, 10);
        assert_eq!(state.scroll_offset, 1);

        state.jump_to_end();
        assert_eq!(state.scroll_offset, 20);

        state.page_up();
        assert_eq!(state.cursor, 19);
        assert_eq!(state.scroll_offset, 19);
    }

    #[test]
    fn test_multi_select() {
        let (mut state, _) = make_state(5, true);

        state.toggle_selection();
        assert!(state.controller.is_selected("id0"));

        state.cursor_down();
        state.toggle_selection();
        assert!(state.controller.is_selected("id0"));
        assert!(state.controller.is_selected("id1"));

        // Toggle off
        state.cursor_up();
        state.toggle_selection();
        assert!(!state.controller.is_selected("id0"));
        assert!(state.controller.is_selected("id1"));
    }

    #[test]
    fn test_single_select_ignores_toggle() {
        let (mut state, _) = make_state(5, false);
        state.cursor_down();
        state.toggle_selection();
        assert_eq!(state.controller.selected_count(), 0);
        assert_eq!(state.picked_items(), vec![Item::new("id1", "Item 1")]);
    }

    #[test]
    fn test_input_editing() {
        let (mut state, _) = make_state(0, false);

        type_text(&mut state, "hello");
        assert_eq!(state.input, "hello");
        assert_eq!(state.input_cursor, 5);
        assert_eq!(state.controller.query(), "hello");

        state.input_backspace();
        assert_eq!(state.input, "hell");
        assert_eq!(state.input_cursor, 4);

        state.input_cursor_left();
        state.input_cursor_left();
        assert_eq!(state.input_cursor, 2);

        state.input_push('y');
        assert_eq!(state.input, "heyll");
        assert_eq!(state.controller.query(), "heyll");

        state.input_cursor_right();
        state.input_delete();
        assert_eq!(state.input, "heyl");
    }

    #[test]
    fn test_delete_word() {
        let (mut state, _) = make_state(0, false);
        type_text(&mut state, "red apple ");
        state.input_delete_word();
        assert_eq!(state.input, "red ");
        state.input_delete_word();
        assert_eq!(state.input, "");
        assert_eq!(state.input_delete_word(), Update::Unchanged);
    }

    #[test]
    fn test_filter_after_debounce_clamps_cursor() {
        let (mut state, clock) = make_state(12, true);
        state.jump_to_end();
        assert_eq!(state.cursor, 11);

        type_text(&mut state, "item 1");
        assert_eq!(state.controller.view_len(), 12);

        clock.advance(DELAY);
        assert_eq!(state.tick(), Update::Redraw);
        // "Item 1", "Item 10", "Item 11"
        assert_eq!(state.controller.view_len(), 3);
        assert_eq!(state.cursor, 2);
    }

    #[test]
    fn test_clear_resets_input_and_keeps_selection() {
        let (mut state, clock) = make_state(5, true);
        type_text(&mut state, "3");
        clock.advance(DELAY);
        state.tick();
        state.toggle_selection();

        assert_eq!(state.clear_query(), Update::ResetInput);
        assert!(state.input.is_empty());
        assert_eq!(state.input_cursor, 0);
        assert_eq!(state.controller.view_len(), 5);
        assert!(state.controller.is_selected("id3"));
        assert_eq!(state.picked_items(), vec![Item::new("id3", "Item 3")]);
    }

    #[test]
    fn test_replace_items() {
        let (mut state, _) = make_state(5, true);
        state.jump_to_end();
        state.toggle_selection();

        state.replace_items(vec![Item::new("id4", "Item 4"), Item::new("x", "Extra")]);
        assert_eq!(state.controller.view_len(), 2);
        assert_eq!(state.cursor, 1);
        assert_eq!(state.picked_items(), vec![Item::new("id4", "Item 4")]);
    }

    #[test]
    fn test_messages_expire() {
        let (mut state, _) = make_state(0, false);
        state.message_ttl = Duration::ZERO;
        state.add_message(MessageLevel::Info, "hello".into());
        std::thread::sleep(Duration::from_millis(5));
        assert!(state.active_messages().is_empty());
        state.cleanup_messages();
        assert!(state.messages.is_empty());
    }

    #[test]
    fn test_confirm_and_abort() {
        let (mut state, _) = make_state(1, true);
        state.abort();
        assert!(state.should_exit && state.aborted);
        state.confirm();
        assert!(state.should_exit && !state.aborted);
    }
}
