//! Ratatui-based picker implementation
//!
//! Implements the `Picker` trait using ratatui for UI and the selection
//! controller for filtering.

use super::events::{EventResult, poll_and_handle};
use super::state::{AppState, MessageLevel, Mode};
use super::theme::Theme;
use super::widgets::{HelpBar, HelpOverlay, ItemList, KeyHint, SearchBar, StatusBar};
use crate::select::{QueryPhase, SelectionController};
use crate::source::SourceSpec;
use crate::ui::error::Result;
use crate::ui::traits::{Picker, PickerConfig};
use crate::ui::types::PickResult;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{
    Frame, Terminal,
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
};
use std::io::{self, Stderr};
use std::time::Duration;
use tracing::{debug, warn};

/// Upper bound on how long the loop waits for input
const TICK_RATE: Duration = Duration::from_millis(50);

/// Terminal the picker draws on
type PickerTerminal = Terminal<CrosstermBackend<Stderr>>;

/// Stream the picker draws on
///
/// stdout is reserved for the picked items, so `picklist | xargs ...` and
/// `$(picklist)` capture only the result while the UI stays on screen.
fn ui_writer() -> Stderr {
    io::stderr()
}

/// Ratatui-based picker implementation
pub struct RatatuiPicker {
    theme: Theme,
}

impl Default for RatatuiPicker {
    fn default() -> Self {
        Self::new()
    }
}

impl RatatuiPicker {
    /// Create a new ratatui picker
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
        }
    }

    /// Setup terminal for TUI
    ///
    /// Draws on stderr; see [`ui_writer`].
    fn setup_terminal() -> Result<PickerTerminal> {
        enable_raw_mode()?;
        let mut writer = ui_writer();
        execute!(writer, EnterAlternateScreen, EnableMouseCapture)?;
        let backend = CrosstermBackend::new(writer);
        Terminal::new(backend).map_err(Into::into)
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal() -> Result<()> {
        disable_raw_mode()?;
        execute!(ui_writer(), DisableMouseCapture, LeaveAlternateScreen)?;
        Ok(())
    }

    /// Render the UI
    fn render(&self, frame: &mut Frame, state: &mut AppState, hints: &[KeyHint], reload: bool) {
        let main_layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // Search bar
                Constraint::Min(5),    // Item list
                Constraint::Length(3), // Status bar
                Constraint::Length(1), // Help bar
            ])
            .split(frame.area());

        // List borders take two rows
        state.visible_height = main_layout[1].height.saturating_sub(2) as usize;

        let pending = state.controller.phase() == QueryPhase::Pending;
        let search_bar = SearchBar::new(&state.input, state.input_cursor, &state.prompt, &self.theme)
            .pending(pending);
        frame.render_widget(search_bar, main_layout[0]);

        let snapshot = state.controller.frame();
        let total = state.controller.source().len();
        let item_list = ItemList::new(
            &snapshot,
            total,
            state.cursor,
            state.scroll_offset,
            &self.theme,
        );
        frame.render_widget(item_list, main_layout[1]);

        let messages = state.active_messages();
        let status_bar = StatusBar::new(&messages, &self.theme, snapshot.selected_count);
        frame.render_widget(status_bar, main_layout[2]);

        frame.render_widget(HelpBar::new(hints, &self.theme), main_layout[3]);

        if state.mode == Mode::Help {
            let help_overlay = HelpOverlay::new(&self.theme).with_reload(reload);
            frame.render_widget(help_overlay, frame.area());
        }
    }

    /// Reload the source collection and report the outcome in the status bar
    fn reload(state: &mut AppState, spec: Option<&SourceSpec>) {
        let Some(spec) = spec else {
            state.add_message(MessageLevel::Info, "Reload is not available".into());
            return;
        };

        match spec.load() {
            Ok(items) => {
                let count = items.len();
                state.replace_items(items);
                debug!(count, "reloaded source");
                state.add_message(MessageLevel::Success, format!("Reloaded {count} items"));
            }
            Err(e) => {
                warn!(error = %e, "reload failed");
                state.add_message(MessageLevel::Error, format!("Reload failed: {e}"));
            }
        }
    }

    /// Run the picker event loop
    fn run_loop(
        &self,
        terminal: &mut PickerTerminal,
        config: &PickerConfig,
    ) -> Result<PickResult> {
        let controller = SelectionController::with_delay(config.items.clone(), config.debounce);
        let mut state = AppState::new(controller, config.multi_select, config.prompt.clone());
        let hints = HelpBar::default_hints(config.multi_select);
        let reload = config.reload.is_some();

        while !state.should_exit {
            state.tick();
            state.cleanup_messages();

            terminal.draw(|frame| self.render(frame, &mut state, &hints, reload))?;

            // Wake up in time to settle a pending query
            let timeout = state
                .controller
                .time_until_settle()
                .map_or(TICK_RATE, |remaining| remaining.min(TICK_RATE));

            match poll_and_handle(&mut state, timeout)? {
                EventResult::Confirm => state.confirm(),
                EventResult::Abort => state.abort(),
                EventResult::Reload => Self::reload(&mut state, config.reload.as_ref()),
                EventResult::Continue | EventResult::Redraw | EventResult::Ignored => {}
            }
        }

        let result = if state.aborted {
            PickResult::aborted()
        } else {
            PickResult::selected(state.picked_items())
        };
        state.controller.teardown();

        debug!(
            aborted = result.aborted,
            picked = result.selected.len(),
            "picker session finished"
        );
        Ok(result)
    }
}

impl Picker for RatatuiPicker {
    fn run(&self, config: PickerConfig) -> Result<PickResult> {
        config.validate()?;

        // Setup terminal
        let mut terminal = Self::setup_terminal()?;

        // Run the event loop, ensuring cleanup happens
        let result = self.run_loop(&mut terminal, &config);

        // Cleanup terminal (always, even on error)
        if let Err(e) = Self::cleanup_terminal() {
            warn!(error = %e, "terminal cleanup failed");
        }

        result
    }
}
