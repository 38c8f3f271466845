//! Search bar widget for query input

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Search bar widget that displays the input text with cursor
pub struct SearchBar<'a> {
    /// Text shown in the input
    input: &'a str,
    /// Cursor position in the input
    cursor: usize,
    /// Placeholder shown while the input is empty
    prompt: &'a str,
    /// Theme for styling
    theme: &'a Theme,
    /// Whether typed text is still waiting to be applied
    pending: bool,
}

impl<'a> SearchBar<'a> {
    /// Create a new search bar widget
    #[must_use]
    pub const fn new(input: &'a str, cursor: usize, prompt: &'a str, theme: &'a Theme) -> Self {
        Self {
            input,
            cursor,
            prompt,
            theme,
            pending: false,
        }
    }

    /// Mark the input as not yet applied
    #[must_use]
    pub const fn pending(mut self, pending: bool) -> Self {
        self.pending = pending;
        self
    }
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = if self.pending { " Search … " } else { " Search " };
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(title);

        let inner = block.inner(area);
        block.render(area, buf);

        let caret = Span::styled("│", Style::default().add_modifier(Modifier::SLOW_BLINK));

        let spans = if self.input.is_empty() {
            vec![caret, Span::styled(self.prompt, self.theme.dimmed_style())]
        } else {
            // Split input at cursor position
            let cursor = self.cursor.min(self.input.len());
            let (before, after) = self.input.split_at(cursor);
            vec![Span::raw(before), caret, Span::raw(after)]
        };

        Paragraph::new(Line::from(spans)).render(inner, buf);
    }
}
