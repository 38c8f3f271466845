//! Help overlay widget for displaying the keybind reference

use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Widget},
};

/// Help overlay widget that displays a centered help screen
pub struct HelpOverlay<'a> {
    /// Theme for styling
    theme: &'a Theme,
    /// Whether Ctrl+R reload is available
    reload: bool,
}

impl<'a> HelpOverlay<'a> {
    /// Create a new help overlay
    #[must_use]
    pub const fn new(theme: &'a Theme) -> Self {
        Self {
            theme,
            reload: false,
        }
    }

    /// Show the reload keybind
    #[must_use]
    pub const fn with_reload(mut self, reload: bool) -> Self {
        self.reload = reload;
        self
    }

    /// Calculate centered area for the overlay
    fn centered_rect(width_percent: u16, height_percent: u16, area: Rect) -> Rect {
        let popup_layout = Layout::vertical([
            Constraint::Percentage((100 - height_percent) / 2),
            Constraint::Percentage(height_percent),
            Constraint::Percentage((100 - height_percent) / 2),
        ])
        .split(area);

        Layout::horizontal([
            Constraint::Percentage((100 - width_percent) / 2),
            Constraint::Percentage(width_percent),
            Constraint::Percentage((100 - width_percent) / 2),
        ])
        .split(popup_layout[1])[1]
    }

    fn section(&self, title: &'static str) -> Line<'static> {
        Line::styled(
            title,
            self.theme.cursor_style().add_modifier(Modifier::UNDERLINED),
        )
    }

    /// Build help content lines
    fn build_content(&self) -> Vec<Line<'static>> {
        let mut lines = vec![
            Line::default(),
            self.section("  Navigation"),
            Line::default(),
            self.help_line("  ↑/↓", "Move cursor"),
            self.help_line("  PgUp/PgDn", "Page up/down"),
            self.help_line("  Home/End", "Jump to start/end"),
            self.help_line("  TAB", "Toggle selection"),
            self.help_line("  Enter", "Confirm selection"),
            self.help_line("  ESC", "Cancel"),
            Line::default(),
            self.section("  Search"),
            Line::default(),
            self.help_line("  Type", "Filter items (applied after a short pause)"),
            self.help_line("  Ctrl+L", "Clear search (keeps selection)"),
            self.help_line("  Ctrl+W", "Delete word"),
            self.help_line("  ←/→", "Move cursor in query"),
        ];

        if self.reload {
            lines.push(self.help_line("  Ctrl+R", "Reload items"));
        }

        lines.push(Line::default());
        lines.push(Line::styled(
            "  Press any key to close",
            self.theme.dimmed_style(),
        ));
        lines.push(Line::default());

        lines
    }

    /// Create a help line with key and description
    fn help_line(&self, key: &'static str, desc: &'static str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{key:<14}"), self.theme.key_style()),
            Span::raw(desc),
        ])
    }
}

impl Widget for HelpOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = Self::centered_rect(60, 70, area);

        // Clear the background
        Clear.render(popup_area, buf);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.cursor_style())
            .title(" Help ")
            .title_alignment(Alignment::Center);

        let content = self.build_content();
        let paragraph = Paragraph::new(content).block(block);
        paragraph.render(popup_area, buf);
    }
}
