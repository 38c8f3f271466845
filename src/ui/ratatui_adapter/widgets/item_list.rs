//! Item list widget for displaying the filtered view

use crate::select::{Item, RenderFrame};
use crate::ui::ratatui_adapter::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// Item list widget that displays visible items with selection indicators
pub struct ItemList<'a> {
    /// Controller snapshot
    frame: &'a RenderFrame<'a>,
    /// Cursor position in the view
    cursor: usize,
    /// First visible row
    scroll_offset: usize,
    /// Theme for styling
    theme: &'a Theme,
    /// Title for the list block
    title: String,
}

impl<'a> ItemList<'a> {
    /// Create a new item list widget
    #[must_use]
    pub fn new(
        frame: &'a RenderFrame<'a>,
        total: usize,
        cursor: usize,
        scroll_offset: usize,
        theme: &'a Theme,
    ) -> Self {
        let visible = frame.view.len();
        let selected = frame.selected_count;
        let title = format!(" Items ({visible}/{total}) · {selected} selected ");

        Self {
            frame,
            cursor,
            scroll_offset,
            theme,
            title,
        }
    }

    /// Render a single item
    fn render_item(&self, item: &Item, is_cursor: bool) -> ListItem<'a> {
        let is_selected = self.frame.is_selected(item);

        let cursor_char = if is_cursor { ">" } else { " " };
        let select_char = if is_selected { "✓" } else { " " };

        let text_style = if is_cursor {
            self.theme.highlight_style()
        } else {
            self.theme.normal_style()
        };

        let line = Line::from(vec![
            Span::styled(cursor_char, self.theme.cursor_style()),
            Span::raw(" "),
            Span::styled(select_char, self.theme.multi_select_style()),
            Span::raw(" "),
            Span::styled(item.name.clone(), text_style),
        ]);

        if is_cursor {
            ListItem::new(line).style(self.theme.highlight_style())
        } else {
            ListItem::new(line)
        }
    }
}

impl Widget for ItemList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(self.theme.border_style())
            .title(self.title.as_str());

        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 {
            return;
        }

        let visible_height = inner.height as usize;
        let start = self.scroll_offset.min(self.frame.view.len());
        let end = (start + visible_height).min(self.frame.view.len());

        let items: Vec<ListItem> = self.frame.view[start..end]
            .iter()
            .enumerate()
            .map(|(offset, item)| self.render_item(item, start + offset == self.cursor))
            .collect();

        List::new(items).render(inner, buf);
    }
}
