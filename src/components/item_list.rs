use crate::domain::models::MenuItem;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{List, ListItem, ListState, StatefulWidget, Widget},
};

/// The filtered menu, scrolled so the selected row stays visible.
pub struct ItemList<'a> {
    pub items: &'a [&'a MenuItem],
    pub selected_index: usize,
    pub theme: &'a Theme,
}

impl Widget for ItemList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        if self.items.is_empty() {
            let line = Line::from(Span::styled("No matches found", self.theme.no_match));
            buf.set_line(area.x, area.y, &line, area.width);
            return;
        }

        let rows: Vec<ListItem> = self
            .items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let is_selected = i == self.selected_index;
                let (marker, name_style) = if is_selected {
                    ("> ", self.theme.list_selected)
                } else {
                    ("  ", self.theme.list_item)
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, self.theme.marker),
                    Span::styled(item.name.as_str(), name_style),
                    Span::styled(format!(" - {}", item.command), self.theme.command),
                ]))
            })
            .collect();

        let mut list_state = ListState::default().with_selected(Some(self.selected_index));
        StatefulWidget::render(List::new(rows), area, buf, &mut list_state);
    }
}
