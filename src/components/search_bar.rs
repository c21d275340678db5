use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::Widget,
};

const PLACEHOLDER: &str = "Select command...";
const QUIT_HINT: &str = " (esc or ctrl+c to quit)";

/// The `> query█` prompt line.
pub struct SearchBar<'a> {
    pub query: &'a str,
    pub blink: bool,
    pub theme: &'a Theme,
}

impl Widget for SearchBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let mut spans = vec![Span::styled("> ", self.theme.prompt)];

        if self.query.is_empty() {
            let (first, rest) = PLACEHOLDER.split_at(1);
            let first_style = if self.blink {
                self.theme.placeholder_cursor
            } else {
                self.theme.placeholder
            };
            spans.push(Span::styled(first, first_style));
            spans.push(Span::styled(rest, self.theme.placeholder));
            spans.push(Span::styled(QUIT_HINT, self.theme.hint));
        } else {
            spans.push(Span::styled(self.query, self.theme.query));
            spans.push(Span::styled(
                if self.blink { "█" } else { " " },
                self.theme.cursor,
            ));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
