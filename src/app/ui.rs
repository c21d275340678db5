use crate::app::state::Snapshot;
use crate::components::{item_list::ItemList, search_bar::SearchBar};
use crate::theme::Theme;

use ratatui::{
    layout::{Constraint, Direction, Layout},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Padding, Paragraph},
    Frame,
};

pub fn draw(f: &mut Frame, snapshot: &Snapshot<'_>, theme: &Theme) {
    let area = f.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    let block = Block::default()
        .title(Line::from(vec![
            Span::raw(" "),
            Span::styled(" TMUX MENU ", theme.title),
            Span::raw(" "),
        ]))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme.border)
        .padding(Padding::horizontal(1));

    let inner = block.inner(area);
    f.render_widget(block, area);

    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Prompt
            Constraint::Length(1), // Separator
            Constraint::Min(0),    // Items
        ])
        .split(inner);

    f.render_widget(
        SearchBar {
            query: snapshot.query,
            blink: snapshot.blink,
            theme,
        },
        layout[0],
    );

    let separator = "─".repeat(layout[1].width as usize);
    f.render_widget(Paragraph::new(separator).style(theme.separator), layout[1]);

    f.render_widget(
        ItemList {
            items: &snapshot.items,
            selected_index: snapshot.selected_index,
            theme,
        },
        layout[2],
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{action::Action, reducer, state::SessionState};
    use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

    fn buffer_text(buf: &Buffer) -> String {
        let area = buf.area;
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn render(state: &SessionState, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|f| draw(f, &state.snapshot(), &theme))
            .unwrap();
        buffer_text(terminal.backend().buffer())
    }

    #[test]
    fn test_initial_frame_shows_placeholder_and_items() {
        let state = SessionState::default();
        let text = render(&state, 100, 20);
        assert!(text.contains("> Select command..."));
        assert!(text.contains("(esc or ctrl+c to quit)"));
        assert!(text.contains("> Create pull request - ~/dotfiles/lazygit/create-pr.sh"));
        assert!(text.contains("  Create release"));
    }

    #[test]
    fn test_query_and_filtered_rows() {
        let mut state = SessionState::default();
        for c in "docker".chars() {
            reducer::update(&mut state, Action::InsertChar(c));
        }
        let text = render(&state, 100, 20);
        assert!(text.contains("> docker█"));
        assert!(text.contains("> Start Docker services"));
        assert!(!text.contains("Create pull request"));
        assert!(!text.contains("Select command..."));

        reducer::update(&mut state, Action::Blink);
        let text = render(&state, 100, 20);
        assert!(!text.contains('█'));
    }

    #[test]
    fn test_no_matches_message() {
        let mut state = SessionState::default();
        for c in "zzz".chars() {
            reducer::update(&mut state, Action::InsertChar(c));
        }
        let text = render(&state, 80, 10);
        assert!(text.contains("No matches found"));
    }

    #[test]
    fn test_selection_scrolls_into_view() {
        let mut state = SessionState::default();
        for _ in 0..state.matches.len() {
            reducer::update(&mut state, Action::MoveDown);
        }
        // Border + prompt + separator leave four list rows.
        let text = render(&state, 100, 8);
        assert!(text.contains("> Claude Code - claude"));
        assert!(!text.contains("Create pull request"));
    }

    #[test]
    fn test_tiny_terminal_does_not_panic() {
        let state = SessionState::default();
        render(&state, 1, 1);
        render(&state, 3, 2);
    }
}
