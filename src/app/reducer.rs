use super::{
    action::Action,
    command::Command,
    state::{SessionMode, SessionState},
};
use crate::domain::models::LaunchRequest;

pub fn update(state: &mut SessionState, action: Action) -> Option<Command> {
    if state.is_finished() {
        return None;
    }

    match action {
        Action::Blink => {
            state.blink = !state.blink;
        }

        // --- Navigation (clamped, no wrap) ---
        Action::MoveDown => {
            if state.selected_index + 1 < state.matches.len() {
                state.selected_index += 1;
            }
        }
        Action::MoveUp => {
            state.selected_index = state.selected_index.saturating_sub(1);
        }

        // --- Query editing ---
        Action::InsertChar(c) => {
            state.query.push(c);
            state.refilter();
            tracing::debug!(query = %state.query, matches = state.matches.len(), "query changed");
        }
        Action::DeleteChar => {
            state.query.pop();
            state.refilter();
            tracing::debug!(query = %state.query, matches = state.matches.len(), "query changed");
        }

        // --- Session end ---
        Action::Confirm => {
            let command = state.selected_item()?.command.clone();
            state.mode = SessionMode::Confirmed;
            tracing::debug!(%command, "selection confirmed");
            return Some(Command::Launch(LaunchRequest::new(
                command,
                state.working_directory.clone(),
            )));
        }
        Action::Cancel => {
            state.mode = SessionMode::Cancelled;
            tracing::debug!("session cancelled");
        }
    }
    None
}
