use crate::app::keymap::Binding;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    // --- Timer ---
    Blink,

    // --- Navigation ---
    MoveDown,
    MoveUp,

    // --- Query editing ---
    InsertChar(char),
    DeleteChar,

    // --- Session end ---
    Confirm,
    Cancel,
}

impl From<Binding> for Action {
    fn from(binding: Binding) -> Self {
        match binding {
            Binding::MoveUp => Action::MoveUp,
            Binding::MoveDown => Action::MoveDown,
            Binding::Confirm => Action::Confirm,
            Binding::Cancel => Action::Cancel,
            Binding::DeleteChar => Action::DeleteChar,
        }
    }
}
