use crate::app::{action::Action, keymap::KeyMap};
use crossterm::event::{Event, KeyEventKind};

/// Translates a raw terminal event into the session's event vocabulary.
///
/// Anything that is not a key press (mouse, focus, paste, resize) maps to
/// `None`; the runtime redraws regardless.
pub fn map_event_to_action(event: &Event, keymap: &KeyMap) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind != KeyEventKind::Release => keymap.get_action(*key),
        _ => None,
    }
}
