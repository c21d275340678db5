use super::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Bindable actions; text insertion is not bindable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Binding {
    MoveUp,
    MoveDown,
    Confirm,
    Cancel,
    DeleteChar,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct KeyConfig {
    /// Key spec (e.g. `"ctrl-j"`) to binding.
    pub custom: HashMap<String, Binding>,
}

pub struct KeyMap {
    bindings: HashMap<(KeyCode, KeyModifiers), Action>,
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut bindings = HashMap::new();

        bindings.insert(key(KeyCode::Down), Action::MoveDown);
        bindings.insert(ctrl('n'), Action::MoveDown);
        bindings.insert(key(KeyCode::Up), Action::MoveUp);
        bindings.insert(ctrl('p'), Action::MoveUp);
        bindings.insert(key(KeyCode::Enter), Action::Confirm);
        bindings.insert(key(KeyCode::Esc), Action::Cancel);
        bindings.insert(ctrl('c'), Action::Cancel);
        bindings.insert(key(KeyCode::Backspace), Action::DeleteChar);
        bindings.insert(key(KeyCode::Delete), Action::DeleteChar);

        for (spec, binding) in &config.custom {
            match parse_key_spec(spec) {
                Some(k) => {
                    bindings.insert(k, Action::from(*binding));
                }
                None => tracing::warn!(spec = %spec, "ignoring unrecognised key binding"),
            }
        }

        Self { bindings }
    }

    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        if let Some(action) = self.bindings.get(&(event.code, event.modifiers)) {
            return Some(*action);
        }

        // Terminals report uppercase letters as Shift+Char; bindings are stored without Shift.
        if event.modifiers.contains(KeyModifiers::SHIFT) {
            let modifiers = event.modifiers.difference(KeyModifiers::SHIFT);
            if let Some(action) = self.bindings.get(&(event.code, modifiers)) {
                return Some(*action);
            }
        }

        match event.code {
            KeyCode::Char(c)
                if !c.is_control()
                    && !event
                        .modifiers
                        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                Some(Action::InsertChar(c))
            }
            _ => None,
        }
    }
}

impl Default for KeyMap {
    fn default() -> Self {
        Self::from_config(&KeyConfig::default())
    }
}

fn key(code: KeyCode) -> (KeyCode, KeyModifiers) {
    (code, KeyModifiers::NONE)
}

fn ctrl(c: char) -> (KeyCode, KeyModifiers) {
    (KeyCode::Char(c), KeyModifiers::CONTROL)
}

/// Parses specs like `"down"`, `"ctrl-j"` or `"alt-shift-x"`.
pub fn parse_key_spec(spec: &str) -> Option<(KeyCode, KeyModifiers)> {
    let spec = spec.trim();
    let mut modifiers = KeyModifiers::NONE;
    let mut rest = spec;

    loop {
        let lower = rest.to_ascii_lowercase();
        if let Some(stripped) = lower.strip_prefix("ctrl-") {
            modifiers |= KeyModifiers::CONTROL;
            rest = &rest[rest.len() - stripped.len()..];
        } else if let Some(stripped) = lower.strip_prefix("alt-") {
            modifiers |= KeyModifiers::ALT;
            rest = &rest[rest.len() - stripped.len()..];
        } else if let Some(stripped) = lower.strip_prefix("shift-") {
            modifiers |= KeyModifiers::SHIFT;
            rest = &rest[rest.len() - stripped.len()..];
        } else {
            break;
        }
    }

    let code = match rest.to_ascii_lowercase().as_str() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "delete" | "del" => KeyCode::Delete,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        _ => {
            let mut chars = rest.chars();
            match (chars.next(), chars.next()) {
                // Shifted letters arrive uppercase, Ctrl/Alt letters lowercase.
                (Some(c), None)
                    if c.is_ascii_alphabetic() && modifiers.contains(KeyModifiers::SHIFT) =>
                {
                    KeyCode::Char(c.to_ascii_uppercase())
                }
                (Some(c), None) if modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                    KeyCode::Char(c.to_ascii_lowercase())
                }
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };

    Some((code, modifiers))
}
