use crate::domain::filter::matching_indices;
use crate::domain::models::{LaunchRequest, MenuItem};
use std::path::PathBuf;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SessionMode {
    Browsing,  // Typing a query / moving the selection
    Confirmed, // An item was chosen; the launch effect has been emitted
    Cancelled, // Quit without launching
}

/// How a session ended, as seen by the caller of the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    Launch(LaunchRequest),
    Cancelled,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SessionState {
    pub mode: SessionMode,

    // --- Injected configuration ---
    pub items: Vec<MenuItem>,
    pub working_directory: PathBuf,

    // --- Interactive state ---
    pub query: String,
    pub matches: Vec<usize>, // Indices into `items`, recomputed on every query change
    pub selected_index: usize, // Index into `matches`, not `items`
    pub blink: bool,
}

impl SessionState {
    pub fn new(items: Vec<MenuItem>, working_directory: impl Into<PathBuf>) -> Self {
        let matches = matching_indices(&items, "");
        Self {
            mode: SessionMode::Browsing,
            items,
            working_directory: working_directory.into(),
            query: String::new(),
            matches,
            selected_index: 0,
            blink: true,
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.mode != SessionMode::Browsing
    }

    #[must_use]
    pub fn selected_item(&self) -> Option<&MenuItem> {
        self.matches
            .get(self.selected_index)
            .and_then(|&i| self.items.get(i))
    }

    /// Recomputes the filtered view for the current query and resets the
    /// selection to the top.
    pub(crate) fn refilter(&mut self) {
        self.matches = matching_indices(&self.items, &self.query);
        self.selected_index = 0;
    }

    #[must_use]
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            query: &self.query,
            items: self.matches.iter().map(|&i| &self.items[i]).collect(),
            selected_index: self.selected_index,
            blink: self.blink,
        }
    }
}

/// Read-only view handed to the renderer after each state change.
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot<'a> {
    pub query: &'a str,
    pub items: Vec<&'a MenuItem>,
    pub selected_index: usize,
    pub blink: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(crate::app::menu::default_items(), PathBuf::from("."))
    }
}
