use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One launchable entry: a display name and the shell fragment it runs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuItem {
    pub name: String,
    pub command: String,
}

impl MenuItem {
    pub fn new(name: impl Into<String>, command: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            command: command.into(),
        }
    }
}

/// Built at confirmation time and handed to a [`super::launcher::Launcher`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchRequest {
    pub command: String,
    pub working_directory: PathBuf,
}

impl LaunchRequest {
    pub fn new(command: impl Into<String>, working_directory: impl Into<PathBuf>) -> Self {
        Self {
            command: command.into(),
            working_directory: working_directory.into(),
        }
    }
}
