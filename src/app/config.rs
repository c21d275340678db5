use super::keymap::KeyConfig;
use super::menu::default_items;
use crate::domain::models::MenuItem;
use crate::infrastructure::tmux::LaunchConfig;
use crate::theme::PaletteType;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Cursor blink period; `0` keeps the cursor solid.
    pub blink_interval_ms: u64,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            blink_interval_ms: 400,
        }
    }
}

impl UiConfig {
    #[must_use]
    pub fn blink_interval(&self) -> Option<Duration> {
        (self.blink_interval_ms > 0).then(|| Duration::from_millis(self.blink_interval_ms))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub theme: PaletteType,
    pub log_level: Option<String>,
    pub launch: LaunchConfig,
    pub ui: UiConfig,
    pub keys: KeyConfig,
    /// Replaces the built-in menu when present and non-empty.
    pub items: Option<Vec<MenuItem>>,
}

impl Config {
    pub fn default_path() -> Option<PathBuf> {
        home::home_dir().map(|mut path| {
            path.push(".config");
            path.push("tmux-menu");
            path.push("config.toml");
            path
        })
    }

    /// Loads `explicit` if given (it must exist), otherwise the default
    /// path if it exists, otherwise built-in defaults.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }
        match Self::default_path() {
            Some(path) if path.exists() => Self::load_from(&path),
            _ => Ok(Self::default()),
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    #[must_use]
    pub fn menu_items(&self) -> Vec<MenuItem> {
        match &self.items {
            Some(items) if !items.is_empty() => items.clone(),
            Some(_) => {
                tracing::warn!("config has an empty `items` list, using the built-in menu");
                default_items()
            }
            None => default_items(),
        }
    }
}

/// The directory new windows start in: `arg` as given, else the current
/// directory.
pub fn working_directory(arg: Option<PathBuf>) -> Result<PathBuf> {
    match arg {
        Some(dir) => Ok(dir),
        None => std::env::current_dir().context("failed to read the current directory"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::keymap::Binding;
    use crate::infrastructure::tmux::QuotingMode;
    use std::io::Write;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.theme, PaletteType::CatppuccinMocha);
        assert_eq!(config.launch.multiplexer, "tmux");
        assert_eq!(config.launch.shell, "zsh");
        assert_eq!(config.launch.quoting, QuotingMode::Verbatim);
        assert_eq!(config.ui.blink_interval(), Some(Duration::from_millis(400)));
        assert_eq!(config.menu_items(), default_items());
    }

    #[test]
    fn test_full_file() {
        let file = write_config(
            r#"
theme = "nord"
log_level = "debug"

[launch]
shell = "bash"
quoting = "escaped"

[ui]
blink_interval_ms = 0

[keys.custom]
"ctrl-j" = "move_down"

[[items]]
name = "Build"
command = "cargo build --release"

[[items]]
name = "Top"
command = "htop"
"#,
        );
        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.theme, PaletteType::Nord);
        assert_eq!(config.log_level.as_deref(), Some("debug"));
        assert_eq!(config.launch.multiplexer, "tmux");
        assert_eq!(config.launch.shell, "bash");
        assert_eq!(config.launch.quoting, QuotingMode::Escaped);
        assert_eq!(config.ui.blink_interval(), None);
        assert_eq!(config.keys.custom.get("ctrl-j"), Some(&Binding::MoveDown));
        assert_eq!(
            config.menu_items(),
            vec![
                MenuItem::new("Build", "cargo build --release"),
                MenuItem::new("Top", "htop"),
            ]
        );
    }

    #[test]
    fn test_empty_file_is_default() {
        let file = write_config("");
        assert_eq!(Config::load_from(file.path()).unwrap(), Config::default());
    }

    #[test]
    fn test_empty_items_fall_back_to_builtin_menu() {
        let file = write_config("items = []\n");
        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.menu_items(), default_items());
    }

    #[test]
    fn test_malformed_file_names_the_path() {
        let file = write_config("theme = \"solarized\"\n");
        let err = Config::load_from(file.path()).unwrap_err();
        assert!(format!("{err:#}").contains(&file.path().display().to_string()));

        let file = write_config("[keys.custom]\n\"ctrl-j\" = \"jump\"\n");
        assert!(Config::load_from(file.path()).is_err());
    }

    #[test]
    fn test_missing_explicit_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        assert!(Config::load(Some(&missing)).is_err());
    }

    #[test]
    fn test_working_directory_keeps_argument_as_given() {
        let dir = working_directory(Some(PathBuf::from("../some/project"))).unwrap();
        assert_eq!(dir, PathBuf::from("../some/project"));
    }

    #[test]
    fn test_working_directory_defaults_to_current_dir() {
        let dir = working_directory(None).unwrap();
        assert_eq!(dir, std::env::current_dir().unwrap());
    }
}
