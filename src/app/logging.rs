use super::config::Config;
use anyhow::Result;
use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL: &str = "info";

pub fn log_path() -> Option<PathBuf> {
    home::home_dir().map(|mut path| {
        path.push(".local");
        path.push("state");
        path.push("tmux-menu");
        path.push("tmux-menu.log");
        path
    })
}

/// Installs the global subscriber, writing to [`log_path`].
///
/// The terminal belongs to the UI, so logs only ever go to the file. Failure
/// to set up logging is not fatal; the launcher simply runs without it.
pub fn init_logging(config: &Config) {
    let Some(path) = log_path() else {
        return;
    };
    let _ = init_logging_at(&path, config.log_level.as_deref());
}

/// `RUST_LOG` wins over `level`, which wins over `info`.
pub fn init_logging_at(path: &Path, level: Option<&str>) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.unwrap_or(DEFAULT_LEVEL)));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!(e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creates_missing_directories_and_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("state").join("tmux-menu.log");

        // `try_init` fails if a global subscriber is already set; the file
        // must exist either way.
        let _ = init_logging_at(&path, Some("debug"));
        assert!(path.exists());
    }
}
