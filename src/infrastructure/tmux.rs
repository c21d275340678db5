use crate::domain::launcher::Launcher;
use crate::domain::models::LaunchRequest;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::process::{Command, Stdio};

/// How the selected command is embedded in the multiplexer invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuotingMode {
    /// One `sh -c` line with the command pasted between quotes as-is.
    /// Commands containing `"` or `'` can break out of the outer quoting.
    /// The directory is written with `Path::display`, so non-UTF-8 bytes in
    /// it are replaced.
    #[default]
    Verbatim,
    /// The multiplexer is executed directly and the command is single-quoted
    /// for the inner shell.
    Escaped,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LaunchConfig {
    pub multiplexer: String,
    pub shell: String,
    pub quoting: QuotingMode,
}

impl Default for LaunchConfig {
    fn default() -> Self {
        Self {
            multiplexer: "tmux".to_string(),
            shell: "zsh".to_string(),
            quoting: QuotingMode::Verbatim,
        }
    }
}

/// Opens a new multiplexer window running the command in an interactive
/// shell, then leaves an interactive shell open in that window.
#[derive(Debug, Clone, Default)]
pub struct TmuxLauncher {
    config: LaunchConfig,
}

impl TmuxLauncher {
    pub fn new(config: LaunchConfig) -> Self {
        Self { config }
    }

    /// The full `sh -c` line used in [`QuotingMode::Verbatim`].
    #[must_use]
    pub fn invocation_line(&self, request: &LaunchRequest) -> String {
        let LaunchConfig {
            multiplexer, shell, ..
        } = &self.config;
        let command = &request.command;
        format!(
            "{multiplexer} neww -n \"{command}\" -c \"{dir}\" \"{shell} -ic '{command}'; {shell} -i\"",
            dir = request.working_directory.display(),
        )
    }

    /// The shell-command argument handed to the multiplexer in
    /// [`QuotingMode::Escaped`].
    #[must_use]
    pub fn window_command(&self, command: &str) -> String {
        let shell = &self.config.shell;
        format!("{shell} -ic {}; {shell} -i", single_quote(command))
    }

    pub fn build_command(&self, request: &LaunchRequest) -> Command {
        let mut cmd = match self.config.quoting {
            QuotingMode::Verbatim => {
                let mut cmd = Command::new("sh");
                cmd.arg("-c").arg(self.invocation_line(request));
                cmd
            }
            QuotingMode::Escaped => {
                let mut cmd = Command::new(&self.config.multiplexer);
                cmd.arg("neww")
                    .arg("-n")
                    .arg(&request.command)
                    .arg("-c")
                    .arg(&request.working_directory)
                    .arg(self.window_command(&request.command));
                cmd
            }
        };
        cmd.stdin(Stdio::null());
        cmd
    }
}

impl Launcher for TmuxLauncher {
    fn launch(&self, request: &LaunchRequest) -> Result<()> {
        let mut cmd = self.build_command(request);
        // Not waited on: the child outlives this process.
        let child = cmd
            .spawn()
            .with_context(|| format!("failed to start {:?}", cmd.get_program()))?;
        tracing::debug!(pid = child.id(), "launch spawned");
        Ok(())
    }

    fn describe(&self, request: &LaunchRequest) -> String {
        match self.config.quoting {
            QuotingMode::Verbatim => self.invocation_line(request),
            QuotingMode::Escaped => format!(
                "{} neww -n {} -c {} {}",
                self.config.multiplexer,
                single_quote(&request.command),
                single_quote(&request.working_directory.to_string_lossy()),
                single_quote(&self.window_command(&request.command)),
            ),
        }
    }
}

/// POSIX single-quoting: `it's` becomes `'it'\''s'`.
pub fn single_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}
