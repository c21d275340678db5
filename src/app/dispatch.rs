use crate::domain::launcher::Launcher;
use crate::domain::models::LaunchRequest;
use anyhow::Result;

/// Fires the launch once and returns without waiting for the command.
///
/// A failure to start is logged here and returned for the caller to report;
/// it is never retried.
pub fn dispatch(launcher: &dyn Launcher, request: &LaunchRequest) -> Result<()> {
    tracing::info!(
        command = %request.command,
        dir = %request.working_directory.display(),
        "dispatching launch"
    );
    match launcher.launch(request) {
        Ok(()) => Ok(()),
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), command = %request.command, "launch failed");
            Err(err)
        }
    }
}
