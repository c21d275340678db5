use crate::domain::models::LaunchRequest;
use anyhow::Result;

/// Hands a chosen command off to whatever actually runs it.
///
/// Implementations must return as soon as the invocation has been started;
/// `Err` means it could not be started at all.
#[cfg_attr(test, mockall::automock)]
pub trait Launcher: Send + Sync {
    fn launch(&self, request: &LaunchRequest) -> Result<()>;

    /// Human-readable form of what `launch` would run.
    fn describe(&self, request: &LaunchRequest) -> String;
}
