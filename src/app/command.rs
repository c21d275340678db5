use crate::domain::models::LaunchRequest;

/// Side effects requested by the reducer and carried out by the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Launch(LaunchRequest),
}
