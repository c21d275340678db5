use crate::app::action::Action;
use std::time::Duration;
use tokio::sync::mpsc::{self, error::TrySendError};
use tokio::task::JoinHandle;
use tokio::time::{interval, MissedTickBehavior};

/// Periodic `Action::Blink` source tied to a session.
///
/// The ticking task is aborted when the guard is dropped.
pub struct BlinkTimer {
    handle: JoinHandle<()>,
}

impl BlinkTimer {
    pub fn start(period: Duration, tx: mpsc::Sender<Action>) -> Self {
        let handle = tokio::spawn(async move {
            let mut ticker = interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            // The first tick resolves immediately.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                // A full channel just drops this tick.
                if let Err(TrySendError::Closed(_)) = tx.try_send(Action::Blink) {
                    break;
                }
            }
        });
        Self { handle }
    }

    #[cfg(test)]
    fn is_running(&self) -> bool {
        !self.handle.is_finished()
    }
}

impl Drop for BlinkTimer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
