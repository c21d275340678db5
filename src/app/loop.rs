use crate::app::{
    action::Action,
    blink::BlinkTimer,
    command::Command,
    input::map_event_to_action,
    keymap::KeyMap,
    reducer,
    state::{SessionMode, SessionOutcome, SessionState},
    ui,
};
use crate::theme::Theme;

use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::Backend, Terminal};
use std::time::Duration;
use tokio::sync::mpsc;

const INPUT_POLL: Duration = Duration::from_millis(50);

/// Everything the runtime needs besides the state itself.
pub struct SessionContext<'a> {
    pub keymap: &'a KeyMap,
    pub theme: &'a Theme,
    /// `None` disables the blinking cursor.
    pub blink_interval: Option<Duration>,
}

pub async fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    state: SessionState,
    ctx: &SessionContext<'_>,
) -> Result<SessionOutcome> {
    // User input channel. The reader polls so it notices a dropped receiver
    // and never holds up runtime shutdown.
    let (event_tx, event_rx) = mpsc::channel(100);
    tokio::task::spawn_blocking(move || loop {
        if event_tx.is_closed() {
            break;
        }
        match event::poll(INPUT_POLL) {
            Ok(false) => {}
            Ok(true) => match event::read() {
                Ok(evt) => {
                    if event_tx.blocking_send(Ok(evt)).is_err() {
                        break;
                    }
                }
                Err(e) => {
                    let _ = event_tx.blocking_send(Err(e));
                    break;
                }
            },
            Err(e) => {
                let _ = event_tx.blocking_send(Err(e));
                break;
            }
        }
    });

    run_loop_with_events(terminal, state, ctx, event_rx).await
}

pub async fn run_loop_with_events<B: Backend>(
    terminal: &mut Terminal<B>,
    mut state: SessionState,
    ctx: &SessionContext<'_>,
    mut event_rx: mpsc::Receiver<Result<Event, std::io::Error>>,
) -> Result<SessionOutcome> {
    let (action_tx, mut action_rx) = mpsc::channel(16);
    // Lives until this function returns, on every path.
    let _blink = ctx
        .blink_interval
        .map(|period| BlinkTimer::start(period, action_tx.clone()));
    drop(action_tx);

    tracing::info!(
        items = state.items.len(),
        dir = %state.working_directory.display(),
        "session started"
    );

    loop {
        // --- 1. Render ---
        let snapshot = state.snapshot();
        terminal.draw(|f| ui::draw(f, &snapshot, ctx.theme))?;

        // --- 2. Next event ---
        let action: Option<Action> = tokio::select! {
            res = event_rx.recv() => match res {
                Some(Ok(event)) => map_event_to_action(&event, ctx.keymap),
                Some(Err(e)) => return Err(e.into()),
                None => {
                    tracing::info!("input closed, ending session");
                    return Ok(SessionOutcome::Cancelled);
                }
            },

            // Timer
            Some(a) = action_rx.recv() => Some(a),
        };

        // --- 3. Update ---
        let Some(action) = action else { continue };
        if let Some(Command::Launch(request)) = reducer::update(&mut state, action) {
            tracing::info!(command = %request.command, "session confirmed");
            return Ok(SessionOutcome::Launch(request));
        }
        if state.mode == SessionMode::Cancelled {
            tracing::info!("session cancelled");
            return Ok(SessionOutcome::Cancelled);
        }
    }
}

#[cfg(test)]
#[path = "loop_tests.rs"]
mod tests;
