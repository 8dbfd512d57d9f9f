//! Single-threaded event loop: scheduler ticks, menu actions and shutdown

use std::future::Future;

use tokio::{
    sync::mpsc,
    time::{interval, Interval},
};
use tracing::{debug, info, warn};

use crate::{
    config::TICK_INTERVAL,
    state::{AppState, TickOutcome},
    tray::{MenuAction, TrayPresenter},
};

/// Whether the loop keeps going after an action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Why the event loop returned
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopExit {
    Quit,
    Shutdown,
}

/// Apply one menu action to the state. Starting a session re-arms the
/// ticker so the first tick lands a full interval after the start.
pub fn dispatch<T: TrayPresenter>(
    state: &mut AppState<T>,
    ticker: &mut Interval,
    action: MenuAction,
) -> Flow {
    debug!("Dispatching menu action: {:?}", action);

    match action {
        MenuAction::StartFocus => {
            state.start_focus();
            ticker.reset();
        }
        MenuAction::StartBreak => {
            state.start_break();
            ticker.reset();
        }
        MenuAction::RecordDistraction => {
            if state.cancel().is_none() {
                debug!("Nothing running, distraction ignored");
            }
        }
        MenuAction::Status => match state.snapshot().to_json() {
            Ok(json) => info!("Status:\n{}", json),
            Err(e) => warn!("{}", e),
        },
        MenuAction::Quit => return Flow::Quit,
    }

    Flow::Continue
}

/// Run until a quit action or until `shutdown` resolves.
///
/// The ticker is only polled while a session is running. A closed action
/// channel does not stop the loop; the countdown keeps going until shutdown.
pub async fn run_event_loop<T, F>(
    state: &mut AppState<T>,
    mut actions: mpsc::Receiver<MenuAction>,
    shutdown: F,
) -> LoopExit
where
    T: TrayPresenter,
    F: Future<Output = ()>,
{
    info!("Starting event loop");

    tokio::pin!(shutdown);
    let mut ticker = interval(TICK_INTERVAL);
    let mut input_open = true;

    let exit = loop {
        tokio::select! {
            _ = ticker.tick(), if state.is_running() => {
                if let TickOutcome::Completed(kind) = state.tick() {
                    debug!("Countdown for {} session reached zero", kind);
                }
            }

            action = actions.recv(), if input_open => match action {
                Some(action) => {
                    if dispatch(state, &mut ticker, action) == Flow::Quit {
                        info!("Quit requested");
                        break LoopExit::Quit;
                    }
                }
                None => {
                    info!("Menu input closed, timer keeps running until shutdown");
                    input_open = false;
                }
            },

            _ = &mut shutdown => {
                info!("Shutdown signal received");
                break LoopExit::Shutdown;
            }
        }
    };

    if let Some(session) = state.session() {
        info!("Discarding running {} session on exit", session.kind);
    }
    exit
}
