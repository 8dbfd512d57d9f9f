//! State management module
//!
//! This module contains the timer session, the session counters and the
//! application state machine that ties them to the tray.

pub mod app_state;
pub mod counters;
pub mod session;
pub mod snapshot;

// Re-export main types
pub use app_state::{AppState, TickOutcome};
pub use counters::SessionCounters;
pub use session::{SessionKind, TimerSession};
pub use snapshot::{ActiveSession, StatusSnapshot};
