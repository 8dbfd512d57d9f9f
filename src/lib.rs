//! Focus Tray - A tray-style focus/break countdown timer
//!
//! This library provides the single-active-timer state machine, the session
//! counters it maintains, and the tray presentation contract it drives.

pub mod config;
pub mod state;
pub mod tray;
pub mod tasks;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use state::AppState;
pub use tray::{ConsoleTray, TrayPresenter};
pub use utils::{format_remaining, shutdown_signal};
