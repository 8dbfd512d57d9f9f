//! Background tasks module
//!
//! This module contains the event loop that drives the countdown and the
//! task that turns console input into menu actions.

pub mod event_loop;
pub mod menu_input;

// Re-export main functions
pub use event_loop::{dispatch, run_event_loop, Flow, LoopExit};
pub use menu_input::menu_input_task;
