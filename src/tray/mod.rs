//! Tray presentation module
//!
//! This module defines the contract between the timer state machine and the
//! surface that shows it: icon, title text, and the menu with its counter
//! labels and actions.

pub mod console;
pub mod menu;
pub mod recording;

// Re-export main types
pub use console::ConsoleTray;
pub use menu::{Menu, MenuAction, MenuItem};
pub use recording::{RecordingTray, TrayCall};

/// Icon shown in the tray
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconState {
    Default,
    InProgress,
}

impl IconState {
    /// Asset file backing this icon
    pub fn file_name(&self) -> &'static str {
        match self {
            IconState::Default => "default.png",
            IconState::InProgress => "in-progress.png",
        }
    }
}

/// Menu entries whose label reflects a counter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuSlot {
    Finished,
    Cancelled,
    Breaks,
}

/// Presentation collaborator driven by `AppState`.
///
/// Failures are reported back but never influence timer state; the caller
/// logs them and moves on.
pub trait TrayPresenter {
    fn set_icon(&mut self, icon: IconState) -> Result<(), String>;

    /// Receives `MM:SS` text, `00:00` when idle
    fn set_title(&mut self, text: &str) -> Result<(), String>;

    fn set_menu_label(&mut self, slot: MenuSlot, text: &str) -> Result<(), String>;
}
