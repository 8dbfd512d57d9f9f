//! In-memory tray that records every presentation call

use super::{IconState, MenuSlot, TrayPresenter};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrayCall {
    Icon(IconState),
    Title(String),
    Label(MenuSlot, String),
}

/// Headless presenter; optionally fails every call to exercise error paths
#[derive(Debug, Default)]
pub struct RecordingTray {
    pub calls: Vec<TrayCall>,
    pub failing: bool,
}

impl RecordingTray {
    pub fn new() -> Self {
        Self::default()
    }

    /// A tray whose every call returns an error (after recording it)
    pub fn failing() -> Self {
        Self { calls: Vec::new(), failing: true }
    }

    pub fn last_title(&self) -> Option<&str> {
        self.calls.iter().rev().find_map(|call| match call {
            TrayCall::Title(text) => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn last_icon(&self) -> Option<IconState> {
        self.calls.iter().rev().find_map(|call| match call {
            TrayCall::Icon(icon) => Some(*icon),
            _ => None,
        })
    }

    pub fn last_label(&self, slot: MenuSlot) -> Option<&str> {
        self.calls.iter().rev().find_map(|call| match call {
            TrayCall::Label(s, text) if *s == slot => Some(text.as_str()),
            _ => None,
        })
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }

    fn record(&mut self, call: TrayCall) -> Result<(), String> {
        self.calls.push(call);
        if self.failing {
            Err("recording tray set to fail".to_string())
        } else {
            Ok(())
        }
    }
}

impl TrayPresenter for RecordingTray {
    fn set_icon(&mut self, icon: IconState) -> Result<(), String> {
        self.record(TrayCall::Icon(icon))
    }

    fn set_title(&mut self, text: &str) -> Result<(), String> {
        self.record(TrayCall::Title(text.to_string()))
    }

    fn set_menu_label(&mut self, slot: MenuSlot, text: &str) -> Result<(), String> {
        self.record(TrayCall::Label(slot, text.to_string()))
    }
}
