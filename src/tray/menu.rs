//! Tray menu model and the actions it dispatches

use std::{fmt, str::FromStr};

use crate::config::{BREAK_MINUTES, FOCUS_MINUTES};

use super::MenuSlot;

/// User-triggered menu actions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    StartFocus,
    StartBreak,
    RecordDistraction,
    Status,
    Quit,
}

impl MenuAction {
    /// Key typed on the console to trigger this action
    pub fn shortcut(&self) -> &'static str {
        match self {
            MenuAction::StartFocus => "1",
            MenuAction::StartBreak => "2",
            MenuAction::RecordDistraction => "3",
            MenuAction::Status => "s",
            MenuAction::Quit => "q",
        }
    }
}

impl FromStr for MenuAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "1" | "f" | "focus" => Ok(MenuAction::StartFocus),
            "2" | "b" | "break" => Ok(MenuAction::StartBreak),
            "3" | "d" | "distraction" | "cancel" => Ok(MenuAction::RecordDistraction),
            "s" | "status" => Ok(MenuAction::Status),
            "q" | "quit" | "exit" => Ok(MenuAction::Quit),
            other => Err(format!("Unknown menu action: {:?}", other)),
        }
    }
}

/// Single menu row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuItem {
    pub label: String,
    /// `None` for disabled, informational rows
    pub action: Option<MenuAction>,
}

impl MenuItem {
    fn action(label: String, action: MenuAction) -> Self {
        Self { label, action: Some(action) }
    }

    fn info(label: String) -> Self {
        Self { label, action: None }
    }

    pub fn enabled(&self) -> bool {
        self.action.is_some()
    }
}

/// Ordered menu rows as shown in the tray
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    items: Vec<MenuItem>,
}

const FINISHED_INDEX: usize = 3;
const CANCELLED_INDEX: usize = 4;
const BREAKS_INDEX: usize = 5;

impl Menu {
    pub fn new() -> Self {
        Self {
            items: vec![
                MenuItem::action(format!("Focus for {}m", FOCUS_MINUTES), MenuAction::StartFocus),
                MenuItem::action(format!("Break for {}m", BREAK_MINUTES), MenuAction::StartBreak),
                MenuItem::action("Record Distraction".to_string(), MenuAction::RecordDistraction),
                MenuItem::info("Finished: 0".to_string()),
                MenuItem::info("Cancelled: 0".to_string()),
                MenuItem::info("Breaks: 0".to_string()),
                MenuItem::action("Status".to_string(), MenuAction::Status),
                MenuItem::action("Quit".to_string(), MenuAction::Quit),
            ],
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    /// Replace the label of a counter row
    pub fn set_label(&mut self, slot: MenuSlot, text: &str) {
        let index = match slot {
            MenuSlot::Finished => FINISHED_INDEX,
            MenuSlot::Cancelled => CANCELLED_INDEX,
            MenuSlot::Breaks => BREAKS_INDEX,
        };
        self.items[index].label = text.to_string();
    }

    pub fn label(&self, slot: MenuSlot) -> &str {
        match slot {
            MenuSlot::Finished => &self.items[FINISHED_INDEX].label,
            MenuSlot::Cancelled => &self.items[CANCELLED_INDEX].label,
            MenuSlot::Breaks => &self.items[BREAKS_INDEX].label,
        }
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Menu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for item in &self.items {
            match item.action {
                Some(action) => writeln!(f, "[{}] {}", action.shortcut(), item.label)?,
                None => writeln!(f, "    {}", item.label)?,
            }
        }
        Ok(())
    }
}
