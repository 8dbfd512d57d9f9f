//! Session counters updated by terminal transitions

use serde::{Deserialize, Serialize};

/// Running totals since process start. Never decremented, never persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionCounters {
    pub finished: u64,
    pub cancelled: u64,
    pub breaks: u64,
}

impl SessionCounters {
    /// Create counters with every total at zero
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_finished(&mut self) -> u64 {
        self.finished += 1;
        self.finished
    }

    pub fn record_cancelled(&mut self) -> u64 {
        self.cancelled += 1;
        self.cancelled
    }

    pub fn record_break(&mut self) -> u64 {
        self.breaks += 1;
        self.breaks
    }

    pub fn finished_label(&self) -> String {
        format!("Finished: {}", self.finished)
    }

    pub fn cancelled_label(&self) -> String {
        format!("Cancelled: {}", self.cancelled)
    }

    pub fn breaks_label(&self) -> String {
        format!("Breaks: {}", self.breaks)
    }
}
