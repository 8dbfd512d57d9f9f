//! Timer session structure and countdown bookkeeping

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of countdown; decides which counter a terminal transition touches
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Focus,
    Break,
}

impl SessionKind {
    pub fn is_break(&self) -> bool {
        matches!(self, SessionKind::Break)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SessionKind::Focus => "focus",
            SessionKind::Break => "break",
        }
    }
}

impl fmt::Display for SessionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One active countdown
#[derive(Debug, Clone)]
pub struct TimerSession {
    pub kind: SessionKind,
    pub total_seconds: u64,
    pub remaining_ms: u64,
    pub started_at: DateTime<Utc>,
}

impl TimerSession {
    /// Create a session counting down from `minutes`
    pub fn new(minutes: u64, kind: SessionKind) -> Self {
        Self {
            kind,
            total_seconds: minutes * 60,
            remaining_ms: minutes * 60_000,
            started_at: Utc::now(),
        }
    }

    pub fn is_break(&self) -> bool {
        self.kind.is_break()
    }

    /// Remove `step_ms` from the countdown, stopping at zero.
    /// Returns the new remaining time.
    pub fn advance(&mut self, step_ms: u64) -> u64 {
        self.remaining_ms = self.remaining_ms.saturating_sub(step_ms);
        self.remaining_ms
    }

    pub fn is_elapsed(&self) -> bool {
        self.remaining_ms == 0
    }
}
