//! Status snapshot structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{SessionCounters, SessionKind};

/// Countdown currently in progress
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ActiveSession {
    pub kind: SessionKind,
    /// `MM:SS` as shown in the tray title
    pub remaining: String,
    pub remaining_ms: u64,
    pub total_seconds: u64,
    pub started_at: DateTime<Utc>,
}

/// Status report printed for the status menu action
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusSnapshot {
    pub counters: SessionCounters,
    pub active: Option<ActiveSession>,
    pub uptime: String,
    pub timestamp: DateTime<Utc>,
}

impl StatusSnapshot {
    pub fn to_json(&self) -> Result<String, String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| format!("Failed to serialize status: {}", e))
    }
}
