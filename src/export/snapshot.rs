//! Versioned JSON serialization of all persisted state.

use crate::errors::{AppError, AppResult};
use crate::models::entry::LogEntry;
use crate::models::preferences::Preferences;
use crate::models::settlement::MonthlySettlement;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub version: u32,
    pub exported_at: DateTime<Local>,
    pub entries: Vec<LogEntry>,
    #[serde(default)]
    pub settlements: Vec<MonthlySettlement>,
    #[serde(default)]
    pub preferences: Preferences,
}

impl Snapshot {
    pub fn capture(
        entries: Vec<LogEntry>,
        settlements: Vec<MonthlySettlement>,
        preferences: Preferences,
    ) -> Self {
        Self {
            version: SNAPSHOT_VERSION,
            exported_at: Local::now(),
            entries,
            settlements,
            preferences,
        }
    }

    pub fn to_json(&self) -> AppResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse a snapshot, rejecting versions this build does not understand.
    pub fn from_json(s: &str) -> AppResult<Self> {
        let snap: Snapshot = serde_json::from_str(s)?;
        if snap.version != SNAPSHOT_VERSION {
            return Err(AppError::SnapshotVersion(snap.version));
        }
        Ok(snap)
    }
}
