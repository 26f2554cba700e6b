use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Non-work entry kinds. At most one of these may exist per date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum LeaveKind {
    /// Requested leave (unpaid)
    Leave,
    /// Scheduled day off
    #[value(name = "off")]
    ScheduledOff,
}

impl LeaveKind {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            LeaveKind::Leave => "leave",
            LeaveKind::ScheduledOff => "off",
        }
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "leave" => Some(LeaveKind::Leave),
            "off" => Some(LeaveKind::ScheduledOff),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LeaveKind::Leave => "Leave",
            LeaveKind::ScheduledOff => "Day off",
        }
    }
}
