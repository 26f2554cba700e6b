use super::entry_kind::LeaveKind;
use chrono::{Local, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// How a work entry was entered. Presentation only: aggregation never looks at it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum WorkDetail {
    /// Clock-in / clock-out with a break
    Clock {
        start: NaiveTime,
        end: NaiveTime,
        break_minutes: i64,
    },
    /// Plain hours + minutes
    Span { hours: u32, minutes: u32 },
}

impl WorkDetail {
    pub fn describe(&self) -> String {
        match self {
            WorkDetail::Clock {
                start,
                end,
                break_minutes,
            } => format!(
                "{} - {}, break {} min",
                start.format("%H:%M"),
                end.format("%H:%M"),
                break_minutes
            ),
            WorkDetail::Span { hours, minutes } => format!("{}h {:02}m", hours, minutes),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum EntryKind {
    Work {
        total_hours: f64,
        salary: f64,
        detail: WorkDetail,
    },
    ScheduledOff,
    Leave,
}

impl EntryKind {
    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        match self {
            EntryKind::Work { .. } => "work",
            EntryKind::ScheduledOff => LeaveKind::ScheduledOff.to_db_str(),
            EntryKind::Leave => LeaveKind::Leave.to_db_str(),
        }
    }

    pub fn leave_kind(&self) -> Option<LeaveKind> {
        match self {
            EntryKind::Work { .. } => None,
            EntryKind::ScheduledOff => Some(LeaveKind::ScheduledOff),
            EntryKind::Leave => Some(LeaveKind::Leave),
        }
    }
}

impl From<LeaveKind> for EntryKind {
    fn from(kind: LeaveKind) -> Self {
        match kind {
            LeaveKind::Leave => EntryKind::Leave,
            LeaveKind::ScheduledOff => EntryKind::ScheduledOff,
        }
    }
}

/// One record of a day's work or absence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub id: u64,
    pub date: NaiveDate,
    #[serde(flatten)]
    pub kind: EntryKind,
    pub created_at: String, // ISO8601
}

impl LogEntry {
    /// Build an entry stamped with the current local time.
    pub fn new(id: u64, date: NaiveDate, kind: EntryKind) -> Self {
        Self {
            id,
            date,
            kind,
            created_at: Local::now().to_rfc3339(),
        }
    }

    /// Worked hours; zero for non-work kinds.
    pub fn total_hours(&self) -> f64 {
        match self.kind {
            EntryKind::Work { total_hours, .. } => total_hours,
            _ => 0.0,
        }
    }

    /// Earned salary; zero for non-work kinds.
    pub fn salary(&self) -> f64 {
        match self.kind {
            EntryKind::Work { salary, .. } => salary,
            _ => 0.0,
        }
    }

    pub fn is_work(&self) -> bool {
        matches!(self.kind, EntryKind::Work { .. })
    }

    pub fn is_absence(&self) -> bool {
        self.kind.leave_kind().is_some()
    }

    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }
}
