use super::entry::EntryKind;
use serde::Serialize;

/// Classification shown for a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum DayKind {
    #[default]
    NoRecord,
    Work,
    ScheduledOff,
    Leave,
}

impl DayKind {
    /// Display precedence: absences always win over work.
    fn rank(&self) -> u8 {
        match self {
            DayKind::NoRecord => 0,
            DayKind::Work => 1,
            DayKind::ScheduledOff | DayKind::Leave => 2,
        }
    }

    /// Merge the kind of one more entry into the current day kind.
    ///
    /// Two absences on the same day cannot happen (the store replaces them),
    /// so equal ranks keep the newer kind.
    pub fn merge(self, other: DayKind) -> DayKind {
        if other.rank() >= self.rank() {
            other
        } else {
            self
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DayKind::NoRecord => "",
            DayKind::Work => "Work",
            DayKind::ScheduledOff => "Off",
            DayKind::Leave => "Leave",
        }
    }
}

impl From<&EntryKind> for DayKind {
    fn from(kind: &EntryKind) -> Self {
        match kind {
            EntryKind::Work { .. } => DayKind::Work,
            EntryKind::ScheduledOff => DayKind::ScheduledOff,
            EntryKind::Leave => DayKind::Leave,
        }
    }
}
