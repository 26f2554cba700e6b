use crate::errors::AppResult;
use crate::models::entry::{EntryKind, LogEntry, WorkDetail};
use csv::Writer;
use std::path::Path;

const HEADERS: [&str; 10] = [
    "id",
    "date",
    "kind",
    "total_hours",
    "salary",
    "start",
    "end",
    "break_minutes",
    "span_hours",
    "span_minutes",
];

/// Write log entries as CSV. Hours and salary keep full precision.
pub fn write_entries(path: &Path, entries: &[LogEntry]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(HEADERS)?;

    for e in entries {
        let (start, end, brk, span_h, span_m) = match &e.kind {
            EntryKind::Work {
                detail:
                    WorkDetail::Clock {
                        start,
                        end,
                        break_minutes,
                    },
                ..
            } => (
                start.format("%H:%M").to_string(),
                end.format("%H:%M").to_string(),
                break_minutes.to_string(),
                String::new(),
                String::new(),
            ),
            EntryKind::Work {
                detail: WorkDetail::Span { hours, minutes },
                ..
            } => (
                String::new(),
                String::new(),
                String::new(),
                hours.to_string(),
                minutes.to_string(),
            ),
            _ => Default::default(),
        };

        wtr.write_record([
            e.id.to_string(),
            e.date_str(),
            e.kind.to_db_str().to_string(),
            e.total_hours().to_string(),
            e.salary().to_string(),
            start,
            end,
            brk,
            span_h,
            span_m,
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
