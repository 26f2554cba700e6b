//! Monthly rollups over the log store.

use crate::models::day_kind::DayKind;
use crate::models::entry::LogEntry;
use crate::models::month::YearMonth;
use chrono::Datelike;
use std::collections::BTreeMap;

/// Per-day aggregation.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct DayRollup {
    pub hours: f64,
    pub salary: f64,
    pub kind: DayKind,
}

/// Per-month totals over the filtered entries.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Totals {
    pub hours: f64,
    pub salary: f64,
    pub work_entries: usize,
    pub leave_days: usize,
    pub off_days: usize,
}

#[derive(Debug, Clone)]
pub struct MonthView {
    pub month: YearMonth,
    pub entries: Vec<LogEntry>,
    pub totals: Totals,
    pub daily: BTreeMap<u32, DayRollup>,
}

impl MonthView {
    /// Gross salary for the month.
    pub fn payable(&self) -> f64 {
        self.totals.salary
    }
}

/// Entries dated within `month`, in original order.
pub fn filter_month(entries: &[LogEntry], month: YearMonth) -> Vec<LogEntry> {
    entries
        .iter()
        .filter(|e| month.contains(e.date))
        .cloned()
        .collect()
}

pub fn totals(entries: &[LogEntry]) -> Totals {
    let mut t = Totals::default();

    for e in entries {
        t.hours += e.total_hours();
        t.salary += e.salary();

        match DayKind::from(&e.kind) {
            DayKind::Work => t.work_entries += 1,
            DayKind::Leave => t.leave_days += 1,
            DayKind::ScheduledOff => t.off_days += 1,
            DayKind::NoRecord => {}
        }
    }

    t
}

/// Day-of-month → rollup.
///
/// Hours and salary accumulate over every work entry of the day. The day kind
/// follows `DayKind::merge`: a leave/off entry wins over work regardless of
/// the order the entries were recorded in.
pub fn daily_rollup(entries: &[LogEntry]) -> BTreeMap<u32, DayRollup> {
    let mut daily: BTreeMap<u32, DayRollup> = BTreeMap::new();

    for e in entries {
        let day = daily.entry(e.date.day()).or_default();

        if e.is_work() {
            day.hours += e.total_hours();
            day.salary += e.salary();
        }
        day.kind = day.kind.merge(DayKind::from(&e.kind));
    }

    daily
}

pub fn month_view(entries: &[LogEntry], month: YearMonth) -> MonthView {
    let filtered = filter_month(entries, month);
    let totals = totals(&filtered);
    let daily = daily_rollup(&filtered);

    MonthView {
        month,
        entries: filtered,
        totals,
        daily,
    }
}
