//! The session-owned repository: log store, settlement history and
//! preferences, loaded once from a `Storage` and written back in full after
//! every mutation.
//!
//! Each mutating method works on a copy and only swaps it in once the save
//! succeeded, so a failed action leaves both memory and storage untouched.

use crate::core::aggregate::{self, MonthView};
use crate::core::calendar::{self, CalendarCell};
use crate::core::duration;
use crate::core::settlement::SettlementBook;
use crate::core::storage::Storage;
use crate::core::store::{LogStore, MAX_ENTRY_ID};
use crate::errors::{AppError, AppResult};
use crate::models::entry::{EntryKind, LogEntry, WorkDetail};
use crate::models::entry_kind::LeaveKind;
use crate::models::month::YearMonth;
use crate::models::preferences::Preferences;
use crate::models::settlement::MonthlySettlement;
use crate::utils::date::parse_date;
use crate::utils::formatting::{fmt_hours, fmt_money};
use crate::utils::time::parse_time;
use chrono::{DateTime, Local, NaiveDate};
use std::collections::HashSet;

/// Raw input for a clock-in/clock-out work entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct ClockForm<'a> {
    /// Overrides the saved hourly rate when present
    pub rate: Option<f64>,
    pub date: Option<&'a str>,
    pub start: Option<&'a str>,
    pub end: Option<&'a str>,
    pub break_minutes: Option<i64>,
}

/// Raw input for an hours + minutes work entry.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpanForm<'a> {
    pub rate: Option<f64>,
    pub date: Option<&'a str>,
    pub hours: u32,
    pub minutes: u32,
}

pub struct Tracker<S: Storage> {
    storage: S,
    store: LogStore,
    book: SettlementBook,
    prefs: Preferences,
}

fn require<'a>(value: Option<&'a str>, field: &'static str) -> AppResult<&'a str> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or(AppError::MissingField(field))
}

fn require_date(value: Option<&str>) -> AppResult<NaiveDate> {
    let raw = require(value, "date")?;
    parse_date(raw).ok_or_else(|| AppError::InvalidDate(raw.to_string()))
}

fn check_non_negative(name: &str, value: f64) -> AppResult<f64> {
    if !value.is_finite() || value < 0.0 {
        return Err(AppError::InvalidAmount(format!(
            "{name} must be a non-negative number, got {value}"
        )));
    }
    Ok(value)
}

impl<S: Storage> Tracker<S> {
    /// Load all persisted state from `storage`.
    pub fn open(mut storage: S) -> AppResult<Self> {
        let entries = storage.load_entries()?;
        let settlements = storage.load_settlements()?;
        let prefs = storage.load_preferences()?;

        Ok(Self {
            storage,
            store: LogStore::from_entries(entries),
            book: SettlementBook::from_records(settlements),
            prefs,
        })
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    pub fn entries(&self) -> &[LogEntry] {
        self.store.entries()
    }

    pub fn settlements(&self) -> &[MonthlySettlement] {
        self.book.records()
    }

    pub fn preferences(&self) -> Preferences {
        self.prefs
    }

    // ------------------------------------------------
    // Commit helpers
    // ------------------------------------------------

    fn commit_store(&mut self, next: LogStore) -> AppResult<()> {
        self.storage.save_entries(next.entries())?;
        self.store = next;
        Ok(())
    }

    fn commit_book(&mut self, next: SettlementBook) -> AppResult<()> {
        self.storage.save_settlements(next.records())?;
        self.book = next;
        Ok(())
    }

    fn commit_prefs(&mut self, next: Preferences) -> AppResult<()> {
        self.storage.save_preferences(&next)?;
        self.prefs = next;
        Ok(())
    }

    fn resolve_rate(&self, rate: Option<f64>) -> AppResult<f64> {
        let rate = rate.unwrap_or(self.prefs.hourly_rate);
        let rate = check_non_negative("hourly rate", rate)?;
        if rate == 0.0 {
            return Err(AppError::MissingField("hourly rate"));
        }
        Ok(rate)
    }

    fn push_work(
        &mut self,
        date: NaiveDate,
        hours: f64,
        rate: f64,
        detail: WorkDetail,
    ) -> AppResult<LogEntry> {
        let kind = EntryKind::Work {
            total_hours: hours,
            salary: duration::salary_for(hours, rate),
            detail,
        };

        let mut next = self.store.clone();
        let id = next.append(date, kind)?;
        self.commit_store(next)?;

        let entry = self
            .store
            .get(id)
            .cloned()
            .ok_or(AppError::EntryNotFound(id))?;

        self.storage.record(
            "add",
            &entry.date_str(),
            &format!(
                "Work {} h, {} ({})",
                fmt_hours(entry.total_hours()),
                fmt_money(entry.salary()),
                detail.describe()
            ),
        );

        Ok(entry)
    }

    // ------------------------------------------------
    // Log entries
    // ------------------------------------------------

    /// Add a work entry from clock-in/clock-out times and a break.
    pub fn add_work_clock(&mut self, form: ClockForm<'_>) -> AppResult<LogEntry> {
        let rate = self.resolve_rate(form.rate)?;
        let date = require_date(form.date)?;

        let start_raw = require(form.start, "start time")?;
        let end_raw = require(form.end, "end time")?;
        let start = parse_time(start_raw).ok_or_else(|| AppError::InvalidTime(start_raw.into()))?;
        let end = parse_time(end_raw).ok_or_else(|| AppError::InvalidTime(end_raw.into()))?;
        let break_minutes = form.break_minutes.unwrap_or(0);

        let hours = duration::hours_from_clock(start, end, break_minutes)?;

        self.push_work(
            date,
            hours,
            rate,
            WorkDetail::Clock {
                start,
                end,
                break_minutes,
            },
        )
    }

    /// Add a work entry from an hours + minutes pair.
    pub fn add_work_span(&mut self, form: SpanForm<'_>) -> AppResult<LogEntry> {
        let rate = self.resolve_rate(form.rate)?;
        let date = require_date(form.date)?;
        let hours = duration::hours_from_span(form.hours, form.minutes)?;

        self.push_work(
            date,
            hours,
            rate,
            WorkDetail::Span {
                hours: form.hours,
                minutes: form.minutes,
            },
        )
    }

    /// Add a leave/off entry, replacing an existing one on the same date.
    pub fn add_leave(&mut self, date: Option<&str>, kind: LeaveKind) -> AppResult<LogEntry> {
        let date = require_date(date)?;

        let mut next = self.store.clone();
        let id = next.upsert_leave(date, kind)?;
        let replaced = self.store.get(id).is_some();
        self.commit_store(next)?;

        let entry = self
            .store
            .get(id)
            .cloned()
            .ok_or(AppError::EntryNotFound(id))?;

        self.storage.record(
            if replaced { "edit" } else { "leave" },
            &entry.date_str(),
            kind.label(),
        );

        Ok(entry)
    }

    pub fn delete_entry(&mut self, id: u64) -> AppResult<LogEntry> {
        let mut next = self.store.clone();
        let removed = next.delete(id)?;
        self.commit_store(next)?;

        self.storage.record("del", &removed.date_str(), &format!("Deleted entry #{id}"));
        Ok(removed)
    }

    /// Delete by position in full insertion order.
    pub fn delete_entry_at(&mut self, position: usize) -> AppResult<LogEntry> {
        let mut next = self.store.clone();
        let removed = next.delete_at(position)?;
        self.commit_store(next)?;

        self.storage.record(
            "del",
            &removed.date_str(),
            &format!("Deleted entry #{} at position {position}", removed.id),
        );
        Ok(removed)
    }

    /// Remove every log entry. Returns how many were removed.
    pub fn clear_logs(&mut self) -> AppResult<usize> {
        let removed = self.store.len();
        let mut next = self.store.clone();
        next.clear();
        self.commit_store(next)?;

        self.storage.record("clear", "entries", &format!("Removed {removed} entries"));
        Ok(removed)
    }

    // ------------------------------------------------
    // Views
    // ------------------------------------------------

    pub fn month_view(&self, month: YearMonth) -> MonthView {
        aggregate::month_view(self.store.entries(), month)
    }

    pub fn calendar(&self, month: YearMonth) -> Vec<CalendarCell> {
        let view = self.month_view(month);
        calendar::project(month, &view.daily)
    }

    // ------------------------------------------------
    // Settlements
    // ------------------------------------------------

    /// Settle `month` using its gross salary. Deductions default to the saved
    /// preferences.
    pub fn settle(
        &mut self,
        month: YearMonth,
        labor_deduction: Option<f64>,
        health_deduction: Option<f64>,
        now: DateTime<Local>,
    ) -> AppResult<MonthlySettlement> {
        let payable = self.month_view(month).payable();
        let labor = labor_deduction.unwrap_or(self.prefs.labor_deduction);
        let health = health_deduction.unwrap_or(self.prefs.health_deduction);

        let mut next = self.book.clone();
        let record = next.save(month, payable, labor, health, now)?;
        self.commit_book(next)?;

        self.storage.record(
            "settle",
            &month.key(),
            &format!(
                "payable {} - labor {} - health {} = net {}",
                fmt_money(record.payable),
                fmt_money(record.labor_deduction),
                fmt_money(record.health_deduction),
                fmt_money(record.net)
            ),
        );

        Ok(record)
    }

    pub fn clear_settlements(&mut self) -> AppResult<usize> {
        let removed = self.book.len();
        let mut next = self.book.clone();
        next.clear_all();
        self.commit_book(next)?;

        self.storage.record("clear", "settlements", &format!("Removed {removed} settlements"));
        Ok(removed)
    }

    // ------------------------------------------------
    // Preferences
    // ------------------------------------------------

    /// Update only the values that are given.
    pub fn update_preferences(
        &mut self,
        hourly_rate: Option<f64>,
        labor_deduction: Option<f64>,
        health_deduction: Option<f64>,
    ) -> AppResult<Preferences> {
        let mut next = self.prefs;
        if let Some(v) = hourly_rate {
            next.hourly_rate = check_non_negative("hourly rate", v)?;
        }
        if let Some(v) = labor_deduction {
            next.labor_deduction = check_non_negative("labor deduction", v)?;
        }
        if let Some(v) = health_deduction {
            next.health_deduction = check_non_negative("health deduction", v)?;
        }

        self.commit_prefs(next)?;
        Ok(next)
    }

    pub fn reset_preferences(&mut self) -> AppResult<Preferences> {
        let next = Preferences::reset();
        self.commit_prefs(next)?;
        self.storage.record("pref", "reset", "Preferences reset to defaults");
        Ok(next)
    }

    // ------------------------------------------------
    // Bulk replace (import)
    // ------------------------------------------------

    /// Replace all state at once.
    ///
    /// The incoming data must satisfy the same rules as interactive edits:
    /// unique ids within `MAX_ENTRY_ID`, at most one leave/off entry per date,
    /// non-negative work figures, settlements that `SettlementBook::save`
    /// accepts (their net is recomputed) and non-negative preferences.
    /// Nothing is written unless everything passes.
    pub fn replace_all(
        &mut self,
        entries: Vec<LogEntry>,
        settlements: Vec<MonthlySettlement>,
        prefs: Preferences,
    ) -> AppResult<()> {
        let mut seen = HashSet::new();
        let mut absences = HashSet::new();
        for e in &entries {
            if e.id == 0 || e.id > MAX_ENTRY_ID {
                return Err(AppError::InvalidId(e.id.to_string()));
            }
            if !seen.insert(e.id) {
                return Err(AppError::InvalidSnapshot(format!("duplicate entry id {}", e.id)));
            }
            if e.is_absence() && !absences.insert(e.date) {
                return Err(AppError::InvalidSnapshot(format!(
                    "more than one leave/off entry on {}",
                    e.date_str()
                )));
            }
            if e.is_work() {
                check_non_negative("work hours", e.total_hours())?;
                check_non_negative("salary", e.salary())?;
            }
        }

        let mut months = HashSet::new();
        let mut book = SettlementBook::new();
        for s in &settlements {
            if !months.insert(s.month) {
                return Err(AppError::InvalidSnapshot(format!(
                    "duplicate settlement for {}",
                    s.month
                )));
            }
            book.save(
                s.month,
                s.payable,
                s.labor_deduction,
                s.health_deduction,
                s.saved_at,
            )?;
        }

        let prefs = Preferences {
            hourly_rate: check_non_negative("hourly rate", prefs.hourly_rate)?,
            labor_deduction: check_non_negative("labor deduction", prefs.labor_deduction)?,
            health_deduction: check_non_negative("health deduction", prefs.health_deduction)?,
        };

        let store = LogStore::from_entries(entries);

        self.storage.save_entries(store.entries())?;
        self.storage.save_settlements(book.records())?;
        self.storage.save_preferences(&prefs)?;

        self.storage.record(
            "import",
            "snapshot",
            &format!(
                "Imported {} entries and {} settlements",
                store.len(),
                book.len()
            ),
        );

        self.store = store;
        self.book = book;
        self.prefs = prefs;
        Ok(())
    }
}
