//! Ordered collection of log entries.
//!
//! Entries keep their insertion order. Every entry carries a stable id so
//! callers that show a filtered view never have to translate view indices
//! back into store positions.

use crate::errors::{AppError, AppResult};
use crate::models::entry::{EntryKind, LogEntry};
use crate::models::entry_kind::LeaveKind;
use chrono::NaiveDate;

/// Largest id an entry may carry (ids are stored as SQLite INTEGER).
pub const MAX_ENTRY_ID: u64 = i64::MAX as u64;

#[derive(Debug, Clone, Default)]
pub struct LogStore {
    entries: Vec<LogEntry>,
    next_id: u64,
}

impl LogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a store from persisted entries, keeping their order and ids.
    ///
    /// The next id is one past the largest existing id. When that would pass
    /// `MAX_ENTRY_ID`, the store still loads but refuses new entries.
    pub fn from_entries(entries: Vec<LogEntry>) -> Self {
        let max_id = entries.iter().map(|e| e.id).max().unwrap_or(0);
        let next_id = max_id.checked_add(1).unwrap_or(u64::MAX);
        Self { entries, next_id }
    }

    fn take_id(&mut self) -> AppResult<u64> {
        let id = self.next_id.max(1);
        if id > MAX_ENTRY_ID {
            return Err(AppError::IdsExhausted);
        }
        self.next_id = id + 1;
        Ok(id)
    }

    /// Add an entry at the end. No uniqueness is enforced.
    pub fn append(&mut self, date: NaiveDate, kind: EntryKind) -> AppResult<u64> {
        let id = self.take_id()?;
        self.entries.push(LogEntry::new(id, date, kind));
        Ok(id)
    }

    /// Record a leave/off day.
    ///
    /// An existing leave or off entry on the same date is replaced in place
    /// (same position, same id). Work entries on that date are untouched.
    pub fn upsert_leave(&mut self, date: NaiveDate, kind: LeaveKind) -> AppResult<u64> {
        if let Some(existing) = self
            .entries
            .iter_mut()
            .find(|e| e.date == date && e.is_absence())
        {
            *existing = LogEntry::new(existing.id, date, kind.into());
            return Ok(existing.id);
        }

        self.append(date, kind.into())
    }

    /// Remove the entry with the given id.
    pub fn delete(&mut self, id: u64) -> AppResult<LogEntry> {
        let pos = self.position_of(id).ok_or(AppError::EntryNotFound(id))?;
        Ok(self.entries.remove(pos))
    }

    /// Remove the entry at `position` in full insertion order.
    pub fn delete_at(&mut self, position: usize) -> AppResult<LogEntry> {
        if position >= self.entries.len() {
            return Err(AppError::InvalidPosition(position));
        }
        Ok(self.entries.remove(position))
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn position_of(&self, id: u64) -> Option<usize> {
        self.entries.iter().position(|e| e.id == id)
    }

    pub fn get(&self, id: u64) -> Option<&LogEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    pub fn entries(&self) -> &[LogEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
