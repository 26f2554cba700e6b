//! Load/save boundary between the tracker and durable storage.
//!
//! Every save writes the whole collection. A backend that has never been
//! written to loads as empty collections and default preferences.

use crate::errors::AppResult;
use crate::models::entry::LogEntry;
use crate::models::preferences::Preferences;
use crate::models::settlement::MonthlySettlement;

pub trait Storage {
    fn load_entries(&mut self) -> AppResult<Vec<LogEntry>>;
    fn save_entries(&mut self, entries: &[LogEntry]) -> AppResult<()>;

    fn load_settlements(&mut self) -> AppResult<Vec<MonthlySettlement>>;
    fn save_settlements(&mut self, records: &[MonthlySettlement]) -> AppResult<()>;

    fn load_preferences(&mut self) -> AppResult<Preferences>;
    fn save_preferences(&mut self, prefs: &Preferences) -> AppResult<()>;

    /// Audit hook called after each successful mutation. Backends without an
    /// audit trail ignore it.
    fn record(&mut self, _operation: &str, _target: &str, _message: &str) {}
}

/// Volatile storage, used for tests and dry runs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    pub entries: Vec<LogEntry>,
    pub settlements: Vec<MonthlySettlement>,
    pub preferences: Preferences,
    pub saves: usize,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn load_entries(&mut self) -> AppResult<Vec<LogEntry>> {
        Ok(self.entries.clone())
    }

    fn save_entries(&mut self, entries: &[LogEntry]) -> AppResult<()> {
        self.entries = entries.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn load_settlements(&mut self) -> AppResult<Vec<MonthlySettlement>> {
        Ok(self.settlements.clone())
    }

    fn save_settlements(&mut self, records: &[MonthlySettlement]) -> AppResult<()> {
        self.settlements = records.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn load_preferences(&mut self) -> AppResult<Preferences> {
        Ok(self.preferences)
    }

    fn save_preferences(&mut self, prefs: &Preferences) -> AppResult<()> {
        self.preferences = *prefs;
        self.saves += 1;
        Ok(())
    }
}
