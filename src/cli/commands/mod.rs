pub mod add;
pub mod backup;
pub mod calendar;
pub mod clear;
pub mod config;
pub mod db;
pub mod del;
pub mod export;
pub mod history;
pub mod import;
pub mod init;
pub mod leave;
pub mod list;
pub mod log;
pub mod pref;
pub mod settle;

use crate::config::Config;
use crate::core::tracker::Tracker;
use crate::db::storage::SqliteStorage;
use crate::errors::AppResult;
use crate::models::month::YearMonth;

/// Open the configured database and load the session state.
pub(crate) fn open_tracker(cfg: &Config) -> AppResult<Tracker<SqliteStorage>> {
    let storage = SqliteStorage::open(&cfg.database)?;
    Tracker::open(storage)
}

/// `--month` (default: current month) moved by `--offset`.
pub(crate) fn resolve_month(month: &Option<String>, offset: i32) -> AppResult<YearMonth> {
    let base = match month {
        Some(m) => YearMonth::parse(m)?,
        None => YearMonth::current(),
    };
    base.shift(offset)
}
