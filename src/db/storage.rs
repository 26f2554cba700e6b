//! SQLite-backed `Storage`.
//!
//! Whole collections are rewritten inside one transaction on every save, so
//! the database always holds either the previous or the new state.

use crate::core::storage::Storage;
use crate::db::initialize::init_db;
use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::entry::{EntryKind, LogEntry, WorkDetail};
use crate::models::entry_kind::LeaveKind;
use crate::models::month::YearMonth;
use crate::models::preferences::Preferences;
use crate::models::settlement::MonthlySettlement;
use crate::ui::messages::warning;
use chrono::{DateTime, Local, NaiveDate, NaiveTime};
use rusqlite::types::Type;
use rusqlite::{Connection, OptionalExtension, Row, params};

pub struct SqliteStorage {
    pool: DbPool,
}

fn conversion_error(col: usize, err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(col, Type::Text, Box::new(err))
}

fn map_entry(row: &Row) -> rusqlite::Result<LogEntry> {
    let date_str: String = row.get("date")?;
    let date = NaiveDate::parse_from_str(&date_str, "%Y-%m-%d")
        .map_err(|_| conversion_error(2, AppError::InvalidDate(date_str.clone())))?;

    let kind_str: String = row.get("kind")?;
    let kind = match kind_str.as_str() {
        "work" => EntryKind::Work {
            total_hours: row.get("total_hours")?,
            salary: row.get("salary")?,
            detail: map_detail(row)?,
        },
        other => LeaveKind::from_db_str(other)
            .map(EntryKind::from)
            .ok_or_else(|| conversion_error(3, AppError::InvalidKind(other.to_string())))?,
    };

    let raw_id: i64 = row.get("id")?;
    let id = u64::try_from(raw_id)
        .map_err(|_| conversion_error(0, AppError::InvalidId(raw_id.to_string())))?;

    Ok(LogEntry {
        id,
        date,
        kind,
        created_at: row.get("created_at")?,
    })
}

fn map_detail(row: &Row) -> rusqlite::Result<WorkDetail> {
    let mode: String = row.get("mode")?;

    if mode == "span" {
        return Ok(WorkDetail::Span {
            hours: row.get::<_, Option<u32>>("span_hours")?.unwrap_or(0),
            minutes: row.get::<_, Option<u32>>("span_minutes")?.unwrap_or(0),
        });
    }

    let parse = |col: &str| -> rusqlite::Result<NaiveTime> {
        let raw: String = row.get::<_, Option<String>>(col)?.unwrap_or_default();
        NaiveTime::parse_from_str(&raw, "%H:%M")
            .map_err(|_| conversion_error(0, AppError::InvalidTime(raw.clone())))
    };

    Ok(WorkDetail::Clock {
        start: parse("start_time")?,
        end: parse("end_time")?,
        break_minutes: row.get::<_, Option<i64>>("break_minutes")?.unwrap_or(0),
    })
}

fn map_settlement(row: &Row) -> rusqlite::Result<MonthlySettlement> {
    let month_str: String = row.get("month")?;
    let month = YearMonth::parse(&month_str).map_err(|e| conversion_error(0, e))?;

    let saved_str: String = row.get("saved_at")?;
    let saved_at = DateTime::parse_from_rfc3339(&saved_str)
        .map(|dt| dt.with_timezone(&Local))
        .map_err(|_| conversion_error(5, AppError::InvalidDate(saved_str.clone())))?;

    Ok(MonthlySettlement {
        month,
        payable: row.get("payable")?,
        labor_deduction: row.get("labor_deduction")?,
        health_deduction: row.get("health_deduction")?,
        net: row.get("net")?,
        saved_at,
    })
}

fn insert_entry(conn: &Connection, seq: usize, e: &LogEntry) -> AppResult<()> {
    let id = i64::try_from(e.id).map_err(|_| AppError::InvalidId(e.id.to_string()))?;

    let (mode, start, end, brk, span_h, span_m) = match &e.kind {
        EntryKind::Work {
            detail:
                WorkDetail::Clock {
                    start,
                    end,
                    break_minutes,
                },
            ..
        } => (
            "clock",
            Some(start.format("%H:%M").to_string()),
            Some(end.format("%H:%M").to_string()),
            Some(*break_minutes),
            None,
            None,
        ),
        EntryKind::Work {
            detail: WorkDetail::Span { hours, minutes },
            ..
        } => ("span", None, None, None, Some(*hours), Some(*minutes)),
        _ => ("", None, None, None, None, None),
    };

    conn.execute(
        "INSERT INTO entries (id, seq, date, kind, total_hours, salary, mode,
                              start_time, end_time, break_minutes, span_hours, span_minutes, created_at)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)",
        params![
            id,
            seq as i64,
            e.date_str(),
            e.kind.to_db_str(),
            e.total_hours(),
            e.salary(),
            mode,
            start,
            end,
            brk,
            span_h,
            span_m,
            e.created_at,
        ],
    )?;
    Ok(())
}

impl SqliteStorage {
    /// Open the database at `path`, creating the schema when missing.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn conn(&self) -> &Connection {
        &self.pool.conn
    }
}

impl Storage for SqliteStorage {
    fn load_entries(&mut self) -> AppResult<Vec<LogEntry>> {
        let mut stmt = self.pool.conn.prepare(
            "SELECT * FROM entries
             ORDER BY seq ASC, id ASC",
        )?;

        let rows = stmt.query_map([], map_entry)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn save_entries(&mut self, entries: &[LogEntry]) -> AppResult<()> {
        let tx = self.pool.conn.transaction()?;
        tx.execute("DELETE FROM entries", [])?;
        for (seq, e) in entries.iter().enumerate() {
            insert_entry(&tx, seq, e)?;
        }
        tx.commit()?;
        Ok(())
    }

    fn load_settlements(&mut self) -> AppResult<Vec<MonthlySettlement>> {
        let mut stmt = self
            .pool
            .conn
            .prepare("SELECT * FROM settlements ORDER BY month DESC")?;

        let rows = stmt.query_map([], map_settlement)?;

        let mut out = Vec::new();
        for r in rows {
            out.push(r?);
        }
        Ok(out)
    }

    fn save_settlements(&mut self, records: &[MonthlySettlement]) -> AppResult<()> {
        let tx = self.pool.conn.transaction()?;
        tx.execute("DELETE FROM settlements", [])?;
        for s in records {
            tx.execute(
                "INSERT INTO settlements (month, payable, labor_deduction, health_deduction, net, saved_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                params![
                    s.month.key(),
                    s.payable,
                    s.labor_deduction,
                    s.health_deduction,
                    s.net,
                    s.saved_at.to_rfc3339(),
                ],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    fn load_preferences(&mut self) -> AppResult<Preferences> {
        let mut prefs = Preferences::default();
        let mut stmt = self
            .pool
            .conn
            .prepare("SELECT value FROM preferences WHERE key = ?1")?;

        for key in Preferences::KEYS {
            let value: Option<f64> = stmt.query_row([key], |row| row.get(0)).optional()?;
            if let Some(v) = value {
                prefs.set(key, v);
            }
        }
        Ok(prefs)
    }

    fn save_preferences(&mut self, prefs: &Preferences) -> AppResult<()> {
        let tx = self.pool.conn.transaction()?;
        for key in Preferences::KEYS {
            if let Some(value) = prefs.get(key) {
                tx.execute(
                    "INSERT INTO preferences (key, value) VALUES (?1, ?2)
                     ON CONFLICT(key) DO UPDATE SET value = excluded.value",
                    params![key, value],
                )?;
            }
        }
        tx.commit()?;
        Ok(())
    }

    fn record(&mut self, operation: &str, target: &str, message: &str) {
        if let Err(e) = ttlog(&self.pool.conn, operation, target, message) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }
}
