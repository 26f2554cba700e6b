//! Unified application error type.
//! All modules (db, core, cli, export) return AppError to keep the error
//! handling consistent and easy to manage.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Database-related
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    // ---------------------------
    // Parsing errors
    // ---------------------------
    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    #[error("Invalid time format: {0}")]
    InvalidTime(String),

    #[error("Invalid month (expected YYYY-MM): {0}")]
    InvalidMonth(String),

    #[error("Invalid entry kind: {0}")]
    InvalidKind(String),

    #[error("Invalid amount: {0}")]
    InvalidAmount(String),

    // ---------------------------
    // Validation errors
    // ---------------------------
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    #[error("Computed work duration is negative ({0} minutes): check start, end and break")]
    NegativeDuration(i64),

    #[error("Hours and minutes are both zero: nothing to record")]
    EmptyDuration,

    #[error("Nothing to settle for {0}: payable amount is zero")]
    ZeroPayable(String),

    // ---------------------------
    // Lookup errors
    // ---------------------------
    #[error("No entry with id {0}")]
    EntryNotFound(u64),

    #[error("Invalid position: {0}")]
    InvalidPosition(usize),

    #[error("Invalid entry id: {0}")]
    InvalidId(String),

    #[error("No entry ids left")]
    IdsExhausted,

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export / import errors
    // ---------------------------
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unsupported snapshot version: {0}")]
    SnapshotVersion(u32),

    #[error("Invalid snapshot: {0}")]
    InvalidSnapshot(String),

    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("Internal error: {0}")]
    Other(String),
}

pub type AppResult<T> = Result<T, AppError>;
