//! Schema migrations.
//!
//! Each migration runs once. Applied versions are recorded in the `log`
//! table as `migration_applied` rows, so the log table itself must exist
//! before anything else.

use crate::ui::messages::success;
use rusqlite::{Connection, OptionalExtension, Result};

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250110_0001_create_entries",
        description: "Created entries table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS entries (
            id             INTEGER PRIMARY KEY,
            seq            INTEGER NOT NULL,
            date           TEXT NOT NULL,
            kind           TEXT NOT NULL CHECK(kind IN ('work','off','leave')),
            total_hours    REAL NOT NULL DEFAULT 0,
            salary         REAL NOT NULL DEFAULT 0,
            mode           TEXT NOT NULL DEFAULT '' CHECK(mode IN ('','clock','span')),
            start_time     TEXT,
            end_time       TEXT,
            break_minutes  INTEGER,
            created_at     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_entries_date ON entries(date);
        "#,
    },
    Migration {
        version: "20250110_0002_create_settlements",
        description: "Created settlements table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS settlements (
            month             TEXT PRIMARY KEY,
            payable           REAL NOT NULL,
            labor_deduction   REAL NOT NULL DEFAULT 0,
            health_deduction  REAL NOT NULL DEFAULT 0,
            net               REAL NOT NULL,
            saved_at          TEXT NOT NULL
        );
        "#,
    },
    Migration {
        version: "20250110_0003_create_preferences",
        description: "Created preferences table",
        sql: r#"
        CREATE TABLE IF NOT EXISTS preferences (
            key    TEXT PRIMARY KEY,
            value  REAL NOT NULL DEFAULT 0
        );
        "#,
    },
    Migration {
        version: "20250214_0004_add_span_columns",
        description: "Added span_hours/span_minutes to entries",
        sql: r#"
        ALTER TABLE entries ADD COLUMN span_hours INTEGER;
        ALTER TABLE entries ADD COLUMN span_minutes INTEGER;
        "#,
    },
    Migration {
        version: "20250214_0005_entries_seq_index",
        description: "Added ordering index on entries",
        sql: r#"
        CREATE INDEX IF NOT EXISTS idx_entries_seq ON entries(seq);
        "#,
    },
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )?;
    Ok(())
}

fn is_applied(conn: &Connection, version: &str) -> Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> Result<()> {
    conn.execute_batch(&format!(
        "BEGIN;\n{}\nINSERT INTO log (date, operation, target, message)
         VALUES (datetime('now'), 'migration_applied', '{}', '{}');\nCOMMIT;",
        m.sql, m.version, m.description
    ))
    .inspect_err(|_| {
        let _ = conn.execute_batch("ROLLBACK;");
    })?;

    Ok(())
}

/// Versions not yet applied, in order.
pub fn pending_migrations(conn: &Connection) -> Result<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            out.push(m.version);
        }
    }
    Ok(out)
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::init_db() and every time a storage is opened.
/// Returns how many migrations were applied.
pub fn run_pending_migrations(conn: &Connection) -> Result<usize> {
    ensure_log_table(conn)?;

    let mut applied = 0;
    for m in MIGRATIONS {
        if is_applied(conn, m.version)? {
            continue;
        }

        apply(conn, m)?;
        applied += 1;
        success(format!("Migration applied: {} → {}", m.version, m.description));
    }

    Ok(applied)
}
