use crate::utils::colors::{CYAN, GREEN, GREY, RESET, YELLOW};
use rusqlite::{Connection, OptionalExtension};
use std::fs;

pub fn print_db_info(conn: &Connection, db_path: &str) -> rusqlite::Result<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.1} KB", CYAN, RESET, file_kb);

    //
    // 2) COUNTS
    //
    let entries: i64 = conn.query_row("SELECT COUNT(*) FROM entries", [], |row| row.get(0))?;
    let work: i64 = conn.query_row(
        "SELECT COUNT(*) FROM entries WHERE kind = 'work'",
        [],
        |row| row.get(0),
    )?;
    let settlements: i64 =
        conn.query_row("SELECT COUNT(*) FROM settlements", [], |row| row.get(0))?;

    println!(
        "{}• Entries:{} {}{}{} ({} work, {} leave/off)",
        CYAN,
        RESET,
        GREEN,
        entries,
        RESET,
        work,
        entries - work
    );
    println!(
        "{}• Settlements:{} {}{}{}",
        CYAN, RESET, GREEN, settlements, RESET
    );

    //
    // 3) DATE RANGE
    //
    let (first_date, last_date): (Option<String>, Option<String>) = conn
        .query_row("SELECT MIN(date), MAX(date) FROM entries", [], |row| {
            Ok((row.get(0)?, row.get(1)?))
        })
        .optional()?
        .unwrap_or((None, None));

    let fmt = |d: Option<String>| d.unwrap_or_else(|| format!("{GREY}--{RESET}"));

    println!("{}• Date range:{}", CYAN, RESET);
    println!("    from: {}", fmt(first_date));
    println!("    to:   {}", fmt(last_date));

    println!();
    Ok(())
}
