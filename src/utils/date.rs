use chrono::{Datelike, NaiveDate};

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

/// Short English weekday name (Mon, Tue, ...).
pub fn weekday_str(d: NaiveDate) -> String {
    d.weekday().to_string()
}

/// Column headers for a Monday-first calendar.
pub const WEEK_HEADER: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];
