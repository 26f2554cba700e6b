//! Year-month key used for filtering, calendars and settlements.

use crate::errors::{AppError, AppResult};
use chrono::{Datelike, Local, Months, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A calendar month. Stored as its first day so it is always a valid date.
///
/// The textual key is the zero-padded, fixed-width `YYYY-MM`, so comparing
/// keys as strings gives the same order as comparing the months.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct YearMonth {
    first: NaiveDate,
}

impl YearMonth {
    /// Build from a year (1..=9999) and a 1-based month.
    pub fn new(year: i32, month: u32) -> AppResult<Self> {
        if !(1..=9999).contains(&year) || !(1..=12).contains(&month) {
            return Err(AppError::InvalidMonth(format!("{year}-{month:02}")));
        }

        let first = NaiveDate::from_ymd_opt(year, month, 1)
            .ok_or_else(|| AppError::InvalidMonth(format!("{year}-{month:02}")))?;

        Ok(Self { first })
    }

    /// Parse a `YYYY-MM` key.
    pub fn parse(s: &str) -> AppResult<Self> {
        let s = s.trim();
        let err = || AppError::InvalidMonth(s.to_string());

        let (y, m) = s.split_once('-').ok_or_else(err)?;
        if y.len() != 4 || m.len() != 2 {
            return Err(err());
        }

        let year: i32 = y.parse().map_err(|_| err())?;
        let month: u32 = m.parse().map_err(|_| err())?;

        Self::new(year, month).map_err(|_| err())
    }

    /// Month containing the given date.
    pub fn of(date: NaiveDate) -> Self {
        Self {
            first: date.with_day(1).unwrap_or(date),
        }
    }

    /// Current month in local time.
    pub fn current() -> Self {
        Self::of(Local::now().date_naive())
    }

    pub fn year(&self) -> i32 {
        self.first.year()
    }

    /// 1-based month number
    pub fn month(&self) -> u32 {
        self.first.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first
    }

    pub fn first_weekday(&self) -> Weekday {
        self.first.weekday()
    }

    /// Length of the month, from the first day of the following month.
    pub fn days_in_month(&self) -> u32 {
        self.first
            .checked_add_months(Months::new(1))
            .map_or(31, |next| (next - self.first).num_days() as u32)
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date.year() == self.year() && date.month() == self.month()
    }

    /// Move by `delta` months (negative goes back), crossing year boundaries.
    pub fn shift(&self, delta: i32) -> AppResult<Self> {
        let index = self.year() * 12 + (self.month() as i32 - 1) + delta;
        Self::new(index.div_euclid(12), index.rem_euclid(12) as u32 + 1)
    }

    /// Zero-padded `YYYY-MM` key.
    pub fn key(&self) -> String {
        format!("{:04}-{:02}", self.year(), self.month())
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.key())
    }
}

impl TryFrom<String> for YearMonth {
    type Error = AppError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        YearMonth::parse(&value)
    }
}

impl From<YearMonth> for String {
    fn from(value: YearMonth) -> Self {
        value.key()
    }
}
