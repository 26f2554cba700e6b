//! Work duration arithmetic.
//!
//! Minute arithmetic is integer; only the final conversion to hours is
//! floating point. Salaries are derived from unrounded hours and are never
//! rounded before accumulation.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};

fn minutes_since_midnight(t: NaiveTime) -> i64 {
    (t.hour() * 60 + t.minute()) as i64
}

/// Hours worked between `start` and `end`, minus a break.
///
/// Fails with `NegativeDuration` when the break (or an end before the start)
/// makes the result negative.
pub fn hours_from_clock(start: NaiveTime, end: NaiveTime, break_minutes: i64) -> AppResult<f64> {
    if break_minutes < 0 {
        return Err(AppError::InvalidAmount(format!(
            "break minutes cannot be negative ({break_minutes})"
        )));
    }

    let work_minutes =
        (minutes_since_midnight(end) - minutes_since_midnight(start)) - break_minutes;

    if work_minutes < 0 {
        return Err(AppError::NegativeDuration(work_minutes));
    }

    Ok(work_minutes as f64 / 60.0)
}

/// Hours from an hours + minutes pair (slider style input).
pub fn hours_from_span(hours: u32, minutes: u32) -> AppResult<f64> {
    if minutes > 59 {
        return Err(AppError::InvalidTime(format!(
            "minutes must be between 0 and 59, got {minutes}"
        )));
    }
    if hours == 0 && minutes == 0 {
        return Err(AppError::EmptyDuration);
    }

    Ok(hours as f64 + minutes as f64 / 60.0)
}

pub fn salary_for(hours: f64, hourly_rate: f64) -> f64 {
    hours * hourly_rate
}
