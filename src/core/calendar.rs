use crate::core::aggregate::DayRollup;
use crate::models::day_kind::DayKind;
use crate::models::month::YearMonth;
use chrono::Weekday;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CalendarCell {
    /// Padding before the first day of the month
    Blank,
    Day {
        day: u32,
        /// `None` when nothing was recorded that day
        rollup: Option<DayRollup>,
    },
}

/// Blank cells before day 1 in a Monday-first week.
pub fn leading_blanks(first_weekday: Weekday) -> usize {
    let sunday_indexed = first_weekday.num_days_from_sunday() as usize;
    if sunday_indexed == 0 {
        6
    } else {
        sunday_indexed - 1
    }
}

/// Lay the month out on a Monday-first, 7-column grid.
pub fn project(month: YearMonth, daily: &BTreeMap<u32, DayRollup>) -> Vec<CalendarCell> {
    let blanks = leading_blanks(month.first_weekday());
    let mut cells = vec![CalendarCell::Blank; blanks];

    for day in 1..=month.days_in_month() {
        let rollup = daily
            .get(&day)
            .copied()
            .filter(|r| r.kind != DayKind::NoRecord);
        cells.push(CalendarCell::Day { day, rollup });
    }

    cells
}

/// Split cells into rows of seven.
pub fn weeks(cells: &[CalendarCell]) -> Vec<&[CalendarCell]> {
    cells.chunks(7).collect()
}
