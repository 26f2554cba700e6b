/// ANSI color helper utilities for terminal output.
use crate::models::day_kind::DayKind;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

/// Color of a calendar day / list row by its kind.
pub fn color_for_kind(kind: DayKind) -> &'static str {
    match kind {
        DayKind::Work => GREEN,
        DayKind::ScheduledOff => CYAN,
        DayKind::Leave => MAGENTA,
        DayKind::NoRecord => GREY,
    }
}

/// Net amount color:
/// \>0 → green
/// 0 → red (nothing left after deductions)
pub fn color_for_net(value: f64) -> &'static str {
    if value > 0.0 { GREEN } else { RED }
}

pub fn colorize(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
