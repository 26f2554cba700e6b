use super::{open_tracker, resolve_month};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::calendar::{CalendarCell, project, weeks};
use crate::errors::AppResult;
use crate::models::day_kind::DayKind;
use crate::ui::messages::header;
use crate::utils::colors::{color_for_kind, colorize};
use crate::utils::date::WEEK_HEADER;
use crate::utils::formatting::{fmt_currency, fmt_hours, fmt_money};
use crate::utils::table::pad_right;

const CELL_WIDTH: usize = 10;

/// Three text lines per cell: day number, hours/status, salary.
fn cell_lines(cell: &CalendarCell) -> [String; 3] {
    match cell {
        CalendarCell::Blank => Default::default(),
        CalendarCell::Day { day, rollup: None } => {
            [format!("{:>2}", day), String::new(), String::new()]
        }
        CalendarCell::Day {
            day,
            rollup: Some(r),
        } => {
            let color = color_for_kind(r.kind);
            let (status, money) = match r.kind {
                DayKind::Work => (format!("{}h", fmt_hours(r.hours)), fmt_money(r.salary)),
                other => (other.label().to_string(), String::new()),
            };
            [
                colorize(&format!("{:>2}", day), color),
                colorize(&status, color),
                colorize(&money, color),
            ]
        }
    }
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Calendar { month, offset } = cmd {
        let month = resolve_month(month, *offset)?;
        let tracker = open_tracker(cfg)?;
        let view = tracker.month_view(month);
        let cells = project(month, &view.daily);

        header(format!("Calendar {}", month));

        let head: String = WEEK_HEADER
            .iter()
            .map(|d| pad_right(d, CELL_WIDTH))
            .collect();
        println!("{}", head.trim_end());

        for week in weeks(&cells) {
            let lines: Vec<[String; 3]> = week.iter().map(cell_lines).collect();
            for i in 0..3 {
                let row: String = lines.iter().map(|l| pad_right(&l[i], CELL_WIDTH)).collect();
                println!("{}", row.trim_end());
            }
            println!();
        }

        println!(
            "Total: {} h | {}",
            fmt_hours(view.totals.hours),
            fmt_currency(&cfg.currency_symbol, view.totals.salary)
        );
    }

    Ok(())
}
