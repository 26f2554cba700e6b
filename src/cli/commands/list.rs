use super::{open_tracker, resolve_month};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::aggregate::MonthView;
use crate::errors::AppResult;
use crate::models::day_kind::DayKind;
use crate::models::entry::EntryKind;
use crate::ui::messages::{header, info};
use crate::utils::colors::{color_for_kind, colorize};
use crate::utils::date::weekday_str;
use crate::utils::formatting::{fmt_currency, fmt_hours};
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { month, offset } = cmd {
        let month = resolve_month(month, *offset)?;
        let tracker = open_tracker(cfg)?;
        let view = tracker.month_view(month);

        if view.entries.is_empty() {
            info(format!("No entries for {}.", month));
            return Ok(());
        }

        header(format!("Entries for {}", month));
        print!("{}", render_entries(&view, cfg));

        println!(
            "\nTotal hours: {} | Total salary: {}",
            fmt_hours(view.totals.hours),
            fmt_currency(&cfg.currency_symbol, view.totals.salary)
        );
        println!(
            "Work entries: {} | Leave days: {} | Days off: {}",
            view.totals.work_entries, view.totals.leave_days, view.totals.off_days
        );

        if let Some(s) = tracker.settlements().iter().find(|s| s.month == month) {
            println!(
                "Settled on {}: net {}",
                s.saved_at.format("%Y-%m-%d %H:%M"),
                fmt_currency(&cfg.currency_symbol, s.net)
            );
        }
    }

    Ok(())
}

fn render_entries(view: &MonthView, cfg: &Config) -> String {
    let mut columns = vec![Column::right("ID"), Column::left("Date")];
    if cfg.show_weekday {
        columns.push(Column::left("Day"));
    }
    columns.extend([
        Column::left("Kind"),
        Column::left("Detail"),
        Column::right("Hours"),
        Column::right("Salary"),
    ]);

    let mut table = Table::new(columns);

    for e in &view.entries {
        let kind = DayKind::from(&e.kind);

        let mut row = vec![e.id.to_string(), e.date_str()];
        if cfg.show_weekday {
            row.push(weekday_str(e.date));
        }

        let (detail, hours, salary) = match &e.kind {
            EntryKind::Work {
                total_hours,
                salary,
                detail,
            } => (
                detail.describe(),
                fmt_hours(*total_hours),
                fmt_currency(&cfg.currency_symbol, *salary),
            ),
            _ => ("(unpaid)".to_string(), "-".to_string(), "-".to_string()),
        };

        row.extend([
            colorize(kind.label(), color_for_kind(kind)),
            detail,
            hours,
            salary,
        ]);
        table.add_row(row);
    }

    table.render()
}
