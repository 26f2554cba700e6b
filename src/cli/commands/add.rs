use super::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::tracker::{ClockForm, SpanForm};
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::formatting::{fmt_currency, fmt_hours};

/// Add a work entry.
///
/// Span mode is selected as soon as `--hours` or `--minutes` is given;
/// otherwise the entry is computed from `--in`/`--out`/`--break`.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        date,
        start,
        end,
        break_minutes,
        hours,
        minutes,
        rate,
    } = cmd
    {
        let mut tracker = open_tracker(cfg)?;

        let entry = if hours.is_some() || minutes.is_some() {
            tracker.add_work_span(SpanForm {
                rate: *rate,
                date: date.as_deref(),
                hours: hours.unwrap_or(0),
                minutes: minutes.unwrap_or(0),
            })?
        } else {
            tracker.add_work_clock(ClockForm {
                rate: *rate,
                date: date.as_deref(),
                start: start.as_deref(),
                end: end.as_deref(),
                break_minutes: Some(break_minutes.unwrap_or(cfg.default_break_minutes)),
            })?
        };

        success(format!(
            "Added work entry #{} on {}: {} h → {}",
            entry.id,
            entry.date_str(),
            fmt_hours(entry.total_hours()),
            fmt_currency(&cfg.currency_symbol, entry.salary())
        ));
    }

    Ok(())
}
