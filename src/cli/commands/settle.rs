use super::{open_tracker, resolve_month};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;
use crate::utils::colors::{color_for_net, colorize};
use crate::utils::formatting::fmt_currency;
use chrono::Local;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Settle {
        month,
        labor,
        health,
    } = cmd
    {
        let month = resolve_month(month, 0)?;
        let mut tracker = open_tracker(cfg)?;
        let replaced = tracker.settlements().iter().any(|s| s.month == month);

        let record = tracker.settle(month, *labor, *health, Local::now())?;
        let money = |v: f64| fmt_currency(&cfg.currency_symbol, v);

        success(format!(
            "Settlement for {} {}.",
            month,
            if replaced { "updated" } else { "saved" }
        ));
        println!("  Payable:          {}", money(record.payable));
        println!("  Labor insurance: -{}", money(record.labor_deduction));
        println!("  Health insurance:-{}", money(record.health_deduction));
        println!("  Total deductions: {}", money(record.total_deductions()));
        println!(
            "  Net:              {}",
            colorize(&money(record.net), color_for_net(record.net))
        );
    }

    Ok(())
}
