use super::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{header, info};
use crate::utils::colors::{color_for_net, colorize};
use crate::utils::formatting::fmt_money;
use crate::utils::table::{Column, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::History = cmd {
        let tracker = open_tracker(cfg)?;
        let records = tracker.settlements();

        if records.is_empty() {
            info("No settlements saved yet.");
            return Ok(());
        }

        header(format!("Settlement history ({})", cfg.currency_symbol));

        let mut table = Table::new(vec![
            Column::left("Month"),
            Column::right("Payable"),
            Column::right("Labor"),
            Column::right("Health"),
            Column::right("Net"),
            Column::left("Saved at"),
        ]);

        for s in records {
            table.add_row(vec![
                s.month.key(),
                fmt_money(s.payable),
                fmt_money(s.labor_deduction),
                fmt_money(s.health_deduction),
                colorize(&fmt_money(s.net), color_for_net(s.net)),
                s.saved_at.format("%Y-%m-%d %H:%M").to_string(),
            ]);
        }

        print!("{}", table.render());
    }

    Ok(())
}
