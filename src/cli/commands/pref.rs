use super::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::preferences::Preferences;
use crate::ui::messages::{header, success};
use crate::utils::formatting::fmt_currency;

fn print_preferences(prefs: &Preferences, symbol: &str) {
    header("Preferences");
    println!("Hourly rate      : {}", fmt_currency(symbol, prefs.hourly_rate));
    println!("Labor deduction  : {}", fmt_currency(symbol, prefs.labor_deduction));
    println!("Health deduction : {}", fmt_currency(symbol, prefs.health_deduction));
}

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Pref {
        rate,
        labor,
        health,
        reset,
        print,
    } = cmd
    {
        let mut tracker = open_tracker(cfg)?;

        let changed = if *reset {
            tracker.reset_preferences()?;
            success("Preferences reset.");
            true
        } else if rate.is_some() || labor.is_some() || health.is_some() {
            tracker.update_preferences(*rate, *labor, *health)?;
            success("Preferences saved.");
            true
        } else {
            false
        };

        if *print || !changed {
            print_preferences(&tracker.preferences(), &cfg.currency_symbol);
        }
    }

    Ok(())
}
