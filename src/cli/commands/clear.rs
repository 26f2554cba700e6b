use super::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirmed;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear {
        logs,
        settlements,
        force,
    } = cmd
    {
        let target = match (*logs, *settlements) {
            (true, true) => "ALL log entries and ALL settlements",
            (true, false) => "ALL log entries",
            _ => "ALL settlements",
        };

        if !confirmed(*force, &format!("This will remove {target}. Continue?")) {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut tracker = open_tracker(cfg)?;

        if *logs {
            let n = tracker.clear_logs()?;
            success(format!("Removed {n} log entries."));
        }
        if *settlements {
            let n = tracker.clear_settlements()?;
            success(format!("Removed {n} settlements."));
        }
    }

    Ok(())
}
