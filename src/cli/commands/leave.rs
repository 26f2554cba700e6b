use super::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Leave { date, kind } = cmd {
        let mut tracker = open_tracker(cfg)?;
        let entry = tracker.add_leave(date.as_deref(), *kind)?;

        success(format!(
            "{} recorded on {} (entry #{}).",
            kind.label(),
            entry.date_str(),
            entry.id
        ));
    }

    Ok(())
}
