use super::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirmed;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, force } = cmd {
        let mut tracker = open_tracker(cfg)?;

        let entry = tracker
            .entries()
            .iter()
            .find(|e| e.id == *id)
            .cloned()
            .ok_or(AppError::EntryNotFound(*id))?;

        let prompt = format!(
            "Delete entry #{} ({} {})? This action is irreversible.",
            entry.id,
            entry.date_str(),
            entry.kind.to_db_str()
        );

        if !confirmed(*force, &prompt) {
            info("Operation cancelled.");
            return Ok(());
        }

        tracker.delete_entry(*id)?;
        success(format!("Entry #{} for {} has been deleted.", id, entry.date_str()));
    }

    Ok(())
}
