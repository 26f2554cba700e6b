use super::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ImportLogic;
use crate::ui::messages::{info, success};
use crate::ui::prompt::confirmed;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Import { file, force } = cmd {
        let mut tracker = open_tracker(cfg)?;

        let has_data = !tracker.entries().is_empty() || !tracker.settlements().is_empty();
        if has_data
            && !confirmed(
                *force,
                "Importing replaces ALL entries, settlements and preferences. Continue?",
            )
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let (entries, settlements) = ImportLogic::import(&mut tracker, file)?;
        success(format!(
            "Imported {entries} entries and {settlements} settlements from {file}."
        ));
    }

    Ok(())
}
