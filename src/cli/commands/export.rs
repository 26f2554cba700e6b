use super::open_tracker;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::models::month::YearMonth;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        month,
        force,
    } = cmd
    {
        let month = month.as_deref().map(YearMonth::parse).transpose()?;
        let tracker = open_tracker(cfg)?;
        ExportLogic::export(&tracker, *format, file, month, *force)?;
    }

    Ok(())
}
