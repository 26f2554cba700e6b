mod entries_csv;
mod fs_utils;
pub mod logic;
pub mod snapshot;

pub use logic::{ExportLogic, ImportLogic};
pub use snapshot::{SNAPSHOT_VERSION, Snapshot};

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum ExportFormat {
    /// Log entries as CSV rows
    Csv,
    /// Versioned JSON snapshot (entries, settlements, preferences)
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
