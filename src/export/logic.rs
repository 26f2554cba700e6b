use crate::core::storage::Storage;
use crate::core::tracker::Tracker;
use crate::errors::AppResult;
use crate::export::entries_csv::write_entries;
use crate::export::fs_utils::{ensure_writable, resolve_path};
use crate::export::snapshot::Snapshot;
use crate::export::{ExportFormat, notify_export_success};
use crate::models::month::YearMonth;
use crate::ui::messages::{info, warning};
use std::fs;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export log entries (CSV) or a full snapshot (JSON).
    ///
    /// With `month`, only entries and settlements of that month are written.
    pub fn export<S: Storage>(
        tracker: &Tracker<S>,
        format: ExportFormat,
        file: &str,
        month: Option<YearMonth>,
        force: bool,
    ) -> AppResult<()> {
        let path = resolve_path(file)?;
        ensure_writable(&path, force)?;

        let (entries, settlements) = match month {
            Some(m) => (
                tracker.month_view(m).entries,
                tracker
                    .settlements()
                    .iter()
                    .filter(|s| s.month == m)
                    .cloned()
                    .collect(),
            ),
            None => (tracker.entries().to_vec(), tracker.settlements().to_vec()),
        };

        if entries.is_empty() && settlements.is_empty() {
            warning("No entries found for the selected month.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => write_entries(&path, &entries)?,
            ExportFormat::Json => {
                let snap = Snapshot::capture(entries, settlements, tracker.preferences());
                fs::write(&path, snap.to_json()?)?;
            }
        }

        notify_export_success(&format.as_str().to_uppercase(), &path);
        Ok(())
    }
}

/// High-level import logic.
pub struct ImportLogic;

impl ImportLogic {
    /// Replace all state with the snapshot stored in `file`.
    pub fn import<S: Storage>(tracker: &mut Tracker<S>, file: &str) -> AppResult<(usize, usize)> {
        let path = resolve_path(file)?;
        let content = fs::read_to_string(&path)?;
        let snap = Snapshot::from_json(&content)?;

        let counts = (snap.entries.len(), snap.settlements.len());
        info(format!(
            "Snapshot exported at {} (version {})",
            snap.exported_at.format("%Y-%m-%d %H:%M"),
            snap.version
        ));

        tracker.replace_all(snap.entries, snap.settlements, snap.preferences)?;
        Ok(counts)
    }
}
