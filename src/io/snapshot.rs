//! Read/write dashboard snapshot JSON files.
//!
//! A snapshot is the portable representation of one rendered selection:
//! - the selection itself
//! - ranked rows with deltas, insights, and chart bounds
//! - when it was generated
//!
//! `fdr show` re-renders a snapshot without recomputing anything.

use std::fs::{File, create_dir_all};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

use crate::app::pipeline::DashboardView;
use crate::error::AppError;

pub const TOOL_NAME: &str = "fdr";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotFile {
    pub tool: String,
    pub generated_at: DateTime<Local>,
    pub view: DashboardView,
}

impl SnapshotFile {
    pub fn new(view: &DashboardView) -> Self {
        Self {
            tool: TOOL_NAME.to_string(),
            generated_at: Local::now(),
            view: view.clone(),
        }
    }
}

/// Write a snapshot JSON file.
pub fn write_snapshot_json(path: &Path, view: &DashboardView) -> Result<(), AppError> {
    let file = File::create(path)
        .map_err(|e| AppError::usage(format!("Failed to create snapshot JSON '{}': {e}", path.display())))?;

    serde_json::to_writer_pretty(file, &SnapshotFile::new(view))
        .map_err(|e| AppError::usage(format!("Failed to write snapshot JSON: {e}")))?;

    log::info!("wrote snapshot {}", path.display());
    Ok(())
}

/// Read a snapshot JSON file.
pub fn read_snapshot_json(path: &Path) -> Result<SnapshotFile, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::usage(format!("Failed to open snapshot JSON '{}': {e}", path.display())))?;
    let snapshot: SnapshotFile = serde_json::from_reader(file)
        .map_err(|e| AppError::usage(format!("Invalid snapshot JSON: {e}")))?;
    Ok(snapshot)
}

/// Write a timestamped snapshot under `dir`, creating it if needed.
pub fn write_timestamped_snapshot(dir: &Path, view: &DashboardView) -> Result<PathBuf, AppError> {
    create_dir_all(dir)
        .map_err(|e| AppError::usage(format!("Failed to create export dir '{}': {e}", dir.display())))?;

    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let path = dir.join(format!(
        "fdr_{}_{}_{ts}.json",
        view.selection.category.id(),
        view.selection.tenor.index() + 1,
    ));
    write_snapshot_json(&path, view)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::RateTable;
    use crate::domain::{Category, Selection, TenorBucket};

    fn scratch_dir(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!("fdr_{name}_{}", std::process::id()))
    }

    #[test]
    fn snapshot_reloads_equal_view() {
        let selection = Selection {
            category: Category::Above3CrNoPremature,
            tenor: TenorBucket::Days61To90,
        };
        let view = DashboardView::build(&RateTable::builtin(), selection, 3);
        let dir = scratch_dir("snapshot");
        let path = write_timestamped_snapshot(&dir, &view).unwrap();

        let loaded = read_snapshot_json(&path).unwrap();
        let _ = std::fs::remove_dir_all(&dir);

        assert_eq!(loaded.tool, TOOL_NAME);
        assert_eq!(loaded.view, view);
        assert!(
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with("fdr_above3CrNoPremature_1_"))
        );
    }

    #[test]
    fn missing_file_is_usage_error() {
        let err = read_snapshot_json(&scratch_dir("missing").join("nope.json")).unwrap_err();
        assert_eq!(err.exit_code(), crate::error::EXIT_USAGE);
    }
}
