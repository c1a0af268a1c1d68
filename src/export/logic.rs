// src/export/logic.rs

use crate::core::pipeline::PipelineRun;
use crate::core::report;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::{AllocationExport, StreakExport};
use crate::export::{ExportFormat, ExportTarget};
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export of a pipeline run.
pub struct ExportLogic;

impl ExportLogic {
    /// Write allocations (team/analyst order) or streaks (analyst order).
    ///
    /// Returns the number of rows written; nothing is written for an empty set.
    pub fn export(
        run: &PipelineRun,
        target: ExportTarget,
        format: ExportFormat,
        path: &Path,
        force: bool,
    ) -> AppResult<usize> {
        match target {
            ExportTarget::Allocations => {
                let rows: Vec<AllocationExport> = report::detail_rows(&run.allocation.records)
                    .iter()
                    .map(AllocationExport::from)
                    .collect();
                write_rows(&rows, format, path, force, "allocations")
            }
            ExportTarget::Streaks => {
                let rows: Vec<StreakExport> = report::sorted_streaks(&run.streaks)
                    .iter()
                    .map(StreakExport::from)
                    .collect();
                write_rows(&rows, format, path, force, "eligible analysts")
            }
        }
    }
}

fn write_rows<T: serde::Serialize>(
    rows: &[T],
    format: ExportFormat,
    path: &Path,
    force: bool,
    what: &str,
) -> AppResult<usize> {
    if rows.is_empty() {
        warning(format!("No {what} to export."));
        return Ok(0);
    }

    ensure_writable(path, force)?;

    match format {
        ExportFormat::Csv => export_csv(rows, path)?,
        ExportFormat::Json => export_json(rows, path)?,
    }

    Ok(rows.len())
}
