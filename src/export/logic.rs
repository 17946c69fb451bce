// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::month_rows;
use crate::models::Overview;
use crate::ui::messages::warning;
use std::path::Path;

/// High-level export entry point.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `overview` to `file`.
    ///
    /// - `Csv`: one row per month (year, month, month_name, overtime, lost)
    /// - `Json`: the full overview tree including yearly and global totals
    pub fn export(overview: &Overview, format: ExportFormat, file: &str, force: bool) -> AppResult<()> {
        let path = Path::new(file);

        if overview.is_empty() {
            warning("No time-clock records found, nothing to export.");
            return Ok(());
        }

        ensure_writable(path, force)?;

        match format {
            ExportFormat::Csv => export_csv(&month_rows(overview), path)?,
            ExportFormat::Json => export_json(overview, path)?,
        }

        Ok(())
    }
}
