// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{MonthExport, notify_export_success};
use crate::models::Overview;
use crate::ui::messages::info;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export the whole overview as pretty-printed JSON.
pub(crate) fn export_json(overview: &Overview, path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(overview)
        .map_err(|e| AppError::Export(format!("JSON serialization error: {e}")))?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export month rows as CSV (header derived from the serde field names).
pub(crate) fn export_csv(rows: &[MonthExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let mut wtr = csv::Writer::from_path(path)?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
