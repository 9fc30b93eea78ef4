// src/export/json_csv.rs

use crate::errors::{AppError, AppResult};
use crate::export::{ReportExport, notify_export_success};
use crate::ui::messages::info;
use std::fs;
use std::path::Path;

/// Report rows as a pretty-printed JSON array of objects keyed by column title.
pub(crate) fn export_json(rows: &[ReportExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to JSON: {}", path.display()));

    let json_data = serde_json::to_string_pretty(rows)?;
    fs::write(path, json_data)?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Report rows as CSV; the header row comes from the serde field names.
pub(crate) fn export_csv(rows: &[ReportExport], path: &Path) -> AppResult<()> {
    info(format!("Exporting to CSV: {}", path.display()));

    let csv_err = |stage: &str, e: csv::Error| AppError::Export(format!("CSV {stage} error: {e}"));

    let mut wtr = csv::Writer::from_path(path).map_err(|e| csv_err("open", e))?;

    for row in rows {
        wtr.serialize(row).map_err(|e| csv_err("write", e))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
