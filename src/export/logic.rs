// src/export/logic.rs

use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::export::model::report_to_export;
use crate::export::xlsx::export_xlsx;
use crate::models::report::Report;
use crate::ui::messages::warning;
use std::path::{Path, PathBuf};

/// High-level export of one person's report.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `report` to `path` in `format`.
    ///
    /// Returns `false` (and writes nothing) when the report has no rows.
    pub fn export(report: &Report, format: ExportFormat, path: &Path, force: bool) -> AppResult<bool> {
        if report.is_empty() {
            warning(format!("No records found for '{}'.", report.name));
            return Ok(false);
        }

        ensure_writable(path, force)?;

        let rows = report_to_export(report);

        match format {
            ExportFormat::Xlsx => export_xlsx(&rows, path)?,
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(true)
    }

    /// `<name>_report.<ext>`, with path separators in the name replaced.
    pub fn default_file_name(name: &str, format: ExportFormat) -> String {
        let safe: String = name
            .chars()
            .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
            .collect();
        format!("{}_report.{}", safe, format.as_str())
    }

    pub fn default_path(dir: &Path, name: &str, format: ExportFormat) -> PathBuf {
        dir.join(Self::default_file_name(name, format))
    }
}
