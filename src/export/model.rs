// src/export/model.rs

use crate::models::report::{Report, ReportRow};
use serde::Serialize;

/// Flat row handed to the spreadsheet / CSV / JSON writers.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ReportExport {
    #[serde(rename = "Name")]
    pub name: String,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Time In")]
    pub time_in: String,
    #[serde(rename = "Status In")]
    pub status_in: String,
    #[serde(rename = "Time Out")]
    pub time_out: String,
    #[serde(rename = "Status Out")]
    pub status_out: String,
    #[serde(rename = "Total Hours")]
    pub total_hours: String,
}

impl From<&ReportRow> for ReportExport {
    fn from(row: &ReportRow) -> Self {
        // "0" (not "0.00") when the pair is incomplete
        let total_hours = if row.is_complete() {
            format!("{:.2}", row.hours_worked)
        } else {
            "0".to_string()
        };

        Self {
            name: row.name.clone(),
            date: row.date.clone(),
            time_in: row.time_in.clone().unwrap_or_default(),
            status_in: row.status_in.label().to_string(),
            time_out: row.time_out.clone().unwrap_or_default(),
            status_out: row.status_out.label().to_string(),
            total_hours,
        }
    }
}

pub fn report_to_export(report: &Report) -> Vec<ReportExport> {
    report.rows.iter().map(ReportExport::from).collect()
}

/// Header for CSV / XLSX, same order as the struct fields.
pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "Name",
        "Date",
        "Time In",
        "Status In",
        "Time Out",
        "Status Out",
        "Total Hours",
    ]
}

pub(crate) fn export_to_row(e: &ReportExport) -> Vec<String> {
    vec![
        e.name.clone(),
        e.date.clone(),
        e.time_in.clone(),
        e.status_in.clone(),
        e.time_out.clone(),
        e.status_out.clone(),
        e.total_hours.clone(),
    ]
}
