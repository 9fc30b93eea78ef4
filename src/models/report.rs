use crate::models::status::{ArrivalStatus, DepartureStatus};
use serde::Serialize;

/// One line of a person's report, in store insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportRow {
    pub name: String,
    pub date: String,
    pub time_in: Option<String>,
    pub status_in: ArrivalStatus,
    pub time_out: Option<String>,
    pub status_out: DepartureStatus,
    pub hours_worked: f64,
}

impl ReportRow {
    /// Both check-in and check-out were recorded.
    pub fn is_complete(&self) -> bool {
        self.time_in.is_some() && self.time_out.is_some()
    }
}

/// Report projection consumed by the rendering and export collaborators.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub name: String,
    pub rows: Vec<ReportRow>,
    pub total_hours: f64,
}

impl Report {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
