use crate::core::classifier::{arrival_status, departure_status};
use crate::errors::AppResult;
use crate::models::record::AttendanceRecord;
use crate::models::report::{Report, ReportRow};
use crate::models::time_of_day::{TimeOfDay, parse_optional};

/// Distinct names in first-occurrence order.
pub fn list_distinct_names(records: &[AttendanceRecord]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for r in records {
        if !names.iter().any(|n| n == &r.name) {
            names.push(r.name.clone());
        }
    }
    names
}

/// Name selected when none is given explicitly.
pub fn default_name(records: &[AttendanceRecord]) -> Option<String> {
    records.first().map(|r| r.name.clone())
}

/// Fractional hours between check-in and check-out on the same wall-clock day.
///
/// Zero unless both times are present. A check-out before the check-in
/// gives a negative value, which is returned as-is.
pub fn hours_worked(record: &AttendanceRecord) -> AppResult<f64> {
    let time_in = parse_optional(record.time_in())?;
    let time_out = parse_optional(record.time_out())?;
    Ok(span_hours(time_in, time_out))
}

fn span_hours(time_in: Option<TimeOfDay>, time_out: Option<TimeOfDay>) -> f64 {
    match (time_in, time_out) {
        (Some(i), Some(o)) => i.hours_until(o),
        _ => 0.0,
    }
}

fn build_row(record: &AttendanceRecord) -> AppResult<ReportRow> {
    let time_in = parse_optional(record.time_in())?;
    let time_out = parse_optional(record.time_out())?;

    Ok(ReportRow {
        name: record.name.clone(),
        date: record.date.clone(),
        time_in: record.time_in.clone(),
        status_in: arrival_status(time_in),
        time_out: record.time_out.clone(),
        status_out: departure_status(time_out),
        hours_worked: span_hours(time_in, time_out),
    })
}

/// Rows for `name` in insertion order, plus their summed hours.
pub fn build_report(records: &[AttendanceRecord], name: &str) -> AppResult<Report> {
    let rows = records
        .iter()
        .filter(|r| r.name == name)
        .map(build_row)
        .collect::<AppResult<Vec<_>>>()?;

    let total_hours: f64 = rows.iter().map(|r| r.hours_worked).sum();

    Ok(Report {
        name: name.to_string(),
        rows,
        total_hours,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::AppError;
    use crate::models::status::{ArrivalStatus, DepartureStatus};

    fn rec(name: &str, time_in: Option<&str>, time_out: Option<&str>) -> AttendanceRecord {
        AttendanceRecord::new(
            name,
            "1/1/2024",
            time_in.map(str::to_string),
            time_out.map(str::to_string),
        )
    }

    #[test]
    fn single_record_scenario() {
        let store = vec![rec("A", Some("09:10"), Some("18:05"))];
        let report = build_report(&store, "A").unwrap();

        assert_eq!(report.rows.len(), 1);
        let row = &report.rows[0];
        assert_eq!(row.status_in, ArrivalStatus::OnTime);
        assert_eq!(row.status_out, DepartureStatus::Out);
        assert!((row.hours_worked - 8.9167).abs() < 1e-3);
        assert!((report.total_hours - 8.9167).abs() < 1e-3);
    }

    #[test]
    fn nine_to_five_is_eight_hours() {
        assert_eq!(hours_worked(&rec("A", Some("09:00"), Some("17:00"))).unwrap(), 8.0);
    }

    #[test]
    fn missing_checkout_counts_zero() {
        let store = vec![
            rec("A", Some("09:00"), None),
            rec("A", Some("09:00"), Some("18:00")),
        ];
        let report = build_report(&store, "A").unwrap();
        assert_eq!(report.rows[0].hours_worked, 0.0);
        assert_eq!(report.rows[0].status_out, DepartureStatus::NoOut);
        assert_eq!(report.total_hours, 9.0);
    }

    #[test]
    fn overnight_shift_is_negative() {
        let store = vec![rec("A", Some("22:00"), Some("06:00"))];
        let report = build_report(&store, "A").unwrap();
        assert_eq!(report.rows[0].hours_worked, -16.0);
        assert_eq!(report.total_hours, -16.0);
    }

    #[test]
    fn total_equals_row_sum() {
        let store = vec![
            rec("A", Some("08:30"), Some("17:45")),
            rec("B", Some("09:00"), Some("19:30")),
            rec("A", Some("09:20"), Some("19:05")),
            rec("A", Some("10:00"), None),
        ];
        let report = build_report(&store, "A").unwrap();
        let sum: f64 = report.rows.iter().map(|r| r.hours_worked).sum();
        assert_eq!(report.rows.len(), 3);
        assert_eq!(report.total_hours, sum);

        let empty = build_report(&store, "Z").unwrap();
        assert!(empty.is_empty());
        assert_eq!(empty.total_hours, 0.0);
    }

    #[test]
    fn rows_keep_insertion_order() {
        let mut store = vec![
            rec("A", Some("09:00"), Some("18:00")),
            rec("A", Some("08:00"), Some("17:00")),
        ];
        store[0].date = "1/5/2024".into();
        store[1].date = "1/2/2024".into();

        let report = build_report(&store, "A").unwrap();
        assert_eq!(report.rows[0].date, "1/5/2024");
        assert_eq!(report.rows[1].date, "1/2/2024");
    }

    #[test]
    fn distinct_names_first_occurrence() {
        let store = vec![
            rec("B", None, None),
            rec("A", None, None),
            rec("B", None, None),
            rec("C", None, None),
            rec("A", None, None),
        ];
        assert_eq!(list_distinct_names(&store), vec!["B", "A", "C"]);
        assert_eq!(default_name(&store).as_deref(), Some("B"));
        assert!(list_distinct_names(&[]).is_empty());
        assert_eq!(default_name(&[]), None);
    }

    #[test]
    fn malformed_stored_time_surfaces_error() {
        let store = vec![rec("A", Some("9h"), Some("18:00"))];
        assert!(matches!(
            build_report(&store, "A"),
            Err(AppError::InvalidTimeFormat(_))
        ));
    }
}
