// src/export/excel_date.rs

use crate::models::time_of_day::TimeOfDay;

/// Excel stores a time of day as the fraction of a 24h day.
/// Returns the number format and serial value, or `None` when `s` is not `HH:MM`.
pub(crate) fn parse_to_excel_time(s: &str) -> Option<(&'static str, f64)> {
    if s.trim().is_empty() {
        return None;
    }

    let t = TimeOfDay::parse(s).ok()?;
    Some(("hh:mm", t.minutes_of_day() as f64 / 1440.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn times_become_day_fractions() {
        assert_eq!(parse_to_excel_time("12:00"), Some(("hh:mm", 0.5)));
        assert_eq!(parse_to_excel_time("06:00"), Some(("hh:mm", 0.25)));
        assert_eq!(parse_to_excel_time(""), None);
        assert_eq!(parse_to_excel_time("On Time"), None);
        assert_eq!(parse_to_excel_time("1/1/2024"), None);
    }
}
