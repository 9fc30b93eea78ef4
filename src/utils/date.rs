use chrono::{Local, NaiveDate};
use std::fmt::Write;

/// Today's date rendered with a chrono format string, e.g. `%-m/%-d/%Y` → `1/15/2025`.
pub fn today_label(format: &str) -> String {
    format_date(Local::now().date_naive(), format)
}

/// Falls back to ISO `YYYY-MM-DD` when `format` is not a valid chrono pattern.
pub fn format_date(date: NaiveDate, format: &str) -> String {
    let mut out = String::new();
    if write!(out, "{}", date.format(format)).is_err() {
        return date.format("%Y-%m-%d").to_string();
    }
    out
}
