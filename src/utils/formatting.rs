//! Formatting utilities used for CLI and export outputs.

use unicode_width::UnicodeWidthStr;

pub fn bold(s: &str) -> String {
    format!("\x1b[1m{}\x1b[0m", s)
}

/// Left-align by display width (names may contain wide characters).
pub fn pad_right(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(UnicodeWidthStr::width(s));
    format!("{}{}", s, " ".repeat(pad))
}

/// Hours with two decimals, e.g. `8.92 hrs`.
pub fn format_hours(hours: f64) -> String {
    format!("{:.2} hrs", hours)
}

/// `-` for a missing time, as shown in the report table.
pub fn time_or_dash(t: Option<&str>) -> String {
    t.unwrap_or("-").to_string()
}
