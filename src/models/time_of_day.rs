//! Wall-clock time of day, independent of any calendar date.
//!
//! Attendance times are compared on a single fixed reference day: the
//! record's `date` never takes part in ordering or subtraction. A checkout
//! earlier than the check-in (an overnight shift) therefore yields a
//! negative duration.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};
use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

static HH_MM: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\d{1,2}):(\d{1,2})$").expect("static HH:MM pattern"));

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeOfDay(NaiveTime);

impl TimeOfDay {
    /// Build from hour/minute, `None` when out of range.
    pub fn from_hm(hour: u32, minute: u32) -> Option<Self> {
        NaiveTime::from_hms_opt(hour, minute, 0).map(Self)
    }

    /// Const constructor for fixed policy times; an out-of-range value fails to compile.
    pub const fn at(hour: u32, minute: u32) -> Self {
        match NaiveTime::from_hms_opt(hour, minute, 0) {
            Some(t) => Self(t),
            None => panic!("time of day out of range"),
        }
    }

    /// Parse `H:MM` / `HH:MM` (24-hour).
    pub fn parse(input: &str) -> AppResult<Self> {
        let invalid = || AppError::InvalidTimeFormat(input.to_string());

        let caps = HH_MM.captures(input.trim()).ok_or_else(invalid)?;
        let hour: u32 = caps[1].parse().map_err(|_| invalid())?;
        let minute: u32 = caps[2].parse().map_err(|_| invalid())?;

        if hour > 23 || minute > 59 {
            return Err(invalid());
        }

        Self::from_hm(hour, minute).ok_or_else(invalid)
    }

    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    pub fn minutes_of_day(&self) -> u32 {
        self.hour() * 60 + self.minute()
    }

    /// Signed minutes from `self` to `later`.
    pub fn minutes_until(&self, later: TimeOfDay) -> i64 {
        (later.0 - self.0).num_minutes()
    }

    /// Signed fractional hours from `self` to `later`.
    pub fn hours_until(&self, later: TimeOfDay) -> f64 {
        self.minutes_until(later) as f64 / 60.0
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%H:%M"))
    }
}

/// Parse an optional time string; `None`, `""` and whitespace mean absent.
pub fn parse_optional(input: Option<&str>) -> AppResult<Option<TimeOfDay>> {
    match input.map(str::trim) {
        None | Some("") => Ok(None),
        Some(s) => TimeOfDay::parse(s).map(Some),
    }
}
