//! Attendance-policy classification of check-in and check-out times.
//!
//! Thresholds are fixed:
//! - arrival: before 09:00 is early, after 09:15 is late, both bounds inclusive for "On Time";
//! - departure: up to 17:59 is early, 18:00 is a normal checkout, from 19:00 on is overtime.
//!
//! Input is minute-granular, so the interval between 17:59 and 18:00 holds no values.

use crate::errors::AppResult;
use crate::models::status::{ArrivalStatus, DepartureStatus};
use crate::models::time_of_day::{TimeOfDay, parse_optional};

pub const EARLY_IN: TimeOfDay = TimeOfDay::at(9, 0);
pub const LATE_IN: TimeOfDay = TimeOfDay::at(9, 15);
pub const EARLY_OUT: TimeOfDay = TimeOfDay::at(17, 59);
pub const NORMAL_OUT: TimeOfDay = TimeOfDay::at(18, 0);
pub const OVERTIME: TimeOfDay = TimeOfDay::at(19, 0);

pub fn arrival_status(time_in: Option<TimeOfDay>) -> ArrivalStatus {
    let Some(t) = time_in else {
        return ArrivalStatus::NoIn;
    };

    if t < EARLY_IN {
        ArrivalStatus::EarlyIn
    } else if t > LATE_IN {
        ArrivalStatus::Late
    } else {
        ArrivalStatus::OnTime
    }
}

pub fn departure_status(time_out: Option<TimeOfDay>) -> DepartureStatus {
    let Some(t) = time_out else {
        return DepartureStatus::NoOut;
    };

    if t <= EARLY_OUT {
        DepartureStatus::EarlyOut
    } else if t == NORMAL_OUT {
        DepartureStatus::Out
    } else if t >= OVERTIME {
        DepartureStatus::Overtime
    } else {
        DepartureStatus::Out
    }
}

/// Classify a raw check-in string. Absent or empty → `No In`.
pub fn classify_arrival(time_in: Option<&str>) -> AppResult<ArrivalStatus> {
    Ok(arrival_status(parse_optional(time_in)?))
}

/// Classify a raw check-out string. Absent or empty → `No Out`.
pub fn classify_departure(time_out: Option<&str>) -> AppResult<DepartureStatus> {
    Ok(departure_status(parse_optional(time_out)?))
}
