//! ANSI color helper utilities for terminal output.

use crate::models::status::{ArrivalStatus, DepartureStatus};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";
pub const MAGENTA: &str = "\x1b[35m";

pub fn color_for_arrival(status: ArrivalStatus) -> &'static str {
    match status {
        ArrivalStatus::NoIn => GREY,
        ArrivalStatus::EarlyIn => CYAN,
        ArrivalStatus::OnTime => GREEN,
        ArrivalStatus::Late => RED,
    }
}

pub fn color_for_departure(status: DepartureStatus) -> &'static str {
    match status {
        DepartureStatus::NoOut => GREY,
        DepartureStatus::EarlyOut => YELLOW,
        DepartureStatus::Out => GREEN,
        DepartureStatus::Overtime => MAGENTA,
    }
}

/// Hours color:
/// \<0 → red (check-out before check-in)
/// 0 → grey
/// \>0 → reset
pub fn color_for_hours(value: f64) -> &'static str {
    if value < 0.0 {
        RED
    } else if value == 0.0 {
        GREY
    } else {
        RESET
    }
}

/// Wrap `value` in `color` … `RESET`.
pub fn paint(color: &str, value: &str) -> String {
    format!("{color}{value}{RESET}")
}
