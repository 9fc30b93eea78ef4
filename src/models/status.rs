use serde::{Serialize, Serializer};
use std::fmt;

/// Policy label attached to a check-in time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrivalStatus {
    NoIn,
    EarlyIn,
    OnTime,
    Late,
}

impl ArrivalStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ArrivalStatus::NoIn => "No In",
            ArrivalStatus::EarlyIn => "Early In",
            ArrivalStatus::OnTime => "On Time",
            ArrivalStatus::Late => "Late",
        }
    }
}

/// Policy label attached to a check-out time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DepartureStatus {
    NoOut,
    EarlyOut,
    Out,
    Overtime,
}

impl DepartureStatus {
    pub fn label(&self) -> &'static str {
        match self {
            DepartureStatus::NoOut => "No Out",
            DepartureStatus::EarlyOut => "Early Out",
            DepartureStatus::Out => "Out",
            DepartureStatus::Overtime => "Overtime",
        }
    }
}

impl fmt::Display for ArrivalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for DepartureStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for ArrivalStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl Serialize for DepartureStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}
