//! Persisted attendance record.
//!
//! The JSON shape is `{"name", "date", "timeIn", "timeOut"}`. An unset time
//! is stored as `""`; on read, a missing field, `null` or `""` all mean the
//! time is absent.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    pub name: String,
    #[serde(default)]
    pub date: String,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        serialize_with = "none_as_empty"
    )]
    pub time_in: Option<String>,
    #[serde(
        default,
        deserialize_with = "empty_as_none",
        serialize_with = "none_as_empty"
    )]
    pub time_out: Option<String>,
}

impl AttendanceRecord {
    pub fn new(
        name: impl Into<String>,
        date: impl Into<String>,
        time_in: Option<String>,
        time_out: Option<String>,
    ) -> Self {
        Self {
            name: name.into(),
            date: date.into(),
            time_in: normalize(time_in),
            time_out: normalize(time_out),
        }
    }

    pub fn time_in(&self) -> Option<&str> {
        self.time_in.as_deref()
    }

    pub fn time_out(&self) -> Option<&str> {
        self.time_out.as_deref()
    }
}

fn normalize(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(normalize(raw))
}

fn none_as_empty<S>(value: &Option<String>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(value.as_deref().unwrap_or(""))
}
