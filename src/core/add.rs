use crate::db::storage::KeyValueStorage;
use crate::db::store::RecordStore;
use crate::errors::{AppError, AppResult};
use crate::models::record::AttendanceRecord;
use crate::models::time_of_day::parse_optional;

/// High-level business logic for the `add` command (the attendance form).
pub struct AddLogic;

impl AddLogic {
    /// Validate one submission and append it to the store.
    ///
    /// `name` is trimmed and must be non-empty, `time_in` is required and
    /// `time_out` optional. Times are stored zero-padded (`HH:MM`).
    /// On any validation failure the store is left untouched.
    pub fn apply<S: KeyValueStorage>(
        store: &mut RecordStore<S>,
        name: &str,
        time_in: Option<&str>,
        time_out: Option<&str>,
        date: &str,
    ) -> AppResult<AttendanceRecord> {
        let record = validate(name, time_in, time_out, date)?;
        store.append(record.clone())?;
        Ok(record)
    }
}

fn validate(
    name: &str,
    time_in: Option<&str>,
    time_out: Option<&str>,
    date: &str,
) -> AppResult<AttendanceRecord> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::Validation("name is required".into()));
    }

    let time_in = parse_optional(time_in)?
        .ok_or_else(|| AppError::Validation("time in is required".into()))?;
    let time_out = parse_optional(time_out)?;

    Ok(AttendanceRecord::new(
        name,
        date,
        Some(time_in.to_string()),
        time_out.map(|t| t.to_string()),
    ))
}

/// Pure append over an in-memory sequence.
///
/// Returns the extended sequence, or a validation error with `records`
/// left as they were.
pub fn append_record(
    records: &[AttendanceRecord],
    name: &str,
    date: &str,
    time_in: Option<&str>,
    time_out: Option<&str>,
) -> AppResult<Vec<AttendanceRecord>> {
    let record = validate(name, time_in, time_out, date)?;
    let mut out = records.to_vec();
    out.push(record);
    Ok(out)
}
