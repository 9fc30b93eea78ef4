//! Attendance record store.
//!
//! The whole sequence lives as one JSON array under a single storage key.
//! Nothing is cached: every read re-parses the persisted blob and every
//! append writes it back before returning.

use crate::db::storage::KeyValueStorage;
use crate::errors::{AppError, AppResult};
use crate::models::record::AttendanceRecord;
use crate::ui::messages::warning;

pub const DEFAULT_STORAGE_KEY: &str = "ojtList";

pub struct RecordStore<S: KeyValueStorage> {
    storage: S,
    key: String,
}

impl<S: KeyValueStorage> RecordStore<S> {
    pub fn new(storage: S, key: impl Into<String>) -> Self {
        Self {
            storage,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the full sequence. Absent key → empty; malformed blob → `CorruptState`.
    pub fn load(&self) -> AppResult<Vec<AttendanceRecord>> {
        let Some(raw) = self.storage.get_item(&self.key)? else {
            return Ok(Vec::new());
        };

        serde_json::from_str(&raw).map_err(|e| AppError::CorruptState {
            key: self.key.clone(),
            reason: e.to_string(),
        })
    }

    /// Like `load`, but a corrupt blob is reported and treated as empty.
    pub fn load_or_empty(&self) -> AppResult<Vec<AttendanceRecord>> {
        match self.load() {
            Err(e @ AppError::CorruptState { .. }) => {
                warning(format!("{e}; continuing with an empty record list."));
                Ok(Vec::new())
            }
            other => other,
        }
    }

    /// Append to the end of the sequence and persist immediately.
    ///
    /// A corrupt blob is never overwritten: the error is returned instead.
    pub fn append(&mut self, record: AttendanceRecord) -> AppResult<usize> {
        let mut records = self.load()?;
        records.push(record);
        self.save(&records)?;
        Ok(records.len())
    }

    /// Records for one person, in insertion order.
    pub fn query(&self, name: &str) -> AppResult<Vec<AttendanceRecord>> {
        Ok(self
            .load_or_empty()?
            .into_iter()
            .filter(|r| r.name == name)
            .collect())
    }

    fn save(&mut self, records: &[AttendanceRecord]) -> AppResult<()> {
        let json = serde_json::to_string(records)?;
        self.storage.set_item(&self.key, &json)
    }
}
