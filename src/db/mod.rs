pub mod initialize;
pub mod log;
pub mod migrate;
pub mod pool;
pub mod stats;
pub mod storage;
pub mod store;

use crate::config::Config;
use crate::errors::AppResult;
use storage::SqliteStorage;
use store::RecordStore;

/// Open the record store configured for this run.
pub fn open_store(cfg: &Config) -> AppResult<RecordStore<SqliteStorage>> {
    let storage = SqliteStorage::open(&cfg.database)?;
    Ok(RecordStore::new(storage, cfg.storage_key.clone()))
}
