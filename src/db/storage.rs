//! Key-value backends for the persisted record blob.
//!
//! The store keeps one JSON document under a single key, the same way a
//! browser keeps it in local storage. `SqliteStorage` persists it in the
//! `storage` table; `MemoryStorage` keeps it in process.

use crate::db::pool::DbPool;
use crate::errors::AppResult;
use rusqlite::{OptionalExtension, params};
use std::collections::HashMap;

pub trait KeyValueStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;
    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()>;
}

pub struct SqliteStorage {
    pool: DbPool,
}

impl SqliteStorage {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn open(path: &str) -> AppResult<Self> {
        Ok(Self::new(DbPool::new(path)?))
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

impl KeyValueStorage for SqliteStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let value = self
            .pool
            .conn
            .query_row(
                "SELECT value FROM storage WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.pool.conn.execute(
            "INSERT INTO storage (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value",
            params![key, value],
        )?;
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
