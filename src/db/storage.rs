//! Key/value persistence backends.
//!
//! The workout store only needs three operations on string keys, so any
//! backend able to get, set and remove a string value can persist it.

use crate::db::initialize::init_db;
use crate::db::log::write_log;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use chrono::Local;
use rusqlite::{OptionalExtension, params};
use std::collections::HashMap;

pub trait KeyValueStore {
    /// Value stored under `key`, `None` when absent.
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// Delete `key`. Removing an absent key is not an error.
    fn remove_item(&mut self, key: &str) -> AppResult<()>;
}

/// Backend living in the application SQLite database (`storage` table).
pub struct SqliteStorage {
    pool: DbPool,
}

impl SqliteStorage {
    /// Open the database at `path`, running pending migrations first.
    pub fn open(path: &str) -> AppResult<Self> {
        let pool = DbPool::new(path)?;
        Self::from_pool(pool)
    }

    pub fn in_memory() -> AppResult<Self> {
        Self::from_pool(DbPool::in_memory()?)
    }

    pub fn from_pool(pool: DbPool) -> AppResult<Self> {
        init_db(&pool.conn)?;
        Ok(Self { pool })
    }

    pub fn pool(&mut self) -> &mut DbPool {
        &mut self.pool
    }

    /// Record an operation in the internal log. A failure here never aborts
    /// the operation that triggered it.
    pub fn audit(&self, operation: &str, target: &str, message: &str) {
        if let Err(e) = write_log(&self.pool.conn, operation, target, message) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }
}

impl KeyValueStore for SqliteStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let mut stmt = self
            .pool
            .conn
            .prepare_cached("SELECT value FROM storage WHERE key = ?1")?;
        let value = stmt
            .query_row([key], |row| row.get::<_, String>(0))
            .optional()?;
        Ok(value)
    }

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()> {
        let now = Local::now().to_rfc3339();
        self.pool.conn.execute(
            "INSERT INTO storage (key, value, updated_at) VALUES (?1, ?2, ?3)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
            params![key, value, now],
        )?;
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> AppResult<()> {
        self.pool
            .conn
            .execute("DELETE FROM storage WHERE key = ?1", [key])?;
        Ok(())
    }
}

/// Process-local backend, used by tests and embedders without a database.
#[derive(Debug, Default, Clone)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> AppResult<()> {
        self.items.remove(key);
        Ok(())
    }
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &mut T {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get_item(key)
    }

    fn set_item(&mut self, key: &str, value: &str) -> AppResult<()> {
        (**self).set_item(key, value)
    }

    fn remove_item(&mut self, key: &str) -> AppResult<()> {
        (**self).remove_item(key)
    }
}
