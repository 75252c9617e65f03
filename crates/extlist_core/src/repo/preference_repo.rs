//! Preference repository contracts and implementations.
//!
//! # Responsibility
//! - Provide a small string key-value store for persisted UI preferences.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Keys must be non-empty after trimming.
//! - `set_preference` overwrites any previous value for the same key.

use crate::db::DbError;
use rusqlite::{params, Connection, OptionalExtension};
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for preference reads and writes.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    InvalidKey(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::InvalidKey(key) => write!(f, "invalid preference key: `{key}`"),
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::InvalidKey(_) => None,
        }
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for persisted preferences.
pub trait PreferenceRepository {
    fn get_preference(&self, key: &str) -> RepoResult<Option<String>>;
    fn set_preference(&self, key: &str, value: &str) -> RepoResult<()>;
}

/// SQLite-backed preference repository.
pub struct SqlitePreferenceRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePreferenceRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl PreferenceRepository for SqlitePreferenceRepository<'_> {
    fn get_preference(&self, key: &str) -> RepoResult<Option<String>> {
        let key = normalize_key(key)?;
        let value = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1;",
                [key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_preference(&self, key: &str, value: &str) -> RepoResult<()> {
        let key = normalize_key(key)?;
        self.conn.execute(
            "INSERT INTO preferences (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = (strftime('%s', 'now') * 1000);",
            params![key, value],
        )?;
        Ok(())
    }
}

/// Process-local preference repository.
///
/// Values live only as long as the repository; used by tests and hosts
/// without a writable data directory.
#[derive(Debug, Default)]
pub struct MemoryPreferenceRepository {
    values: RefCell<BTreeMap<String, String>>,
}

impl MemoryPreferenceRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceRepository for MemoryPreferenceRepository {
    fn get_preference(&self, key: &str) -> RepoResult<Option<String>> {
        let key = normalize_key(key)?;
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set_preference(&self, key: &str, value: &str) -> RepoResult<()> {
        let key = normalize_key(key)?;
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

impl<R: PreferenceRepository + ?Sized> PreferenceRepository for &R {
    fn get_preference(&self, key: &str) -> RepoResult<Option<String>> {
        (**self).get_preference(key)
    }

    fn set_preference(&self, key: &str, value: &str) -> RepoResult<()> {
        (**self).set_preference(key, value)
    }
}

fn normalize_key(key: &str) -> RepoResult<&str> {
    let trimmed = key.trim();
    if trimmed.is_empty() {
        return Err(RepoError::InvalidKey(key.to_string()));
    }
    Ok(trimmed)
}
