//! Key-value persistence boundary.
//!
//! # Responsibility
//! - Define the small string key-value contract every board component
//!   persists through.
//! - Provide a SQLite adapter for real use and a memory adapter with an
//!   optional byte quota for tests and embedding.
//!
//! # Invariants
//! - Values are opaque strings; encoding is owned by the repository layer.
//! - `with_transaction` is all-or-nothing: when the closure fails, none of
//!   the writes it made are observable afterwards.

use crate::db::DbError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod memory;
mod sqlite;

pub use memory::MemoryKeyValueStore;
pub use sqlite::SqliteKeyValueStore;

/// Persisted keys shared with the browser build of the board.
pub mod keys {
    /// Full task collection as a JSON array.
    pub const TASKS: &str = "tasks";
    /// Highest task id ever issued, as a JSON integer.
    pub const TASK_ID_SEQ: &str = "taskIdSeq";
    /// `"true"` or `"false"`.
    pub const SHOW_SIDEBAR: &str = "showSideBar";
    /// Selected board name as a JSON string.
    pub const ACTIVE_BOARD: &str = "activeBoard";
    /// `"enabled"` or `"disabled"`.
    pub const LIGHT_THEME: &str = "light-theme";
}

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure reported by a storage adapter.
#[derive(Debug)]
pub enum StorageError {
    Db(DbError),
    QuotaExceeded {
        key: String,
        required_bytes: usize,
        quota_bytes: usize,
    },
    Backend(String),
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::QuotaExceeded {
                key,
                required_bytes,
                quota_bytes,
            } => write!(
                f,
                "storage quota exceeded writing `{key}`: {required_bytes} bytes needed, {quota_bytes} allowed"
            ),
            Self::Backend(message) => write!(f, "storage backend failure: {message}"),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            Self::QuotaExceeded { .. } | Self::Backend(_) => None,
        }
    }
}

impl From<DbError> for StorageError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// String key-value store with an atomic read-modify-write scope.
///
/// Implementations are used from a single thread; `&self` methods may rely
/// on interior mutability.
pub trait KeyValueStore {
    /// Returns the stored value, or `None` when the key was never written.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Writes `value` under `key`, replacing any previous value.
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;

    /// Deletes `key`. Removing an absent key is not an error.
    fn remove(&self, key: &str) -> StorageResult<()>;

    /// Runs `op` so that either all of its writes land or none do.
    ///
    /// The error type only needs to absorb `StorageError`, so repositories
    /// can return their own error from inside the scope.
    fn with_transaction<T, E>(&self, op: impl FnOnce() -> Result<T, E>) -> Result<T, E>
    where
        E: From<StorageError>;
}
