//! In-process key-value store.
//!
//! Behaves like browser local storage: every key and value counts against an
//! optional byte quota, and a write that would cross it is rejected.

use super::{KeyValueStore, StorageError, StorageResult};
use log::warn;
use std::cell::RefCell;
use std::collections::BTreeMap;

/// `RefCell`-backed store; not `Sync`, matching the single-threaded model.
#[derive(Debug, Default)]
pub struct MemoryKeyValueStore {
    entries: RefCell<BTreeMap<String, String>>,
    quota_bytes: Option<usize>,
}

impl MemoryKeyValueStore {
    /// Creates an unbounded store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store that rejects writes once keys plus values would
    /// exceed `quota_bytes`.
    pub fn with_quota(quota_bytes: usize) -> Self {
        Self {
            entries: RefCell::default(),
            quota_bytes: Some(quota_bytes),
        }
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    fn used_bytes_without(entries: &BTreeMap<String, String>, key: &str) -> usize {
        entries
            .iter()
            .filter(|(existing, _)| existing.as_str() != key)
            .map(|(existing, value)| existing.len() + value.len())
            .sum()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let mut entries = self.entries.borrow_mut();
        if let Some(quota_bytes) = self.quota_bytes {
            let required_bytes = Self::used_bytes_without(&entries, key) + key.len() + value.len();
            if required_bytes > quota_bytes {
                warn!(
                    "event=kv_set module=storage status=error backend=memory key={key} error_code=quota_exceeded"
                );
                return Err(StorageError::QuotaExceeded {
                    key: key.to_string(),
                    required_bytes,
                    quota_bytes,
                });
            }
        }
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        self.entries.borrow_mut().remove(key);
        Ok(())
    }

    fn with_transaction<T, E>(&self, op: impl FnOnce() -> Result<T, E>) -> Result<T, E>
    where
        E: From<StorageError>,
    {
        let snapshot = self.entries.borrow().clone();
        let result = op();
        if result.is_err() {
            *self.entries.borrow_mut() = snapshot;
        }
        result
    }
}
