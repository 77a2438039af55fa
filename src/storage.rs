//! Durable key-value storage port for session persistence.
//!
//! SYSTEM CONTEXT
//! ==============
//! The auth container persists its bearer token across page loads. Storage is
//! injected as a [`TokenStorage`] implementation instead of reaching for
//! `window.localStorage` directly, so native tests can swap in
//! [`MemoryStorage`] and assert exact key/value interactions.
//!
//! TRADE-OFFS
//! ==========
//! Writes are best-effort. Callers log failures and carry on; nothing rolls
//! back in-memory state when the browser refuses a write.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::BTreeMap;

use crate::error::ErrorCode;

/// Error returned by [`TokenStorage`] writes.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is reachable (no window, storage disabled).
    #[error("durable storage unavailable")]
    Unavailable,
    /// The backend rejected a write or remove for `key`.
    #[error("storage write failed for {key}: {message}")]
    Write { key: String, message: String },
}

impl ErrorCode for StorageError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Unavailable => "E_STORAGE_UNAVAILABLE",
            Self::Write { .. } => "E_STORAGE_WRITE",
        }
    }
}

/// Synchronous string key-value store outside process memory.
pub trait TokenStorage {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be reached or refuses
    /// the write.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError`] when the backend cannot be reached or refuses
    /// the removal.
    fn remove(&mut self, key: &str) -> Result<(), StorageError>;
}

/// In-process storage used by native builds and tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStorage {
    entries: BTreeMap<String, String>,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed storage with a single entry, e.g. a token left by a previous session.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut storage = Self::new();
        storage.entries.insert(key.to_owned(), value.to_owned());
        storage
    }

    /// All stored entries in key order.
    #[must_use]
    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.entries
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl TokenStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        self.entries.remove(key);
        Ok(())
    }
}

/// `window.localStorage` backed storage. Requires a browser environment.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserStorage;

#[cfg(feature = "hydrate")]
impl BrowserStorage {
    fn local_storage() -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

#[cfg(feature = "hydrate")]
impl TokenStorage for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        let storage = Self::local_storage().ok()?;
        storage.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .set_item(key, value)
            .map_err(|e| StorageError::Write { key: key.to_owned(), message: format!("{e:?}") })
    }

    fn remove(&mut self, key: &str) -> Result<(), StorageError> {
        Self::local_storage()?
            .remove_item(key)
            .map_err(|e| StorageError::Write { key: key.to_owned(), message: format!("{e:?}") })
    }
}
