//! Key/value preference storage
//!
//! The browser implementation lives in the UI layer, next to the theme
//! context. [`MemoryStorage`] backs the server render and the tests, and is
//! what a preference falls back to when the browser refuses to store it.

use std::cell::RefCell;
use std::collections::HashMap;

/// Errors raised by a preference storage backend
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    #[error("storage is unavailable: {0}")]
    Unavailable(String),

    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },

    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
}

/// A string key/value store for user preferences
pub trait PreferenceStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// In-memory storage, lost when the page or process goes away
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-populated with one value
    pub fn with_value(key: impl Into<String>, value: impl Into<String>) -> Self {
        let storage = Self::new();
        storage.values.borrow_mut().insert(key.into(), value.into());
        storage
    }
}

impl PreferenceStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("theme"), Ok(None));

        storage.set("theme", "dark").unwrap();
        assert_eq!(storage.get("theme"), Ok(Some("dark".to_string())));

        storage.set("theme", "light").unwrap();
        assert_eq!(storage.get("theme"), Ok(Some("light".to_string())));
    }

    #[test]
    fn test_with_value() {
        let storage = MemoryStorage::with_value("theme", "dark");
        assert_eq!(storage.get("theme"), Ok(Some("dark".to_string())));
        assert_eq!(storage.get("other"), Ok(None));
    }

    #[test]
    fn test_error_messages() {
        let err = StorageError::Write {
            key: "theme".to_string(),
            reason: "QuotaExceededError".to_string(),
        };
        assert_eq!(err.to_string(), "failed to write `theme`: QuotaExceededError");
        assert_eq!(
            StorageError::Unavailable("private mode".to_string()).to_string(),
            "storage is unavailable: private mode"
        );
    }
}
