//! In-memory key-value store for tests and ephemeral sessions.

use std::collections::HashMap;

use super::{KeyValueStore, StorageError};

/// Process-local store backed by a `HashMap`. Nothing survives restart.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-seed a key, useful for constructing corrupt-storage fixtures.
    pub fn with_entry(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.entries.insert(key.into(), value.into());
        self
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_trip() {
        let mut store = MemoryStore::new();
        assert!(store.get("k").unwrap().is_none());

        store.set("k", "v").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_with_entry_seeds_value() {
        let store = MemoryStore::new().with_entry("businessFavorites", "not json");
        assert_eq!(
            store.get("businessFavorites").unwrap().as_deref(),
            Some("not json")
        );
    }
}
