use std::collections::HashMap;

use parking_lot::RwLock;

use super::{validate_key, KeyValueStore, StorageError};

/// In-process store; used by tests and by `--ephemeral` runs.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(key: &str, value: &str) -> Self {
        let store = Self::new();
        store.entries.write().insert(key.to_string(), value.to_string());
        store
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.read().contains_key(key)
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        validate_key(key)?;
        Ok(self.entries.read().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.entries.write().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        validate_key(key)?;
        self.entries.write().remove(key);
        Ok(())
    }
}
