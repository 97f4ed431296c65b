//! Key-value storage port for on-device state.
//!
//! Everything the site keeps locally (cached configuration, admin sessions,
//! cloud settings) goes through this trait so tests can swap in memory.

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use serde::{de::DeserializeOwned, Serialize};
use thiserror::Error;

/// Cached site configuration.
pub const CONFIG_KEY: &str = "taxi_config";
/// Live admin session tokens.
pub const SESSIONS_KEY: &str = "admin_sessions";
/// Remote backend URL + key.
pub const CLOUD_SETTINGS_KEY: &str = "cloud_settings";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("invalid storage key {0:?}")]
    InvalidKey(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub trait KeyValueStore: Send + Sync {
    /// Raw value for `key`, `None` when absent.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    /// Removing an absent key is not an error.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

pub fn read_json<T: DeserializeOwned>(
    store: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StorageError> {
    match store.get(key)? {
        Some(raw) if !raw.trim().is_empty() => Ok(Some(serde_json::from_str(&raw)?)),
        _ => Ok(None),
    }
}

pub fn write_json<T: Serialize>(
    store: &dyn KeyValueStore,
    key: &str,
    value: &T,
) -> Result<(), StorageError> {
    let raw = serde_json::to_string_pretty(value)?;
    store.set(key, &raw)
}

pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let valid = !key.is_empty()
        && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
    if valid {
        Ok(())
    } else {
        Err(StorageError::InvalidKey(key.to_string()))
    }
}
