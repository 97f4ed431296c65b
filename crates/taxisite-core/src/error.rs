//! Unified error type for Taxisite core operations.

use serde::Serialize;
use thiserror::Error;

use crate::storage::StorageError;
use taxisite_types::{ConfigError, SyncError};

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    /// Local key-value storage failed.
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// JSON serialization/deserialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration parse, merge or edit failed.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Remote store fetch or publish failed.
    #[error("Sync error: {0}")]
    Sync(#[from] SyncError),

    /// File system I/O outside the key-value store (data dir, log dir).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Serialize for AppError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.to_string().as_str())
    }
}

/// Result type alias for Taxisite core operations.
pub type AppResult<T> = Result<T, AppError>;
