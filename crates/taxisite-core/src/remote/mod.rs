//! Remote store for the shared site document.
//!
//! The hosted backend keeps exactly one row (`id = 1`) whose `data` column is
//! the whole `SiteConfig`. Reads and writes use the same static key; there is
//! no versioning, so concurrent publishes are last-write-wins.

mod postgrest;

#[cfg(test)]
mod tests;

pub use postgrest::{parse_base_url, PostgrestRemote, DOCUMENT_ID, TABLE};

use async_trait::async_trait;
use serde_json::Value;

use taxisite_types::{SiteConfig, SyncError};

#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetch the raw `data` document. It may be partial; callers merge it.
    async fn fetch(&self) -> Result<Value, SyncError>;

    /// Replace the remote document with `config`.
    async fn publish(&self, config: &SiteConfig) -> Result<(), SyncError>;
}
