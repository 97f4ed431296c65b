//! Configuration store.
//!
//! Owns the current `SiteConfig` and its lifecycle across local storage and the
//! remote backend. All writes funnel through [`ConfigStore::set`], which writes
//! the local cache first and then broadcasts the new value to subscribers.

mod cloud;
mod publish_guard;


use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::RwLock;
use serde::Serialize;
use tokio::sync::watch;

use crate::error::AppResult;
use crate::remote::RemoteStore;
use crate::storage::{KeyValueStore, CONFIG_KEY};
use publish_guard::PublishGuard;
use taxisite_types::{SiteConfig, SyncError};

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PublishOutcome {
    Published,
}

pub struct ConfigStore {
    storage: Arc<dyn KeyValueStore>,
    current: watch::Sender<SiteConfig>,
    remote: RwLock<Option<Arc<dyn RemoteStore>>>,
    publishing: AtomicUsize,
}

impl ConfigStore {
    /// Store holding the built-in defaults; call [`load`](Self::load) or
    /// [`load_local`](Self::load_local) to pick up cached state.
    pub fn new(storage: Arc<dyn KeyValueStore>, remote: Option<Arc<dyn RemoteStore>>) -> Self {
        let (current, _) = watch::channel(SiteConfig::default());
        Self { storage, current, remote: RwLock::new(remote), publishing: AtomicUsize::new(0) }
    }

    pub fn get(&self) -> SiteConfig {
        self.current.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<SiteConfig> {
        self.current.subscribe()
    }

    /// Replace the configuration wholesale: local cache first, then subscribers.
    pub fn set(&self, config: SiteConfig) -> AppResult<()> {
        let raw = serde_json::to_string(&config)?;
        self.storage.set(CONFIG_KEY, &raw)?;
        self.current.send_replace(config);
        Ok(())
    }

    /// Save a draft to this device only.
    pub fn save(&self, config: SiteConfig) -> AppResult<()> {
        self.set(config)?;
        tracing::info!("💾 Site configuration saved locally");
        Ok(())
    }

    /// Read the local cache merged over the defaults. Never fails: an absent
    /// cache yields the defaults, an unreadable one is logged and ignored.
    pub fn load_local(&self) -> SiteConfig {
        let config = match self.storage.get(CONFIG_KEY) {
            Ok(Some(raw)) => match SiteConfig::from_partial_json(&raw) {
                Ok(outcome) => {
                    log_skipped("cached", &outcome.skipped);
                    outcome.config
                }
                Err(e) => {
                    tracing::warn!("⚠️ Ignoring unreadable cached site configuration: {}", e);
                    SiteConfig::default()
                }
            },
            Ok(None) => {
                tracing::debug!("No cached site configuration, using defaults");
                SiteConfig::default()
            }
            Err(e) => {
                tracing::warn!("⚠️ Could not read cached site configuration: {}", e);
                SiteConfig::default()
            }
        };
        self.current.send_replace(config.clone());
        config
    }

    /// Fetch the remote document and adopt it merged over the current value.
    pub async fn try_refresh_from_remote(&self) -> AppResult<SiteConfig> {
        let remote = self.remote().ok_or(SyncError::NotConfigured)?;
        let partial = remote.fetch().await?;
        let outcome = self.get().merge_partial(&partial)?;
        log_skipped("remote", &outcome.skipped);
        self.set(outcome.config.clone())?;
        Ok(outcome.config)
    }

    /// Best-effort remote overlay. Failures are logged and the current value kept.
    pub async fn refresh_from_remote(&self) -> bool {
        match self.try_refresh_from_remote().await {
            Ok(_) => {
                tracing::info!("☁️ Site configuration refreshed from remote store");
                true
            }
            Err(e) => {
                tracing::warn!("⚠️ Remote fetch skipped, keeping local configuration: {}", e);
                false
            }
        }
    }

    /// Local cache, then the remote overlay.
    pub async fn load(&self) -> SiteConfig {
        self.load_local();
        self.refresh_from_remote().await;
        self.get()
    }

    /// Push `config` to the remote store; on success it becomes the local baseline.
    ///
    /// On failure nothing local changes. No retry, no conflict detection.
    /// Once the remote has accepted the document the call succeeds even if the
    /// local cache cannot be rewritten; subscribers still see the new value.
    pub async fn publish(&self, config: SiteConfig) -> AppResult<PublishOutcome> {
        let remote = self.remote().ok_or(SyncError::NotConfigured)?;
        let _guard = PublishGuard::new(&self.publishing);

        if let Err(e) = remote.publish(&config).await {
            tracing::error!("❌ Publish failed: {}", e);
            return Err(e.into());
        }

        if let Err(e) = self.set(config.clone()) {
            tracing::error!("❌ Published, but the local cache was not updated: {}", e);
            self.current.send_replace(config);
        }
        tracing::info!("🚀 Site configuration published");
        Ok(PublishOutcome::Published)
    }

    pub fn is_publishing(&self) -> bool {
        self.publishing.load(Ordering::SeqCst) > 0
    }

    pub fn has_remote(&self) -> bool {
        self.remote.read().is_some()
    }

    pub fn set_remote(&self, remote: Option<Arc<dyn RemoteStore>>) {
        *self.remote.write() = remote;
    }

    fn remote(&self) -> Option<Arc<dyn RemoteStore>> {
        self.remote.read().clone()
    }

    pub(crate) fn storage(&self) -> &Arc<dyn KeyValueStore> {
        &self.storage
    }
}

fn log_skipped(source: &str, keys: &[String]) {
    for key in keys {
        tracing::warn!("⚠️ Skipping {} key {:?}: value does not match the site schema", source, key);
    }
}
