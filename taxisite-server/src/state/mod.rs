//! Application State
//!
//! Shared handles for handlers: the config store, the admin gate and the
//! per-session drafts being edited in the admin API.

mod drafts;

use dashmap::DashMap;
use std::sync::Arc;

use taxisite_core::{AuthGate, ConfigStore};
use taxisite_types::SiteConfig;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub(crate) inner: Arc<AppStateInner>,
}

pub struct AppStateInner {
    pub store: Arc<ConfigStore>,
    pub auth: Arc<AuthGate>,
    /// Admin drafts keyed by session token. Not persisted: an explicit save
    /// or publish is what makes edits stick.
    pub drafts: DashMap<String, SiteConfig>,
}

impl AppState {
    pub fn new(store: Arc<ConfigStore>, auth: Arc<AuthGate>) -> Self {
        Self { inner: Arc::new(AppStateInner { store, auth, drafts: DashMap::new() }) }
    }

    pub fn store(&self) -> &ConfigStore {
        &self.inner.store
    }

    pub fn auth(&self) -> &AuthGate {
        &self.inner.auth
    }
}
