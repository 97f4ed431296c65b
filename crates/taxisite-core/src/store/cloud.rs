//! Operator-provided cloud settings and the remote they produce.

use std::sync::Arc;

use super::ConfigStore;
use crate::error::AppResult;
use crate::remote::{PostgrestRemote, RemoteStore};
use crate::storage::{read_json, write_json, CLOUD_SETTINGS_KEY};
use taxisite_types::CloudSettings;

impl ConfigStore {
    /// Saved cloud settings, empty when never entered or unreadable.
    pub fn cloud_settings(&self) -> CloudSettings {
        match read_json::<CloudSettings>(self.storage().as_ref(), CLOUD_SETTINGS_KEY) {
            Ok(settings) => settings.unwrap_or_default(),
            Err(e) => {
                tracing::warn!("⚠️ Could not read cloud settings: {}", e);
                CloudSettings::default()
            }
        }
    }

    /// Persist new cloud settings and swap the remote accordingly. Settings
    /// with a malformed URL are rejected before anything is written.
    pub fn set_cloud_settings(&self, settings: CloudSettings) -> AppResult<()> {
        let remote = build_remote(&settings)?;
        write_json(self.storage().as_ref(), CLOUD_SETTINGS_KEY, &settings)?;
        self.install_remote(remote, &settings);
        Ok(())
    }

    /// Wire the remote from previously saved settings. Returns whether one is configured.
    pub fn connect_saved_cloud(&self) -> AppResult<bool> {
        let settings = self.cloud_settings();
        let remote = build_remote(&settings)?;
        let configured = remote.is_some();
        self.install_remote(remote, &settings);
        Ok(configured)
    }

    fn install_remote(&self, remote: Option<Arc<dyn RemoteStore>>, settings: &CloudSettings) {
        if remote.is_some() {
            tracing::info!("☁️ Cloud sync configured for {}", settings.base_url());
        } else {
            tracing::info!("☁️ Cloud sync not configured");
        }
        self.set_remote(remote);
    }
}

fn build_remote(settings: &CloudSettings) -> AppResult<Option<Arc<dyn RemoteStore>>> {
    if !settings.is_configured() {
        return Ok(None);
    }
    let remote: Arc<dyn RemoteStore> = Arc::new(PostgrestRemote::new(settings.clone())?);
    Ok(Some(remote))
}
