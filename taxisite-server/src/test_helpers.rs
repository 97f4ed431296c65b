//! Test helpers for taxisite-server unit tests.

use std::sync::Arc;

use tempfile::TempDir;

use taxisite_core::{AuthGate, ConfigStore, FileStore};

use crate::state::AppState;

pub const TEST_SECRET: &str = "test-admin-secret";

/// Create a minimal `AppState` backed by a temp data dir and no cloud remote.
///
/// Returns `(AppState, TempDir)`; keep `TempDir` alive for the test duration.
pub fn test_app_state() -> (AppState, TempDir) {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let storage = Arc::new(FileStore::open(temp_dir.path()).expect("failed to open file store"));
    let store = Arc::new(ConfigStore::new(storage.clone(), None));
    store.load_local();
    let auth = Arc::new(AuthGate::new(TEST_SECRET, storage));

    (AppState::new(store, auth), temp_dir)
}

/// Log in with the test secret and return the bearer token.
pub fn login(state: &AppState) -> String {
    state.auth().login(TEST_SECRET).expect("test login failed").as_str().to_string()
}
