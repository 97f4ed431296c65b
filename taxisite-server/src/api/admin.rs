//! Admin save/publish, cloud setup and status handlers

use axum::{extract::State, response::Json, Extension};
use serde::{Deserialize, Serialize};

use super::error::ApiResult;
use super::session::AdminSession;
use crate::state::AppState;
use taxisite_core::PublishOutcome;
use taxisite_types::CloudSettings;

pub const SAVED_MESSAGE: &str = "Draft saved to this device!";
pub const PUBLISHED_MESSAGE: &str = "Published LIVE! Changes are now visible on all devices.";
pub const CLOUD_SAVED_MESSAGE: &str = "Cloud keys saved!";

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

#[derive(Debug, Serialize)]
pub struct PublishResponse {
    pub outcome: PublishOutcome,
    pub message: &'static str,
}

pub async fn save_draft(
    State(state): State<AppState>,
    Extension(AdminSession(token)): Extension<AdminSession>,
) -> ApiResult<MessageResponse> {
    state.store().save(state.draft(&token))?;
    Ok(Json(MessageResponse { message: SAVED_MESSAGE }))
}

/// Publish the caller's draft. On failure the draft is kept as-is so the
/// operator can fix the cloud settings and retry.
pub async fn publish_draft(
    State(state): State<AppState>,
    Extension(AdminSession(token)): Extension<AdminSession>,
) -> ApiResult<PublishResponse> {
    let draft = state.draft(&token);
    let outcome = state.store().publish(draft).await?;
    Ok(Json(PublishResponse { outcome, message: PUBLISHED_MESSAGE }))
}

#[derive(Debug, Serialize)]
pub struct CloudResponse {
    pub configured: bool,
    pub settings: CloudSettings,
}

pub async fn get_cloud(State(state): State<AppState>) -> Json<CloudResponse> {
    let settings = state.store().cloud_settings();
    Json(CloudResponse { configured: settings.is_configured(), settings: settings.masked() })
}

#[derive(Deserialize)]
pub struct CloudUpdate {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub key: String,
}

pub async fn put_cloud(
    State(state): State<AppState>,
    Json(payload): Json<CloudUpdate>,
) -> ApiResult<MessageResponse> {
    let settings = CloudSettings::new(payload.url.trim(), payload.key.trim());
    state.store().set_cloud_settings(settings)?;
    Ok(Json(MessageResponse { message: CLOUD_SAVED_MESSAGE }))
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub version: String,
    pub publishing: bool,
    pub cloud_configured: bool,
    pub active_sessions: usize,
    pub open_drafts: usize,
}

pub async fn get_status(State(state): State<AppState>) -> Json<StatusResponse> {
    Json(StatusResponse {
        version: env!("CARGO_PKG_VERSION").to_string(),
        publishing: state.store().is_publishing(),
        cloud_configured: state.store().has_remote(),
        active_sessions: state.auth().session_count(),
        open_drafts: state.inner.drafts.len(),
    })
}
