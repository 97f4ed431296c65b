use axum::extract::State;
use axum::http::StatusCode;
use axum::response::Json;
use axum::Extension;
use axum_test::TestServer;
use serde_json::{json, Value};
use wiremock::matchers::method;
use wiremock::{Mock, MockServer, ResponseTemplate};

use super::admin::{
    get_cloud, get_status, publish_draft, put_cloud, save_draft, CloudUpdate, CLOUD_SAVED_MESSAGE,
    PUBLISHED_MESSAGE, SAVED_MESSAGE,
};
use super::error::{CLOUD_NOT_CONFIGURED, CLOUD_SYNC_ERROR};
use super::session::AdminSession;
use crate::router::build_router;
use crate::state::AppState;
use crate::test_helpers::{login, test_app_state, TEST_SECRET};
use taxisite_types::ConfigError;

fn session(token: &str) -> Extension<AdminSession> {
    Extension(AdminSession(token.to_string()))
}

fn edit_address(state: &AppState, token: &str, address: &str) {
    state
        .edit_draft::<_, ConfigError>(token, |draft| {
            draft.address = address.to_string();
            Ok(())
        })
        .unwrap();
}

async fn connect_backend(state: &AppState, status: u16) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("PATCH")).respond_with(ResponseTemplate::new(status)).mount(&server).await;
    put_cloud(
        State(state.clone()),
        Json(CloudUpdate { url: server.uri(), key: "anon-key-for-tests".to_string() }),
    )
    .await
    .unwrap();
    server
}

#[tokio::test]
async fn test_login_flow_over_http() {
    let (state, _tmp) = test_app_state();
    let server = TestServer::new(build_router(state, None)).unwrap();

    for wrong in ["", "test-admin", "test-admin-secret ", "x"] {
        let response = server.post("/api/admin/login").json(&json!({ "password": wrong })).await;
        response.assert_status_unauthorized();
        let body: Value = response.json();
        assert_eq!(body["error"], "Invalid password");
    }

    let response = server.post("/api/admin/login").json(&json!({ "password": TEST_SECRET })).await;
    response.assert_status_ok();
    let token = response.json::<Value>()["token"].as_str().unwrap().to_string();

    let session: Value = server.get("/api/admin/session").authorization_bearer(&token).await.json();
    assert_eq!(session["state"], "logged_in");

    server.post("/api/admin/logout").authorization_bearer(&token).await.assert_status_ok();
    let session: Value = server.get("/api/admin/session").authorization_bearer(&token).await.json();
    assert_eq!(session["state"], "logged_out");
    server.get("/api/admin/draft").authorization_bearer(&token).await.assert_status_unauthorized();
}

#[tokio::test]
async fn test_save_adopts_draft_locally() {
    let (state, tmp) = test_app_state();
    let token = login(&state);
    edit_address(&state, &token, "Sector 37, Faridabad");

    let Json(resp) = save_draft(State(state.clone()), session(&token)).await.unwrap();

    assert_eq!(resp.message, SAVED_MESSAGE);
    assert_eq!(state.store().get().address, "Sector 37, Faridabad");
    let cached = std::fs::read_to_string(tmp.path().join("taxi_config.json")).unwrap();
    assert!(cached.contains("Sector 37, Faridabad"));
}

#[tokio::test]
async fn test_publish_requires_cloud_setup() {
    let (state, _tmp) = test_app_state();
    let token = login(&state);

    let err = publish_draft(State(state), session(&token)).await.unwrap_err();
    assert_eq!(err.status, StatusCode::PRECONDITION_FAILED);
    assert_eq!(err.message, CLOUD_NOT_CONFIGURED);
}

#[tokio::test]
async fn test_publish_success() {
    let (state, _tmp) = test_app_state();
    let token = login(&state);
    let _backend = connect_backend(&state, 204).await;
    edit_address(&state, &token, "Live address");

    let Json(resp) = publish_draft(State(state.clone()), session(&token)).await.unwrap();

    assert_eq!(resp.message, PUBLISHED_MESSAGE);
    assert_eq!(state.store().get(), state.draft(&token));
    assert!(!state.store().is_publishing());
}

#[tokio::test]
async fn test_publish_failure_keeps_draft_and_live_site() {
    let (state, _tmp) = test_app_state();
    let token = login(&state);
    let _backend = connect_backend(&state, 500).await;
    let live_before = state.store().get();
    edit_address(&state, &token, "Unpublished address");

    let err = publish_draft(State(state.clone()), session(&token)).await.unwrap_err();

    assert_eq!(err.status, StatusCode::BAD_GATEWAY);
    assert_eq!(err.message, CLOUD_SYNC_ERROR);
    assert_eq!(state.store().get(), live_before);
    assert_eq!(state.draft(&token).address, "Unpublished address");
}

#[tokio::test]
async fn test_cloud_settings_are_masked() {
    let (state, _tmp) = test_app_state();

    let Json(resp) = put_cloud(
        State(state.clone()),
        Json(CloudUpdate {
            url: " https://xyz.supabase.co/ ".to_string(),
            key: "eyJhbGciOiJIUzI1NiJ9.payload".to_string(),
        }),
    )
    .await
    .unwrap();
    assert_eq!(resp.message, CLOUD_SAVED_MESSAGE);

    let Json(cloud) = get_cloud(State(state.clone())).await;
    assert!(cloud.configured);
    assert_eq!(cloud.settings.url, "https://xyz.supabase.co/");
    assert_eq!(cloud.settings.key, "eyJh...load");

    let Json(status) = get_status(State(state)).await;
    assert!(status.cloud_configured);
    assert!(!status.publishing);
}

#[tokio::test]
async fn test_bad_cloud_url_rejected() {
    let (state, _tmp) = test_app_state();
    let err = put_cloud(
        State(state.clone()),
        Json(CloudUpdate { url: "supabase".to_string(), key: "k".to_string() }),
    )
    .await
    .unwrap_err();

    assert_eq!(err.status, StatusCode::BAD_REQUEST);
    assert!(!state.store().has_remote());
}

#[tokio::test]
async fn test_disabled_admin() {
    use std::sync::Arc;
    use taxisite_core::{AuthGate, ConfigStore, MemoryStore};

    let storage = Arc::new(MemoryStore::new());
    let store = Arc::new(ConfigStore::new(storage.clone(), None));
    let state = AppState::new(store, Arc::new(AuthGate::new("", storage)));
    let server = TestServer::new(build_router(state, None)).unwrap();

    server
        .post("/api/admin/login")
        .json(&json!({ "password": "" }))
        .await
        .assert_status(StatusCode::FORBIDDEN);
    let session: Value = server.get("/api/admin/session").await.json();
    assert_eq!(session["login_enabled"], false);
}
