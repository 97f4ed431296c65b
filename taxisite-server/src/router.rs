use axum::{
    extract::DefaultBodyLimit, http::StatusCode, response::IntoResponse, routing::get, Router,
};
use std::path::Path;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::api;
use crate::state::AppState;

/// Gallery uploads arrive inline, so allow a few photos per request.
const MAX_BODY_BYTES: usize = 25 * 1024 * 1024;

pub fn build_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let api_routes = Router::<AppState>::new()
        .nest("/api", api::router(state.clone()))
        .route("/health", get(health_check))
        .route("/healthz", get(health_check))
        .route("/version", get(version_info))
        .with_state(state);

    // SPA fallback: unknown paths serve index.html so client-side routes resolve.
    let app = match static_dir {
        Some(dir) => {
            let spa_service = ServeDir::new(dir)
                .append_index_html_on_directories(true)
                .fallback(ServeFile::new(dir.join("index.html")));
            api_routes.fallback_service(spa_service)
        }
        None => api_routes,
    };

    app.layer(
        ServiceBuilder::new()
            .layer(TraceLayer::new_for_http())
            .layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
            .layer(DefaultBodyLimit::max(MAX_BODY_BYTES)),
    )
}

async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, axum::Json(serde_json::json!({"status": "ok"})))
}

async fn version_info() -> impl IntoResponse {
    (
        StatusCode::OK,
        axum::Json(serde_json::json!({
            "version": option_env!("GIT_VERSION").unwrap_or("dev"),
            "build_time": option_env!("BUILD_TIME").unwrap_or("unknown"),
            "cargo_version": env!("CARGO_PKG_VERSION"),
        })),
    )
}
