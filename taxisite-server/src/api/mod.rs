//! API Routes
//!
//! Public site endpoints plus the `/admin` editor API.

mod admin;
mod draft;
mod error;
mod public;
mod session;

#[cfg(test)]
mod admin_tests;

use axum::{
    http::StatusCode,
    middleware,
    response::{IntoResponse, Json},
    routing::{delete, get, post, put},
    Router,
};

use crate::state::AppState;

pub fn router(state: AppState) -> Router<AppState> {
    Router::new()
        // Public site
        .route("/site", get(public::get_site))
        .route("/site/gallery", get(public::get_gallery))
        .route("/site/contact", get(public::get_contact))
        .route("/booking/link", post(public::create_booking_link))
        // Admin editor
        .nest("/admin", admin_router(state))
        // API fallback: return 404 for unknown API endpoints
        .fallback(api_not_found)
}

fn admin_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/logout", post(session::logout))
        // Draft
        .route("/draft", get(draft::get_draft).put(draft::replace_draft))
        .route("/draft/reset", post(draft::reset_draft))
        .route("/draft/issues", get(draft::get_issues))
        .route("/draft/hero", put(draft::put_hero))
        .route("/draft/general", put(draft::put_general))
        .route("/draft/stats", post(draft::add_stat))
        .route("/draft/stats/:id", delete(draft::remove_stat))
        .route("/draft/vehicles", post(draft::add_vehicle))
        .route(
            "/draft/vehicles/:id",
            put(draft::update_vehicle).delete(draft::remove_vehicle),
        )
        .route("/draft/gallery", post(draft::upload_gallery))
        .route("/draft/gallery/url", post(draft::add_gallery_url))
        .route("/draft/gallery/:index", delete(draft::remove_gallery_image))
        .route("/draft/reviews", post(draft::add_review))
        .route(
            "/draft/reviews/:id",
            put(draft::update_review).delete(draft::remove_review),
        )
        .route("/draft/faqs", post(draft::add_faq))
        .route("/draft/faqs/:id", put(draft::update_faq).delete(draft::remove_faq))
        .route("/draft/social-links", post(draft::add_social_link))
        .route("/draft/social-links/:id", delete(draft::remove_social_link))
        // Save / publish
        .route("/save", post(admin::save_draft))
        .route("/publish", post(admin::publish_draft))
        // Cloud setup
        .route("/cloud", get(admin::get_cloud).put(admin::put_cloud))
        .route("/status", get(admin::get_status))
        // Everything above needs a live session
        .route_layer(middleware::from_fn_with_state(state, session::require_session))
        .route("/login", post(session::login))
        .route("/session", get(session::get_session))
}

async fn api_not_found() -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Json(serde_json::json!({"error": "Not found"})))
}
