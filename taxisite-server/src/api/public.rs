//! Public, read-only site handlers

use axum::{extract::State, response::Json};

use super::error::ApiResult;
use crate::state::AppState;
use taxisite_core::booking::{self, BookingLink, ContactLinks};
use taxisite_types::{BookingDetails, SiteConfig};

pub async fn get_site(State(state): State<AppState>) -> Json<SiteConfig> {
    Json(state.store().get())
}

pub async fn get_gallery(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.store().get().gallery)
}

pub async fn get_contact(State(state): State<AppState>) -> Json<ContactLinks> {
    Json(booking::contact_links(&state.store().get()))
}

pub async fn create_booking_link(
    State(state): State<AppState>,
    Json(details): Json<BookingDetails>,
) -> ApiResult<BookingLink> {
    let link = booking::booking_link(&state.store().get(), &details)?;
    Ok(Json(link))
}
