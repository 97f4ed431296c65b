//! Admin draft editing, one handler per editor tab action.
//!
//! Every edit lands on the caller's draft only. Nothing reaches the store
//! until `/save` or `/publish`.

use axum::{
    extract::{Multipart, Path, State},
    response::Json,
    Extension,
};
use serde::{Deserialize, Serialize};

use super::error::{ApiError, ApiResult};
use super::session::AdminSession;
use crate::state::AppState;
use taxisite_core::modules::images::image_data_url;
use taxisite_types::models::{FaqPatch, GeneralPatch, ReviewPatch, VehiclePatch};
use taxisite_types::{
    ConfigError, Faq, Hero, Review, SiteConfig, SocialLink, Stat, ValidationReport, Vehicle,
};

type Session = Extension<AdminSession>;

pub async fn get_draft(
    State(state): State<AppState>,
    Extension(AdminSession(token)): Session,
) -> Json<SiteConfig> {
    Json(state.draft(&token))
}

pub async fn replace_draft(
    State(state): State<AppState>,
    Extension(AdminSession(token)): Session,
    Json(config): Json<SiteConfig>,
) -> Json<SiteConfig> {
    state.replace_draft(&token, config.clone());
    Json(config)
}

pub async fn reset_draft(
    State(state): State<AppState>,
    Extension(AdminSession(token)): Session,
) -> Json<SiteConfig> {
    Json(state.reset_draft(&token))
}

pub async fn get_issues(
    State(state): State<AppState>,
    Extension(AdminSession(token)): Session,
) -> Json<ValidationReport> {
    Json(state.draft(&token).validation_report())
}

// ---- hero & general ----

pub async fn put_hero(
    State(state): State<AppState>,
    Extension(AdminSession(token)): Session,
    Json(hero): Json<Hero>,
) -> ApiResult<Hero> {
    state.edit_draft::<_, ConfigError>(&token, |draft| {
        draft.set_hero(hero.clone());
        Ok(())
    })?;
    Ok(Json(hero))
}

pub async fn put_general(
    State(state): State<AppState>,
    Extension(AdminSession(token)): Session,
    Json(patch): Json<GeneralPatch>,
) -> ApiResult<SiteConfig> {
    let draft = state.edit_draft::<_, ConfigError>(&token, |draft| {
        draft.apply_general(patch);
        Ok(draft.clone())
    })?;
    Ok(Json(draft))
}

// ---- stats ----

#[derive(Deserialize)]
pub struct NewStat {
    pub value: String,
    pub label: String,
}

pub async fn add_stat(
    State(state): State<AppState>,
    Extension(AdminSession(token)): Session,
    Json(payload): Json<NewStat>,
) -> ApiResult<Stat> {
    let stat = state.edit_draft::<_, ConfigError>(&token, |draft| {
        Ok(draft.add_stat(payload.value, payload.label).clone())
    })?;
    Ok(Json(stat))
}

pub async fn remove_stat(
    State(state): State<AppState>,
    Extension(AdminSession(token)): Session,
    Path(id): Path<String>,
) -> ApiResult<Stat> {
    Ok(Json(state.edit_draft(&token, |draft| draft.remove_stat(&id))?))
}

// ---- vehicles ----

/// New fleet entry; the id is always assigned server-side.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NewVehicle {
    pub name: String,
    pub icon: String,
    pub base: u32,
    pub km: u32,
    pub hour: u32,
    pub full_day: u32,
    pub capacity: u32,
}

impl Default for NewVehicle {
    fn default() -> Self {
        Self {
            name: "New Vehicle".to_string(),
            icon: "fa-car".to_string(),
            base: 0,
            km: 0,
            hour: 0,
            full_day: 0,
            capacity: 4,
        }
    }
}

pub async fn add_vehicle(
    State(state): State<AppState>,
    Extension(AdminSession(token)): Session,
    Json(payload): Json<NewVehicle>,
) -> ApiResult<Vehicle> {
    let vehicle = Vehicle {
        id: String::new(),
        name: payload.name,
        icon: payload.icon,
        base: payload.base,
        km: payload.km,
        hour: payload.hour,
        full_day: payload.full_day,
        capacity: payload.capacity,
    };
    let added = state
        .edit_draft::<_, ConfigError>(&token, |draft| Ok(draft.add_vehicle(vehicle).clone()))?;
    Ok(Json(added))
}

pub async fn update_vehicle(
    State(state): State<AppState>,
    Extension(AdminSession(token)): Session,
    Path(id): Path<String>,
    Json(patch): Json<VehiclePatch>,
) -> ApiResult<Vehicle> {
    Ok(Json(state.edit_draft(&token, |draft| draft.update_vehicle(&id, patch).cloned())?))
}

pub async fn remove_vehicle(
    State(state): State<AppState>,
    Extension(AdminSession(token)): Session,
    Path(id): Path<String>,
) -> ApiResult<Vehicle> {
    Ok(Json(state.edit_draft(&token, |draft| draft.remove_vehicle(&id))?))
}

// ---- gallery ----

#[derive(Debug, Serialize)]
pub struct GalleryResponse {
    pub changed: usize,
    pub gallery: Vec<String>,
}

/// Multipart upload; every file part becomes an inline `data:` URL.
pub async fn upload_gallery(
    State(state): State<AppState>,
    Extension(AdminSession(token)): Session,
    mut multipart: Multipart,
) -> ApiResult<GalleryResponse> {
    let mut images = Vec::new();
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::bad_request(format!("Invalid upload: {e}")))?
    {
        if field.file_name().is_none() {
            continue;
        }
        let declared = field.content_type().map(str::to_string);
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::bad_request(format!("Invalid upload: {e}")))?;
        images.push(image_data_url(&bytes, declared.as_deref())?);
    }

    if images.is_empty() {
        return Err(ApiError::bad_request("No images uploaded"));
    }
    tracing::info!("🖼️ Adding {} uploaded image(s) to gallery", images.len());
    add_images(&state, &token, images)
}

#[derive(Deserialize)]
pub struct GalleryUrl {
    pub url: String,
}

pub async fn add_gallery_url(
    State(state): State<AppState>,
    Extension(AdminSession(token)): Session,
    Json(payload): Json<GalleryUrl>,
) -> ApiResult<GalleryResponse> {
    let url = payload.url.trim();
    if url.is_empty() {
        return Err(ApiError::bad_request("Image URL is empty"));
    }
    add_images(&state, &token, vec![url.to_string()])
}

fn add_images(state: &AppState, token: &str, images: Vec<String>) -> ApiResult<GalleryResponse> {
    let response = state.edit_draft::<_, ConfigError>(token, |draft| {
        let changed = draft.add_gallery_images(images);
        Ok(GalleryResponse { changed, gallery: draft.gallery.clone() })
    })?;
    Ok(Json(response))
}

pub async fn remove_gallery_image(
    State(state): State<AppState>,
    Extension(AdminSession(token)): Session,
    Path(index): Path<usize>,
) -> ApiResult<GalleryResponse> {
    let response = state.edit_draft(&token, |draft| {
        draft.remove_gallery_image(index)?;
        Ok::<_, ConfigError>(GalleryResponse { changed: 1, gallery: draft.gallery.clone() })
    })?;
    Ok(Json(response))
}

// ---- reviews ----

pub async fn add_review(
    State(state): State<AppState>,
    Extension(AdminSession(token)): Session,
) -> ApiResult<Review> {
    let review =
        state.edit_draft::<_, ConfigError>(&token, |draft| Ok(draft.add_default_review().clone()))?;
    Ok(Json(review))
}

pub async fn update_review(
    State(state): State<AppState>,
    Extension(AdminSession(token)): Session,
    Path(id): Path<String>,
    Json(patch): Json<ReviewPatch>,
) -> ApiResult<Review> {
    Ok(Json(state.edit_draft(&token, |draft| draft.update_review(&id, patch).cloned())?))
}

pub async fn remove_review(
    State(state): State<AppState>,
    Extension(AdminSession(token)): Session,
    Path(id): Path<String>,
) -> ApiResult<Review> {
    Ok(Json(state.edit_draft(&token, |draft| draft.remove_review(&id))?))
}

// ---- faqs ----

#[derive(Deserialize)]
pub struct NewFaq {
    pub question: String,
    pub answer: String,
}

pub async fn add_faq(
    State(state): State<AppState>,
    Extension(AdminSession(token)): Session,
    Json(payload): Json<NewFaq>,
) -> ApiResult<Faq> {
    let faq = state.edit_draft::<_, ConfigError>(&token, |draft| {
        Ok(draft.add_faq(payload.question, payload.answer).clone())
    })?;
    Ok(Json(faq))
}

pub async fn update_faq(
    State(state): State<AppState>,
    Extension(AdminSession(token)): Session,
    Path(id): Path<String>,
    Json(patch): Json<FaqPatch>,
) -> ApiResult<Faq> {
    Ok(Json(state.edit_draft(&token, |draft| draft.update_faq(&id, patch).cloned())?))
}

pub async fn remove_faq(
    State(state): State<AppState>,
    Extension(AdminSession(token)): Session,
    Path(id): Path<String>,
) -> ApiResult<Faq> {
    Ok(Json(state.edit_draft(&token, |draft| draft.remove_faq(&id))?))
}

// ---- social links ----

#[derive(Deserialize)]
pub struct NewSocialLink {
    pub platform: String,
    pub url: String,
}

pub async fn add_social_link(
    State(state): State<AppState>,
    Extension(AdminSession(token)): Session,
    Json(payload): Json<NewSocialLink>,
) -> ApiResult<SocialLink> {
    let link = state.edit_draft::<_, ConfigError>(&token, |draft| {
        Ok(draft.add_social_link(payload.platform, payload.url).clone())
    })?;
    Ok(Json(link))
}

pub async fn remove_social_link(
    State(state): State<AppState>,
    Extension(AdminSession(token)): Session,
    Path(id): Path<String>,
) -> ApiResult<SocialLink> {
    Ok(Json(state.edit_draft(&token, |draft| draft.remove_social_link(&id))?))
}
