//! Admin login and the bearer-token guard for the rest of `/api/admin`.

use axum::{
    extract::{Request, State},
    http::{header, HeaderMap},
    middleware::Next,
    response::{Json, Response},
    Extension,
};
use serde::{Deserialize, Serialize};

use super::error::{ApiError, ApiResult};
use crate::state::AppState;
use taxisite_core::AuthState;

/// Token of the authenticated admin session, set by [`require_session`].
#[derive(Debug, Clone)]
pub struct AdminSession(pub String);

pub(crate) fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

pub async fn require_session(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let token = bearer_token(request.headers()).map(str::to_string);
    if let Err(e) = state.auth().authorize(token.as_deref()) {
        tracing::debug!("Rejected admin request to {}", request.uri().path());
        return Err(e.into());
    }
    if let Some(token) = token {
        request.extensions_mut().insert(AdminSession(token));
    }
    Ok(next.run(request).await)
}

#[derive(Deserialize)]
pub struct LoginRequest {
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

pub async fn login(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> ApiResult<LoginResponse> {
    let token = state.auth().login(&payload.password)?;
    Ok(Json(LoginResponse { token: token.as_str().to_string() }))
}

#[derive(Debug, Serialize)]
pub struct LogoutResponse {
    pub logged_out: bool,
}

pub async fn logout(
    State(state): State<AppState>,
    Extension(AdminSession(token)): Extension<AdminSession>,
) -> ApiResult<LogoutResponse> {
    let logged_out = state.auth().logout(&token)?;
    state.drop_draft(&token);
    Ok(Json(LogoutResponse { logged_out }))
}

#[derive(Debug, Serialize)]
pub struct SessionResponse {
    pub state: AuthState,
    pub login_enabled: bool,
}

pub async fn get_session(State(state): State<AppState>, headers: HeaderMap) -> Json<SessionResponse> {
    Json(SessionResponse {
        state: state.auth().state(bearer_token(&headers)),
        login_enabled: state.auth().is_enabled(),
    })
}
