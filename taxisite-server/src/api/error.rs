//! Mapping from domain errors to HTTP responses.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use taxisite_core::AppError;
use taxisite_types::{AuthError, BookingError, ConfigError, SyncError};

pub const CLOUD_SYNC_ERROR: &str = "Cloud Sync Error. Check your URL/Key in Cloud Setup.";
pub const CLOUD_NOT_CONFIGURED: &str =
    "Please go to 'Cloud Setup' tab and enter your Supabase URL and Key first.";

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    detail: Option<String>,
}

#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
    pub detail: Option<String>,
}

pub type ApiResult<T> = Result<Json<T>, ApiError>;

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into(), detail: None }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    fn internal(e: impl std::fmt::Display) -> Self {
        tracing::error!("Internal error: {}", e);
        Self::new(StatusCode::INTERNAL_SERVER_ERROR, e.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let body = ErrorBody { error: self.message, detail: self.detail };
        (self.status, Json(body)).into_response()
    }
}

impl From<AuthError> for ApiError {
    fn from(e: AuthError) -> Self {
        match e {
            AuthError::InvalidPassword | AuthError::Unauthenticated => {
                Self::new(StatusCode::UNAUTHORIZED, e.to_string())
            }
            AuthError::Disabled => Self::new(StatusCode::FORBIDDEN, e.to_string()),
            AuthError::Storage { .. } => Self::internal(e),
        }
    }
}

impl From<ConfigError> for ApiError {
    fn from(e: ConfigError) -> Self {
        let status = match e {
            ConfigError::EntryNotFound { .. } | ConfigError::GalleryIndexOutOfRange { .. } => {
                StatusCode::NOT_FOUND
            }
            ConfigError::UnsupportedImage { .. } => StatusCode::UNSUPPORTED_MEDIA_TYPE,
            ConfigError::ParseError { .. } | ConfigError::NotAnObject { .. } => {
                StatusCode::BAD_REQUEST
            }
        };
        Self::new(status, e.to_string())
    }
}

impl From<BookingError> for ApiError {
    fn from(e: BookingError) -> Self {
        let status = match e {
            BookingError::MissingField { .. } => StatusCode::UNPROCESSABLE_ENTITY,
            BookingError::NoPhone | BookingError::InvalidPhone { .. } => {
                StatusCode::SERVICE_UNAVAILABLE
            }
        };
        Self::new(status, e.to_string())
    }
}

impl From<SyncError> for ApiError {
    fn from(e: SyncError) -> Self {
        match e {
            SyncError::NotConfigured => {
                Self::new(StatusCode::PRECONDITION_FAILED, CLOUD_NOT_CONFIGURED)
            }
            SyncError::InvalidUrl { .. } => Self::bad_request(e.to_string()),
            other => Self {
                status: StatusCode::BAD_GATEWAY,
                message: CLOUD_SYNC_ERROR.to_string(),
                detail: Some(other.to_string()),
            },
        }
    }
}

impl From<AppError> for ApiError {
    fn from(e: AppError) -> Self {
        match e {
            AppError::Sync(e) => e.into(),
            AppError::Config(e) => e.into(),
            other => Self::internal(other),
        }
    }
}
