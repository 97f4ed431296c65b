//! Admin authentication errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum AuthError {
    /// Submitted secret did not match exactly
    #[error("Invalid password")]
    InvalidPassword,

    /// No admin secret configured, admin login is disabled
    #[error("Admin access is disabled: no admin secret configured")]
    Disabled,

    /// Bearer token missing or not a live session
    #[error("Not logged in")]
    Unauthenticated,

    /// Session set could not be persisted
    #[error("Session storage error: {message}")]
    Storage {
        /// Description of the storage failure
        message: String,
    },
}
