//! Remote store (PostgREST) sync errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors from fetching or publishing the remote site document.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum SyncError {
    /// Cloud URL or key missing
    #[error("Cloud sync is not configured: enter the backend URL and key in Cloud Setup first")]
    NotConfigured,

    /// Backend URL is not an absolute http(s) URL
    #[error("Invalid cloud URL {url:?}: {reason}")]
    InvalidUrl {
        /// URL as entered
        url: String,
        /// Why it was rejected
        reason: String,
    },

    /// Transport-level failure (DNS, connect, TLS, reset)
    #[error("Network error: {message}")]
    Network {
        /// Description of the transport failure
        message: String,
    },

    /// Remote answered with a non-success status
    #[error("Remote store returned HTTP {status}: {body}")]
    HttpStatus {
        /// HTTP status code
        status: u16,
        /// Response body (may be empty)
        body: String,
    },

    /// Remote answered 2xx but the body was not the expected shape
    #[error("Malformed remote document: {message}")]
    Malformed {
        /// Description of the decoding failure
        message: String,
    },

    /// Remote answered with zero rows for the document key
    #[error("Remote store has no site document")]
    Empty,
}

impl SyncError {
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network { message: message.into() }
    }

    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed { message: message.into() }
    }
}
