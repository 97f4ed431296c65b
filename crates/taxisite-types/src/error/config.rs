//! Configuration-related errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur while reading, merging or editing the site configuration.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum ConfigError {
    /// Stored or fetched document could not be parsed
    #[error("Config parse error: {message}")]
    ParseError {
        /// Description of the parse failure
        message: String,
    },

    /// Partial document is not a JSON object
    #[error("Config merge rejected: expected a JSON object, got {found}")]
    NotAnObject {
        /// JSON kind that was found instead
        found: String,
    },

    /// Edit targeted an entity that does not exist in the draft
    #[error("No {collection} entry with id {id}")]
    EntryNotFound {
        /// Sequence the edit targeted (vehicles, reviews, ...)
        collection: String,
        /// Id that was looked up
        id: String,
    },

    /// Gallery edit targeted an index past the end
    #[error("Gallery index {index} out of range (len {len})")]
    GalleryIndexOutOfRange {
        /// Requested index
        index: usize,
        /// Current gallery length
        len: usize,
    },

    /// Uploaded file is not a recognized image
    #[error("Unsupported image upload ({mime})")]
    UnsupportedImage {
        /// Declared or sniffed content type
        mime: String,
    },
}

impl ConfigError {
    /// Create a parse error from a serde_json error.
    pub fn from_json_error(e: &serde_json::Error) -> Self {
        Self::ParseError { message: e.to_string() }
    }

    pub fn entry_not_found(collection: &str, id: &str) -> Self {
        Self::EntryNotFound { collection: collection.to_string(), id: id.to_string() }
    }
}
