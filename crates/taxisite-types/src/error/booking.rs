//! Booking form errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum BookingError {
    /// A required form field was empty
    #[error("Missing required booking field: {field}")]
    MissingField {
        /// camelCase name of the empty field
        field: String,
    },

    /// Site has no phone number to send the request to
    #[error("No contact phone configured")]
    NoPhone,

    /// Primary phone contains no digits
    #[error("Primary phone {phone:?} contains no digits")]
    InvalidPhone {
        /// Phone as configured
        phone: String,
    },
}
