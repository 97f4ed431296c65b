//! Public booking form.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::BookingError;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum TripType {
    #[default]
    #[serde(rename = "One-Way")]
    OneWay,
    #[serde(rename = "Round-Trip")]
    RoundTrip,
}

impl fmt::Display for TripType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::OneWay => write!(f, "One-Way"),
            Self::RoundTrip => write!(f, "Round-Trip"),
        }
    }
}

/// Booking request as submitted by a visitor. Date and time are passed through verbatim.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BookingDetails {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub customer_phone: String,
    #[serde(default)]
    pub vehicle_id: String,
    #[serde(default)]
    pub pickup_location: String,
    #[serde(default)]
    pub drop_location: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub trip_type: TripType,
}

impl BookingDetails {
    /// Every text field is required; reports the first empty one in form order.
    pub fn check_required(&self) -> Result<(), BookingError> {
        let fields = [
            ("customerName", &self.customer_name),
            ("customerPhone", &self.customer_phone),
            ("vehicleId", &self.vehicle_id),
            ("pickupLocation", &self.pickup_location),
            ("dropLocation", &self.drop_location),
            ("date", &self.date),
            ("time", &self.time),
        ];
        match fields.iter().find(|(_, value)| value.trim().is_empty()) {
            Some((field, _)) => Err(BookingError::MissingField { field: (*field).to_string() }),
            None => Ok(()),
        }
    }
}
