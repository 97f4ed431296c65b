//! Site configuration document.
//!
//! One logical instance exists per deployment. It is created from the built-in
//! defaults, replaced wholesale by the admin surface and never deleted.
//!
//! # Merge rules
//!
//! A partial document (local cache, remote copy) is merged over a base:
//! - top-level keys present in the partial replace the base value
//! - nested objects (`hero`) are spread one level deep
//! - arrays are replaced wholesale, never merged element-wise
//! - unknown keys are ignored, missing keys keep the base value
//! - a key whose value does not fit its field is skipped, siblings still apply

mod defaults;
mod edit;
mod merge;
mod validation;

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests;
#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests_edit;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

pub use edit::{next_entity_id, FaqPatch, GeneralPatch, Identified, ReviewPatch, VehiclePatch};
pub use merge::MergeOutcome;
pub use validation::{ValidationIssue, ValidationReport};

/// Front page hero block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Hero {
    pub title: String,
    pub subtitle: String,
    pub image_url: String,
}

/// Headline figure shown under the hero ("5000+ Happy Clients").
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stat {
    pub id: String,
    pub value: String,
    pub label: String,
}

/// Fleet entry with its fare card. Amounts are whole currency units.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: String,
    pub name: String,
    /// Symbolic icon name (e.g. `fa-car`)
    pub icon: String,
    /// Base fare
    #[serde(deserialize_with = "null_as_zero")]
    pub base: u32,
    /// Per extra kilometre
    #[serde(deserialize_with = "null_as_zero")]
    pub km: u32,
    /// Per extra hour
    #[serde(deserialize_with = "null_as_zero")]
    pub hour: u32,
    /// Full day hire
    #[serde(deserialize_with = "null_as_zero")]
    pub full_day: u32,
    /// Seats
    #[serde(deserialize_with = "null_as_zero")]
    pub capacity: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SocialLink {
    pub id: String,
    pub platform: String,
    pub url: String,
}

/// Customer review. `rating` is expected in 1..=5 but accepted as-is.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct Review {
    pub id: String,
    pub name: String,
    #[validate(range(min = 1, max = 5, message = "rating should be between 1 and 5"))]
    #[serde(deserialize_with = "null_as_zero")]
    pub rating: i32,
    pub comment: String,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
}

/// Cleared number inputs are published as `null`; read them as zero.
fn null_as_zero<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Full site configuration, identical in shape to the remote document's `data` column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    pub hero: Hero,
    pub stats: Vec<Stat>,
    /// First entry is the primary number used for call/WhatsApp links
    #[validate(length(min = 1, message = "at least one phone number is needed for contact links"))]
    pub phones: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub secondary_phone: Option<String>,
    /// First entry is the primary address used for mailto links
    #[validate(length(min = 1, message = "at least one email is needed for contact links"))]
    pub emails: Vec<String>,
    pub address: String,
    pub vehicles: Vec<Vehicle>,
    /// Image URLs or embedded `data:` URLs
    pub gallery: Vec<String>,
    pub social_links: Vec<SocialLink>,
    pub service_areas: Vec<String>,
    #[validate(nested)]
    pub reviews: Vec<Review>,
    pub faqs: Vec<Faq>,
}

impl SiteConfig {
    pub fn primary_phone(&self) -> Option<&str> {
        self.phones.first().map(String::as_str)
    }

    pub fn primary_email(&self) -> Option<&str> {
        self.emails.first().map(String::as_str)
    }

    pub fn vehicle(&self, id: &str) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }
}

#[allow(
    clippy::expect_used,
    reason = "System clock before UNIX epoch = fundamentally broken system"
)]
pub fn current_timestamp_ms() -> i64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system clock before UNIX epoch")
        .as_millis() as i64
}
