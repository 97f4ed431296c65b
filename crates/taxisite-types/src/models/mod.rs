//! Core domain models for Taxisite.
//!
//! The site configuration document is the single root entity; booking requests and
//! cloud settings are the only other values that cross the API boundary.

mod booking;
mod cloud;
mod site;

pub use booking::{BookingDetails, TripType};
pub use cloud::CloudSettings;
pub use site::{
    current_timestamp_ms, next_entity_id, Faq, FaqPatch, GeneralPatch, Hero, Identified,
    MergeOutcome, Review, ReviewPatch, SiteConfig, SocialLink, Stat, ValidationIssue, ValidationReport, Vehicle,
    VehiclePatch,
};
