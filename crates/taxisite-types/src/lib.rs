//! # Taxisite Types
//!
//! Core types, models, and error definitions for the Taxisite workspace.
//!
//! - **`error`** - Typed error hierarchy for configuration, sync, auth and booking
//! - **`models`** - The site configuration document, booking requests, cloud settings
//!
//! ## Architecture Role
//!
//! `taxisite-types` sits at the bottom of the dependency graph:
//!
//! ```text
//!         taxisite-types (this crate)
//!                 │
//!                 ▼
//!          taxisite-core
//!                 │
//!                 ▼
//!         taxisite-server
//! ```
//!
//! All types are designed to be:
//! - **Serializable** via serde (the JSON shape is the remote document's `data` column)
//! - **Clone** for cheap sharing across async boundaries
//! - **PartialEq** for testing and comparison

pub mod error;
pub mod models;

pub use error::{AuthError, BookingError, ConfigError, SyncError};

pub use models::{
    BookingDetails, CloudSettings, Faq, Hero, Review, SiteConfig, SocialLink, Stat, TripType,
    ValidationIssue, ValidationReport, Vehicle,
};
