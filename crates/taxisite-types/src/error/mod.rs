//! Typed error definitions for Taxisite.
//!
//! Every domain gets its own enum. All errors are serializable so the server
//! can hand them to clients verbatim.

mod auth;
mod booking;
mod config;
mod sync;

pub use auth::AuthError;
pub use booking::BookingError;
pub use config::ConfigError;
pub use sync::SyncError;
