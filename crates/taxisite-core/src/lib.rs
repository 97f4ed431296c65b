//! # Taxisite Core
//!
//! Persistence, sync and access control for the site configuration.
//!
//! ```text
//! taxisite-core/src/
//! ├── storage/    # KeyValueStore trait: file-backed + in-memory
//! ├── remote/     # RemoteStore trait: PostgREST client
//! ├── store/      # ConfigStore: get/set/subscribe, load, save, publish
//! ├── auth.rs     # AuthGate: shared secret -> session tokens
//! ├── booking.rs  # Booking message + WhatsApp/tel/mailto links
//! └── modules/    # data dir paths, logger setup, image data URLs
//! ```

#![cfg_attr(test, allow(clippy::panic, clippy::unwrap_used, clippy::indexing_slicing))]

pub mod auth;
pub mod booking;
pub mod error;
pub mod modules;
pub mod remote;
pub mod storage;
pub mod store;

pub use auth::{AuthGate, AuthState, SessionToken};
pub use error::{AppError, AppResult};
pub use remote::{PostgrestRemote, RemoteStore};
pub use storage::{FileStore, KeyValueStore, MemoryStore};
pub use store::{ConfigStore, PublishOutcome};
