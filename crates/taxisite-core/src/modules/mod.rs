//! Process-level helpers: data directory, logging, image uploads.

pub mod images;
pub mod logger;
pub mod paths;
