//! Tracing subscriber setup.
//!
//! Console output always; a daily-rolling file under the data directory when
//! one is given. `RUST_LOG` overrides the level passed in.

use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use super::paths::get_logs_dir;
use crate::error::AppResult;

const LOG_FILE_PREFIX: &str = "taxisite.log";

/// Install the global subscriber. Keep the returned guard alive for the
/// lifetime of the process or buffered file output is lost.
pub fn init_logger(level: &str, data_dir: Option<&Path>) -> AppResult<Option<WorkerGuard>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let (file_layer, guard) = match data_dir {
        Some(dir) => {
            let appender = tracing_appender::rolling::daily(get_logs_dir(dir)?, LOG_FILE_PREFIX);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_writer(writer).with_ansi(false).with_target(true).boxed();
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let result = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false))
        .with(file_layer)
        .try_init();

    if let Err(e) = result {
        // Already installed (tests, embedding); keep the existing one.
        tracing::debug!("Logger already initialized: {}", e);
    }
    Ok(guard)
}
