//! Taxisite Server
//!
//! A pure Rust HTTP server that:
//! - Serves the site configuration and booking links on /api/*
//! - Hosts the admin editor API on /api/admin/*
//! - Serves the built site frontend as static files
//!
//! The same binary doubles as the operator CLI (`site`, `cloud`, `pull`, `publish`).

use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use tracing::info;

mod api;
mod cli;
mod commands;
mod router;
mod server_utils;
mod state;
#[cfg(test)]
mod test_helpers;

use cli::{Cli, Commands, ServeArgs};
use state::AppState;
use taxisite_core::modules::{logger, paths};
use taxisite_core::{AuthGate, ConfigStore, KeyValueStore};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let data_dir = paths::get_data_dir(cli.global.data_dir.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to get data directory: {}", e))?;

    // Only the long-running server writes log files.
    let serving = matches!(cli.command, None | Some(Commands::Serve));
    let _log_guard = logger::init_logger(&cli.global.log_level, serving.then_some(data_dir.as_path()))?;

    let (store, storage) = commands::open_store(&data_dir, &cli.global)?;

    match cli.command {
        None | Some(Commands::Serve) => serve(cli.serve, store, storage).await,
        Some(Commands::Site(cmd)) => commands::handle_site_command(cmd, &store).await,
        Some(Commands::Cloud(cmd)) => commands::handle_cloud_command(cmd, &store),
        Some(Commands::Pull) => commands::handle_pull(&store).await,
        Some(Commands::Publish) => commands::handle_publish(&store).await,
    }
}

async fn serve(args: ServeArgs, store: Arc<ConfigStore>, storage: Arc<dyn KeyValueStore>) -> Result<()> {
    info!("🚀 Taxisite Server starting on {}:{}...", args.bind, args.port);

    // Remote overlay in the background: the cached site is served immediately.
    let refresh_store = store.clone();
    tokio::spawn(async move {
        refresh_store.refresh_from_remote().await;
    });

    let auth = Arc::new(AuthGate::new(args.admin_secret, storage));
    let state = AppState::new(store, auth);
    info!("✅ Application state initialized");

    let app = router::build_router(state, args.static_dir.as_deref());
    let listener = server_utils::create_listener(args.bind, args.port).await?;

    info!("🌐 Server listening on http://{}:{}", args.bind, args.port);
    info!("🔌 API available at http://{}:{}/api/", args.bind, args.port);

    axum::serve(listener, app).with_graceful_shutdown(server_utils::shutdown_signal()).await?;

    info!("👋 Server stopped");
    Ok(())
}
