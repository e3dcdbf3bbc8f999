//! cargrader-lu (Lookup) - vehicle grade lookup service
//!
//! Serves the year → make → model → grade filter chain over a read-only,
//! externally produced SQLite database.

use std::path::PathBuf;

use anyhow::{Context, Result};
use cargrader_common::config::{find_config_file, resolve_db_path, DB_PATH_ENV};
use cargrader_lu::{build_router, AppState, ReadOnlySource};
use clap::Parser;
use tokio::signal;
use tracing::{info, warn};

/// Command-line arguments for cargrader-lu
#[derive(Parser, Debug)]
#[command(name = "cargrader-lu")]
#[command(about = "Vehicle grade lookup service")]
#[command(version)]
struct Args {
    /// Path to the vehicle database (overrides DB_PATH and config.toml)
    #[arg(long)]
    db_path: Option<PathBuf>,

    /// Address to bind
    #[arg(long, default_value = "0.0.0.0", env = "CARGRADER_HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value = "5000", env = "CARGRADER_PORT")]
    port: u16,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    // Build identification before anything that can stall
    info!(
        "Starting CarGrader Lookup (cargrader-lu) v{} [{}] built {} ({})",
        env!("CARGO_PKG_VERSION"),
        env!("GIT_HASH"),
        env!("BUILD_TIMESTAMP"),
        env!("BUILD_PROFILE")
    );

    let args = Args::parse();

    let config_file = find_config_file().ok();
    if let Some(path) = &config_file {
        info!("Config file: {}", path.display());
    }

    let db_path = resolve_db_path(args.db_path.as_deref(), DB_PATH_ENV, config_file.as_deref());
    info!("Database path: {}", db_path.display());
    if !db_path.exists() {
        // Requests will fail with 500 until the file appears; /api/health shows why.
        warn!("Database not found: {}", db_path.display());
    }

    let state = AppState::new(ReadOnlySource::new(db_path));
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind((args.host.as_str(), args.port))
        .await
        .with_context(|| format!("Failed to bind to {}:{}", args.host, args.port))?;
    let addr = listener.local_addr().context("Failed to read listen address")?;
    info!("cargrader-lu listening on http://{}", addr);
    info!("Health check: http://{}/api/health", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

/// Graceful shutdown signal handler
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        },
        _ = terminate => {
            info!("Received SIGTERM, shutting down");
        },
    }
}
