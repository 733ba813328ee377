//! Strata server - main entry point
//!
//! Usage:
//!     strata-server --port 3000
//!     strata-server --address 127.0.0.1:8080 --database strata.db

use clap::Parser;
use strata_server::{app, logging, AppState, Args};
use strata_sqlite::SqliteStore;
use tokio::signal;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init_with_filter(&args.log_level);

    info!("Initializing Strata server");
    info!("  Version: {}", env!("CARGO_PKG_VERSION"));

    let addr = args.bind_addr()?;

    let state = match &args.database {
        Some(path) => AppState::new(SqliteStore::open(path)?),
        None => {
            info!("No database configured, strings are kept in memory");
            AppState::in_memory()
        }
    };

    let stats = state.store().stats()?;
    info!(
        "  Loaded {} strings ({} palindromes)",
        stats.total_records, stats.palindromes
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    info!("Starting Strata server on {}", addr);

    axum::serve(listener, app(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shutdown complete");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                error!("failed to install signal handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down");
        }
        _ = terminate => {
            info!("Received terminate signal, shutting down");
        }
    }
}
