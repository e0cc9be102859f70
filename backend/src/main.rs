//! gox - user directory HTTP service.

use std::env;
use std::sync::Arc;

use tokio::net::TcpListener;

use gox_backend::{app, logging, AppState, Config};

const VERSION: &str = env!("CARGO_PKG_VERSION");

fn print_version() {
    println!("gox {}", VERSION);
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Handle --version / -V
    let args: Vec<String> = env::args().collect();
    if args.iter().any(|a| a == "--version" || a == "-V") {
        print_version();
        return Ok(());
    }

    // Load configuration
    let config = Config::load().map_err(|e| {
        format!(
            "Failed to load configuration: {}. \
             Check config.toml and any ADDR / GOX__* environment variables.",
            e
        )
    })?;

    // Initialize tracing
    logging::init(&config.logging.level);

    tracing::info!("Starting gox {}", VERSION);

    let addr = config.listen_addr();
    let state = Arc::new(AppState::in_memory(config));
    let app = app(state);

    // Start server
    let listener = match TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to start server on {}: {}", addr, e);
            return Err(e.into());
        }
    };
    tracing::info!("Server is running on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for Ctrl+C: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Received Ctrl+C, shutting down");
}
