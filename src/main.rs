//! SSO Gateway Server — credential verification and session issuance.
//!
//! Main entry point that wires all crates together and starts the server.

use std::sync::Arc;

use tracing_subscriber::{EnvFilter, fmt};

use gateway_core::config::AppConfig;
use gateway_core::AppError;

#[tokio::main]
async fn main() {
    let env = std::env::var("GATEWAY_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);

    if let Err(e) = run(config).await {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging.
fn init_logging(config: &AppConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.logging.level));

    match config.logging.format.as_str() {
        "json" => {
            fmt()
                .json()
                .with_env_filter(filter)
                .with_target(true)
                .with_thread_ids(true)
                .init();
        }
        _ => {
            fmt()
                .pretty()
                .with_env_filter(filter)
                .with_target(true)
                .init();
        }
    }
}

/// Main server run function.
async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting SSO Gateway v{}", env!("CARGO_PKG_VERSION"));

    // ── Step 1: Database connection + migrations ─────────────────
    let pool = gateway_database::DatabasePool::connect(&config.database).await?;
    gateway_database::migration::run_migrations(pool.pool()).await?;

    // ── Step 2: Build state and serve ────────────────────────────
    gateway_api::serve(Arc::new(config), pool.pool().clone()).await?;

    pool.close().await;
    tracing::info!("SSO Gateway shut down gracefully");
    Ok(())
}
