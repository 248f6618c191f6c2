//! TaskHub Server
//!
//! Loads configuration, connects the stores, and serves the HTTP API.

use tracing_subscriber::{EnvFilter, fmt};

use taskhub_core::config::AppConfig;
use taskhub_core::error::AppError;
use taskhub_database::store::Stores;

#[tokio::main]
async fn main() {
    let env = std::env::var("TASKHUB_ENV").unwrap_or_else(|_| "development".to_string());

    let config = match AppConfig::load(&env) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            std::process::exit(1);
        }
    };

    init_logging(&config);
    tracing::info!(env = %env, "Configuration loaded");

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server error");
        std::process::exit(1);
    }
}

/// Initialize tracing/logging
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

async fn run(config: AppConfig) -> Result<(), AppError> {
    tracing::info!("Starting TaskHub v{}", env!("CARGO_PKG_VERSION"));

    if config.uses_placeholder_secret() {
        tracing::warn!("auth.jwt_secret is the shipped placeholder; set TASKHUB__AUTH__JWT_SECRET");
    }

    let stores = Stores::connect(&config.database).await?;
    taskhub_api::run_server(config, stores).await
}
