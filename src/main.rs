//! Sales Overview Dashboard Server
//!
//! Run with: cargo run --bin sales-overview
//!
//! # Configuration
//!
//! Settings come from the first config file found (see
//! `Config::load_default`), then these environment variables:
//! - `SALES_API_HOST`: Host to bind to (default: 0.0.0.0)
//! - `SALES_API_PORT`: Port to listen on (default: 8501)
//! - `SALES_SEED`: Seed for the synthetic dataset (default: 42)
//! - `SALES_LOG_LEVEL`: Log level (default: info)
//! - `SALES_LOG_FORMAT`: `pretty` or `json` (default: pretty)
//! - `RUST_LOG`: Full filter directive, overrides the log level

use sales_overview::api::{serve, AppState};
use sales_overview::config::Config;
use sales_overview::logging::init_tracing;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (config, source) = Config::load_default()?;
    init_tracing(&config.logging);

    tracing::info!("Starting Sales Overview Dashboard v{}", env!("CARGO_PKG_VERSION"));
    match source {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::info!("Using default config with environment overrides"),
    }

    let params = config.dataset.to_params();
    tracing::info!(
        seed = params.seed,
        periods = params.periods,
        "Generating sales dataset"
    );

    let state = AppState::generate(&params, config.api.clone())?;
    tracing::info!("Dataset ready: {} rows", state.dataset.len());

    serve(state, &config.api).await?;

    tracing::info!("Sales Overview Dashboard stopped");
    Ok(())
}
