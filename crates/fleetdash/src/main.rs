//! fleetdash CLI binary.
//!
//! Prints the same views the web dashboard renders:
//! - Bot status, logs and shard health from the bot-control API
//! - Guild and user configuration from the bot's database
//! - A reachability check for both

use clap::Parser;
use fleetdash::{Dashboard, DashboardConfig, observability};
use fleetdash_database::{PostgresConfigStore, lazy_pool};
use fleetdash_telemetry::TelemetryClient;
use std::process::ExitCode;

mod cli;

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    use cli::{Cli, run_command};

    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    // Parse command-line arguments
    let cli = Cli::parse();

    let config = DashboardConfig::load(cli.config.as_deref())?;

    // Initialize tracing
    let obs = observability::ObservabilityConfig::from_logging(
        env!("CARGO_PKG_NAME"),
        &config.logging,
    )
    .with_verbose(cli.verbose);
    observability::init_observability_with_config(obs)?;

    let telemetry = TelemetryClient::new(&config.bot_api)?;
    let store = PostgresConfigStore::new(lazy_pool(&config.database)?);
    let dashboard = Dashboard::new(telemetry, store);

    let code = run_command(&dashboard, cli.command).await?;
    Ok(code)
}
