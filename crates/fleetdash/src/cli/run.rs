//! Command execution.

use crate::cli::Commands;
use fleetdash::{Dashboard, FleetdashResult};
use fleetdash_database::ConfigStore;
use fleetdash_telemetry::TelemetrySource;
use std::process::ExitCode;
use tracing::instrument;

/// Run one command against the dashboard and print its output to stdout.
#[instrument(skip(dashboard))]
pub async fn run_command<T, S>(
    dashboard: &Dashboard<T, S>,
    command: Commands,
) -> FleetdashResult<ExitCode>
where
    T: TelemetrySource,
    S: ConfigStore,
{
    match command {
        Commands::Status { json } => {
            let view = dashboard.get_status_view().await;
            if json {
                match serde_json::to_string_pretty(&view) {
                    Ok(text) => println!("{}", text),
                    Err(e) => {
                        tracing::error!(error = %e, "Failed to serialize status view");
                        return Ok(ExitCode::FAILURE);
                    }
                }
            } else {
                if view.is_degraded() {
                    println!("(bot API unreachable, showing placeholders)");
                }
                println!("Ready:    {}", view.ready());
                println!("Guilds:   {}", view.guilds());
                println!("Users:    {}", view.users());
                println!("Channels: {}", view.channels());
                println!("Shards:   {}", view.shards());
                println!("Cogs:     {}", view.cogs());
                println!("Uptime:   {}", view.uptime());
                println!("Latency:  {}", view.latency());
            }
        }

        Commands::Logs => print_listing(&dashboard.get_logs_text().await),

        Commands::Shards => print_listing(&dashboard.get_shards_text().await),

        Commands::Guilds => print_listing(&dashboard.list_guilds_text().await?),

        Commands::Users => print_listing(&dashboard.list_users_text().await?),

        Commands::Health => {
            let report = dashboard.health().await;
            println!("store:     {}", status_word(report.store));
            println!("telemetry: {}", status_word(report.telemetry));
            if !report.is_healthy() {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn print_listing(text: &str) {
    if text.is_empty() {
        return;
    }
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }
}

fn status_word(ok: bool) -> &'static str {
    if ok { "ok" } else { "unreachable" }
}
