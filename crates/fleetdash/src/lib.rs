//! Read-only status dashboard for an operated Discord bot.
//!
//! fleetdash pulls live telemetry from the bot's control API, reads guild and user
//! configuration from the bot's database, and turns both into stable view models and
//! plain-text listings for a rendering layer.
//!
//! Telemetry failures never fail a view: the [`observe`] policy logs them and swaps in
//! placeholder values. Database failures are returned to the caller.
//!
//! # Example
//!
//! ```rust,no_run
//! use fleetdash::{Dashboard, DashboardConfig};
//! use fleetdash_database::{PostgresConfigStore, lazy_pool};
//! use fleetdash_telemetry::TelemetryClient;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = DashboardConfig::load(None)?;
//! let telemetry = TelemetryClient::new(&config.bot_api)?;
//! let store = PostgresConfigStore::new(lazy_pool(&config.database)?);
//!
//! let dashboard = Dashboard::new(telemetry, store);
//! let status = dashboard.get_status_view().await;
//! println!("ready: {}, uptime: {}", status.ready(), status.uptime());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod dashboard;
mod degraded;
pub mod observability;

pub use config::{DashboardConfig, LoggingConfig};
pub use dashboard::{Dashboard, HealthReport};
pub use degraded::{Observed, observe};

pub use fleetdash_error::{FleetdashError, FleetdashErrorKind, FleetdashResult};
pub use fleetdash_view::{StatusView, TelemetryMode};
