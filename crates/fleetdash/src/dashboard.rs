//! The query operations the HTTP layer binds to routes.

use crate::{Observed, observe};
use fleetdash_database::{ConfigStore, StoreResult};
use fleetdash_telemetry::{LogBundle, ShardReport, TelemetryKind, TelemetrySource};
use fleetdash_view::{StatusView, guild_lines, shard_lines, user_lines};
use serde::Serialize;
use std::sync::Arc;
use tracing::{error, info, instrument, warn};

/// Reachability of the two data sources.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HealthReport {
    /// The configuration database answered a ping
    pub store: bool,
    /// The bot-control API returned a decodable stats payload
    pub telemetry: bool,
}

impl HealthReport {
    /// True when both sources are reachable.
    pub fn is_healthy(&self) -> bool {
        self.store && self.telemetry
    }
}

/// Read-only dashboard over a telemetry source and a configuration store.
///
/// Cloning is cheap and clones share the same client and pool. Calls hold no state
/// between them, so any number may run concurrently.
pub struct Dashboard<T, S> {
    telemetry: Arc<T>,
    store: Arc<S>,
}

impl<T, S> Clone for Dashboard<T, S> {
    fn clone(&self) -> Self {
        Self {
            telemetry: Arc::clone(&self.telemetry),
            store: Arc::clone(&self.store),
        }
    }
}

impl<T, S> Dashboard<T, S>
where
    T: TelemetrySource,
    S: ConfigStore,
{
    /// Create a dashboard over the given sources.
    pub fn new(telemetry: T, store: S) -> Self {
        Self {
            telemetry: Arc::new(telemetry),
            store: Arc::new(store),
        }
    }

    /// The status page. Shows placeholder values when telemetry is unavailable.
    #[instrument(skip(self))]
    pub async fn get_status_view(&self) -> StatusView {
        let observed = observe(TelemetryKind::Stats, self.telemetry.stats().await);
        StatusView::new(&observed.value, observed.mode)
    }

    /// Recent logs with their mode.
    #[instrument(skip(self))]
    pub async fn get_logs(&self) -> Observed<LogBundle> {
        observe(TelemetryKind::Logs, self.telemetry.logs().await)
    }

    /// Recent logs, verbatim. Empty when telemetry is unavailable.
    pub async fn get_logs_text(&self) -> String {
        self.get_logs().await.value.text
    }

    /// Shard health with its mode.
    #[instrument(skip(self))]
    pub async fn get_shards(&self) -> Observed<ShardReport> {
        observe(TelemetryKind::Shards, self.telemetry.shards().await)
    }

    /// One line per shard. Empty when telemetry is unavailable.
    pub async fn get_shards_text(&self) -> String {
        shard_lines(&self.get_shards().await.value.shards)
    }

    /// One line per guild, including removed guilds.
    ///
    /// # Errors
    ///
    /// Returns the store error unchanged; there is no placeholder for configuration.
    #[instrument(skip(self))]
    pub async fn list_guilds_text(&self) -> StoreResult<String> {
        let guilds = self
            .store
            .list_all_guilds_including_removed()
            .await
            .inspect_err(|e| error!(error = %e, "Failed to list guilds"))?;

        Ok(guild_lines(&guilds))
    }

    /// One line per user, including removed users.
    ///
    /// # Errors
    ///
    /// Returns the store error unchanged; there is no placeholder for configuration.
    #[instrument(skip(self))]
    pub async fn list_users_text(&self) -> StoreResult<String> {
        let users = self
            .store
            .list_all_users_including_removed()
            .await
            .inspect_err(|e| error!(error = %e, "Failed to list users"))?;

        Ok(user_lines(&users))
    }

    /// Check both data sources. Never fails; an unreachable source reports `false`.
    #[instrument(skip(self))]
    pub async fn health(&self) -> HealthReport {
        let (store, telemetry) = tokio::join!(self.store.ping(), self.telemetry.stats());

        if let Err(e) = &store {
            warn!(error = %e, "Store health check failed");
        }
        if let Err(e) = &telemetry {
            warn!(error = %e, "Telemetry health check failed");
        }

        let report = HealthReport {
            store: store.is_ok(),
            telemetry: telemetry.is_ok(),
        };
        info!(store = report.store, telemetry = report.telemetry, "Health checked");
        report
    }
}
