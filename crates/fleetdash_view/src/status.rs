//! The status page view model.

use crate::{format_duration, format_latency, uptime_seconds};
use derive_getters::Getters;
use fleetdash_telemetry::TelemetrySnapshot;
use serde::Serialize;

/// Whether a view was built from live telemetry or from the placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, derive_more::Display)]
#[serde(rename_all = "lowercase")]
pub enum TelemetryMode {
    /// The remote call and the decode both succeeded
    #[display("live")]
    Live,
    /// Either step failed and placeholder values are shown
    #[display("degraded")]
    Degraded,
}

/// Everything the status page renders, already formatted where formatting is stable.
///
/// # Examples
///
/// ```
/// use fleetdash_telemetry::TelemetrySnapshot;
/// use fleetdash_view::{StatusView, TelemetryMode};
///
/// let snapshot = TelemetrySnapshot {
///     ready: true,
///     uptime_seconds: 3661.2,
///     latency_seconds: 0.123456789,
///     ..TelemetrySnapshot::default()
/// };
/// let view = StatusView::new(&snapshot, TelemetryMode::Live);
///
/// assert_eq!(view.uptime(), "01:01:01");
/// assert_eq!(view.latency(), "0.12346");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct StatusView {
    /// Whether the bot's gateway session is established
    ready: bool,
    /// Guild count
    guilds: i64,
    /// User count
    users: i64,
    /// Channel count
    channels: i64,
    /// Shard count
    shards: i64,
    /// Loaded extension module count
    cogs: i64,
    /// Uptime rounded to whole seconds
    uptime_seconds: u64,
    /// Uptime as `HH:MM:SS`
    uptime: String,
    /// Latency in seconds with five decimals
    latency: String,
    /// Where the values came from
    mode: TelemetryMode,
}

impl StatusView {
    /// Build the view from a snapshot.
    pub fn new(snapshot: &TelemetrySnapshot, mode: TelemetryMode) -> Self {
        let uptime_seconds = uptime_seconds(snapshot.uptime_seconds);
        Self {
            ready: snapshot.ready,
            guilds: snapshot.guild_count,
            users: snapshot.user_count,
            channels: snapshot.channel_count,
            shards: snapshot.shard_count,
            cogs: snapshot.cog_count,
            uptime_seconds,
            uptime: format_duration(uptime_seconds),
            latency: format_latency(snapshot.latency_seconds),
            mode,
        }
    }

    /// True when the view shows placeholder values.
    pub fn is_degraded(&self) -> bool {
        self.mode == TelemetryMode::Degraded
    }
}
