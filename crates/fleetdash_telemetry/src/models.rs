//! Wire models for bot-control API payloads.
//!
//! These are deliberately separate from the relational rows in `fleetdash_database`;
//! the two only meet in the view formatter.
//!
//! Every field defaults to its zero value when absent or `null`, so the `Default`
//! impls double as the placeholders shown while telemetry is unavailable.

use serde::{Deserialize, Deserializer, Serialize};

/// Treat an explicit JSON `null` like a missing field.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Runtime statistics for the bot process (`type=stats`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    /// Whether the gateway session is established
    #[serde(rename = "is_ready", default, deserialize_with = "null_as_default")]
    pub ready: bool,
    /// Guilds the bot is in
    #[serde(default, deserialize_with = "null_as_default")]
    pub guild_count: i64,
    /// Users visible to the bot
    #[serde(default, deserialize_with = "null_as_default")]
    pub user_count: i64,
    /// Channels visible to the bot
    #[serde(default, deserialize_with = "null_as_default")]
    pub channel_count: i64,
    /// Gateway shards
    #[serde(default, deserialize_with = "null_as_default")]
    pub shard_count: i64,
    /// Loaded extension modules
    #[serde(default, deserialize_with = "null_as_default")]
    pub cog_count: i64,
    /// Seconds since the bot started
    #[serde(rename = "uptime", default, deserialize_with = "null_as_default")]
    pub uptime_seconds: f64,
    /// Websocket heartbeat latency in seconds
    #[serde(rename = "latency", default, deserialize_with = "null_as_default")]
    pub latency_seconds: f64,
}

/// Recent log output (`type=logs`), rendered verbatim.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogBundle {
    /// Raw log text
    #[serde(rename = "logs", default, deserialize_with = "null_as_default")]
    pub text: String,
}

impl LogBundle {
    /// The log text split into lines.
    pub fn lines(&self) -> impl Iterator<Item = &str> {
        self.text.lines()
    }
}

/// Health of a single gateway shard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShardStatus {
    /// Shard id
    #[serde(default, deserialize_with = "null_as_default")]
    pub id: i64,
    /// Total shards reported by this shard
    #[serde(default, deserialize_with = "null_as_default")]
    pub shard_count: i64,
    /// Whether the shard's websocket is closed
    #[serde(rename = "is_closed", default, deserialize_with = "null_as_default")]
    pub closed: bool,
    /// Heartbeat latency in seconds
    #[serde(rename = "latency", default, deserialize_with = "null_as_default")]
    pub latency_seconds: f64,
    /// Whether the shard is currently websocket rate limited
    #[serde(rename = "is_ws_ratelimited", default, deserialize_with = "null_as_default")]
    pub ws_rate_limited: bool,
}

/// All shards in the order the API returned them (`type=shards`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShardReport {
    /// Shard entries, never re-sorted
    #[serde(default, deserialize_with = "null_as_default")]
    pub shards: Vec<ShardStatus>,
}

impl ShardReport {
    /// Number of shards in the report.
    pub fn len(&self) -> usize {
        self.shards.len()
    }

    /// True when the report has no shards.
    pub fn is_empty(&self) -> bool {
        self.shards.is_empty()
    }
}
