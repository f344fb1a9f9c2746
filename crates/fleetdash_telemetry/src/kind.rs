//! The kinds of telemetry the bot-control API serves.

use serde::{Deserialize, Serialize};

/// Value of the `type` query parameter sent to the bot-control API.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum TelemetryKind {
    /// Readiness, counts, uptime and latency
    #[display("stats")]
    Stats,
    /// Recent log output
    #[display("logs")]
    Logs,
    /// Per-shard health
    #[display("shards")]
    Shards,
}

impl TelemetryKind {
    /// The query parameter value for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Stats => "stats",
            Self::Logs => "logs",
            Self::Shards => "shards",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_matches_query_value() {
        for kind in [TelemetryKind::Stats, TelemetryKind::Logs, TelemetryKind::Shards] {
            assert_eq!(kind.to_string(), kind.as_str());
        }
    }
}
