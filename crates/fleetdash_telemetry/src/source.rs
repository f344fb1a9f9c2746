//! The telemetry seam the dashboard is written against.

use crate::{
    LogBundle, ShardReport, TelemetryKind, TelemetrySnapshot, decode_logs, decode_shards,
    decode_stats,
};
use async_trait::async_trait;
use fleetdash_error::{TelemetryError, TransportError};

/// Anything that can produce raw bot-control API payloads.
///
/// Implementors only provide [`fetch`](TelemetrySource::fetch); the typed accessors
/// run the decoder on top of it.
#[async_trait]
pub trait TelemetrySource: Send + Sync {
    /// Fetch the raw response body for one kind of telemetry.
    async fn fetch(&self, kind: TelemetryKind) -> Result<Vec<u8>, TransportError>;

    /// Fetch and decode runtime statistics.
    async fn stats(&self) -> Result<TelemetrySnapshot, TelemetryError> {
        let raw = self.fetch(TelemetryKind::Stats).await?;
        Ok(decode_stats(&raw)?)
    }

    /// Fetch and decode recent logs.
    async fn logs(&self) -> Result<LogBundle, TelemetryError> {
        let raw = self.fetch(TelemetryKind::Logs).await?;
        Ok(decode_logs(&raw)?)
    }

    /// Fetch and decode shard health.
    async fn shards(&self) -> Result<ShardReport, TelemetryError> {
        let raw = self.fetch(TelemetryKind::Shards).await?;
        Ok(decode_shards(&raw)?)
    }
}
