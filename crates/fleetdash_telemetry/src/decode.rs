//! Tolerant decoding of bot-control API payloads.
//!
//! Missing, `null` and unknown fields never fail a decode. A payload that is not a
//! JSON object, or a known field holding the wrong JSON type, is a [`DecodeError`].
//! Values are not range-checked: a negative uptime decodes as-is.

use crate::{LogBundle, ShardReport, TelemetryKind, TelemetrySnapshot};
use fleetdash_error::DecodeError;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument};

/// A decoded payload of any kind.
#[derive(Debug, Clone, PartialEq, derive_more::From)]
pub enum Decoded {
    /// A `type=stats` payload
    Stats(TelemetrySnapshot),
    /// A `type=logs` payload
    Logs(LogBundle),
    /// A `type=shards` payload
    Shards(ShardReport),
}

impl Decoded {
    /// The kind this payload was decoded as.
    pub fn kind(&self) -> TelemetryKind {
        match self {
            Self::Stats(_) => TelemetryKind::Stats,
            Self::Logs(_) => TelemetryKind::Logs,
            Self::Shards(_) => TelemetryKind::Shards,
        }
    }
}

/// Decode a raw payload as the given kind.
///
/// # Examples
///
/// ```
/// use fleetdash_telemetry::{decode, Decoded, TelemetryKind};
///
/// let decoded = decode(TelemetryKind::Logs, br#"{"logs":"started"}"#).unwrap();
/// match decoded {
///     Decoded::Logs(bundle) => assert_eq!(bundle.text, "started"),
///     other => panic!("unexpected payload: {:?}", other),
/// }
/// ```
pub fn decode(kind: TelemetryKind, raw: &[u8]) -> Result<Decoded, DecodeError> {
    Ok(match kind {
        TelemetryKind::Stats => decode_stats(raw)?.into(),
        TelemetryKind::Logs => decode_logs(raw)?.into(),
        TelemetryKind::Shards => decode_shards(raw)?.into(),
    })
}

/// Decode a `type=stats` payload.
pub fn decode_stats(raw: &[u8]) -> Result<TelemetrySnapshot, DecodeError> {
    decode_object(TelemetryKind::Stats, raw)
}

/// Decode a `type=logs` payload.
pub fn decode_logs(raw: &[u8]) -> Result<LogBundle, DecodeError> {
    decode_object(TelemetryKind::Logs, raw)
}

/// Decode a `type=shards` payload.
pub fn decode_shards(raw: &[u8]) -> Result<ShardReport, DecodeError> {
    decode_object(TelemetryKind::Shards, raw)
}

#[instrument(skip_all, fields(kind = %kind, bytes = raw.len()))]
fn decode_object<T: DeserializeOwned>(kind: TelemetryKind, raw: &[u8]) -> Result<T, DecodeError> {
    let value: Value = serde_json::from_slice(raw)
        .map_err(|e| DecodeError::new(kind.as_str(), format!("Invalid JSON: {}", e)))?;

    // Structs would otherwise accept a positional array
    if !value.is_object() {
        return Err(DecodeError::new(
            kind.as_str(),
            format!("Expected a JSON object, got {}", json_type(&value)),
        ));
    }

    let decoded = serde_json::from_value(value)
        .map_err(|e| DecodeError::new(kind.as_str(), format!("Unexpected shape: {}", e)))?;

    debug!("Decoded telemetry payload");
    Ok(decoded)
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
