//! Live telemetry from the bot-control API.
//!
//! This crate owns everything between the dashboard and the remote bot process:
//!
//! - [`TelemetryClient`]: authenticated `GET /api?type=<kind>` requests
//! - [`decode`] and friends: tolerant JSON decoding into typed records
//! - [`TelemetrySource`]: the seam the dashboard depends on, so tests can swap in fakes
//!
//! # Example
//!
//! ```rust,no_run
//! use fleetdash_telemetry::{BotApiConfig, TelemetryClient, TelemetrySource};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = BotApiConfig::new("localhost", 8000, "secret");
//! let client = TelemetryClient::new(&config)?;
//!
//! let snapshot = client.stats().await?;
//! println!("ready: {}", snapshot.ready);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
mod decode;
mod kind;
mod models;
mod source;

pub use client::{AUTHENTICATION_HEADER, TelemetryClient};
pub use config::{BotApiConfig, BotApiConfigBuilder};
pub use decode::{Decoded, decode, decode_logs, decode_shards, decode_stats};
pub use kind::TelemetryKind;
pub use models::{LogBundle, ShardReport, ShardStatus, TelemetrySnapshot};
pub use source::TelemetrySource;

pub use fleetdash_error::{DecodeError, TelemetryError, TransportError};
