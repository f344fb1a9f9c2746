//! Error types for fleetdash.
//!
//! This crate provides the error taxonomy shared by every fleetdash crate.
//!
//! # Error Hierarchy
//!
//! - [`TransportError`]: the bot-control API could not be reached or read
//! - [`DecodeError`]: a telemetry payload was not the expected JSON shape
//! - [`TelemetryError`]: either of the two above, as returned by telemetry fetches
//! - [`StoreError`]: the relational store was unreachable or a query failed
//! - [`ConfigError`]: configuration could not be loaded or was invalid
//!
//! Every error records the file and line where it was created via `#[track_caller]`.
//!
//! # Examples
//!
//! ```
//! use fleetdash_error::{FleetdashResult, TransportError};
//!
//! fn fetch_stats() -> FleetdashResult<String> {
//!     Err(TransportError::new("connection refused"))?
//! }
//!
//! assert!(fetch_stats().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod decode;
mod error;
mod store;
mod telemetry;
mod transport;

pub use config::ConfigError;
pub use decode::DecodeError;
pub use error::{FleetdashError, FleetdashErrorKind, FleetdashResult};
pub use store::{StoreError, StoreErrorKind, StoreResult};
pub use telemetry::TelemetryError;
pub use transport::TransportError;
