//! View formatting for fleetdash.
//!
//! Everything here is a pure function of its input: no I/O, no logging, no clock.
//! Telemetry records and configuration rows come in, stable human-readable text and
//! serializable view models go out.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod format;
mod projection;
mod status;

pub use format::{format_duration, format_latency, join_lines, uptime_seconds};
pub use projection::{
    guild_lines, profile_tags, project_guild_line, project_shard_line, project_user_line,
    shard_lines, user_lines,
};
pub use status::{StatusView, TelemetryMode};
