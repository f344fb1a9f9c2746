//! Tracing subscriber setup for the dashboard binary.

use crate::LoggingConfig;
use std::env;
use tracing_subscriber::filter::ParseError;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for log output.
#[derive(Debug, Clone)]
pub struct ObservabilityConfig {
    /// Service name recorded at startup
    pub service_name: String,
    /// Service version
    pub service_version: String,
    /// Log level filter (e.g., "info", "debug")
    pub log_level: String,
    /// Enable JSON-formatted logs for structured logging
    pub json_logs: bool,
    /// Use `log_level` even when `RUST_LOG` is set
    pub override_env: bool,
}

impl ObservabilityConfig {
    /// Create a new configuration with the given service name.
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            log_level: env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            json_logs: false,
            override_env: false,
        }
    }

    /// Take level and format from the `[logging]` section.
    pub fn from_logging(service_name: impl Into<String>, logging: &LoggingConfig) -> Self {
        Self::new(service_name)
            .with_log_level(logging.level.clone())
            .with_json_logs(logging.json)
    }

    /// Set the log level.
    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    /// Enable JSON-formatted logs.
    pub fn with_json_logs(mut self, enabled: bool) -> Self {
        self.json_logs = enabled;
        self
    }

    /// Log at `debug` regardless of `RUST_LOG`.
    pub fn with_verbose(mut self, enabled: bool) -> Self {
        if enabled {
            self.log_level = "debug".to_string();
            self.override_env = true;
        }
        self
    }
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self::new(env!("CARGO_PKG_NAME"))
    }
}

/// Install the global subscriber with default configuration.
pub fn init_observability() -> Result<(), Box<dyn std::error::Error>> {
    init_observability_with_config(ObservabilityConfig::default())
}

/// Install the global subscriber.
///
/// `RUST_LOG` wins over `config.log_level` when set, unless `override_env` is on.
/// Logs go to stderr so command output on stdout stays clean.
///
/// # Errors
///
/// Returns an error if the filter directive is invalid or a subscriber is already set.
pub fn init_observability_with_config(
    config: ObservabilityConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let env_filter = env_filter(&config, env::var(EnvFilter::DEFAULT_ENV).ok().as_deref())?;

    let fmt_layer = if config.json_logs {
        tracing_subscriber::fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    tracing::info!(
        service = %config.service_name,
        version = %config.service_version,
        "Observability initialized"
    );

    Ok(())
}

fn env_filter(config: &ObservabilityConfig, rust_log: Option<&str>) -> Result<EnvFilter, ParseError> {
    match rust_log {
        Some(directives) if !config.override_env => EnvFilter::try_new(directives)
            .or_else(|_| EnvFilter::try_new(&config.log_level)),
        _ => EnvFilter::try_new(&config.log_level),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rust_log_wins_over_configured_level() {
        let config = ObservabilityConfig::new("fleetdash").with_log_level("info");
        let filter = env_filter(&config, Some("warn")).unwrap();
        assert_eq!(filter.to_string(), "warn");
    }

    #[test]
    fn verbose_wins_over_rust_log() {
        let config = ObservabilityConfig::new("fleetdash")
            .with_log_level("info")
            .with_verbose(true);
        let filter = env_filter(&config, Some("warn")).unwrap();
        assert_eq!(filter.to_string(), "debug");
    }

    #[test]
    fn configured_level_without_rust_log() {
        let config = ObservabilityConfig::new("fleetdash").with_log_level("error");
        let filter = env_filter(&config, None).unwrap();
        assert_eq!(filter.to_string(), "error");
    }

    #[test]
    fn verbose_off_keeps_level() {
        let config = ObservabilityConfig::new("fleetdash")
            .with_log_level("info")
            .with_verbose(false);
        assert_eq!(config.log_level, "info");
        assert!(!config.override_env);
    }
}
