//! Layered configuration for the dashboard process.

use config::{Config, Environment, File};
use fleetdash_database::DatabaseConfig;
use fleetdash_error::ConfigError;
use fleetdash_telemetry::BotApiConfig;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::{debug, instrument};

/// Prefix for environment overrides, e.g. `FLEETDASH__BOT_API__SECRET_KEY`.
const ENV_PREFIX: &str = "FLEETDASH";
/// Separator between nested keys in environment overrides.
const ENV_SEPARATOR: &str = "__";
/// Optional configuration file looked up in the working directory.
const DEFAULT_FILE: &str = "fleetdash";

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset
    #[serde(default = "default_level")]
    pub level: String,
    /// Emit JSON lines instead of human-readable text
    #[serde(default)]
    pub json: bool,
}

fn default_level() -> String {
    "info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            json: false,
        }
    }
}

/// Everything the dashboard needs at startup.
///
/// Sources are layered in this order, later ones winning:
///
/// 1. Built-in defaults
/// 2. `fleetdash.toml` in the working directory, or the file passed explicitly
/// 3. `FLEETDASH__<SECTION>__<KEY>` environment variables
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Bot-control API connection
    pub bot_api: BotApiConfig,
    /// Configuration database connection
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl DashboardConfig {
    /// Load configuration from the default file and the process environment.
    ///
    /// When `path` is given the file must exist; otherwise `fleetdash.toml` is
    /// read if present.
    ///
    /// # Errors
    ///
    /// Returns an error if a source cannot be read, a required key is missing, or
    /// a value is out of range.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        Self::load_with_env(path, None)
    }

    /// Like [`load`](Self::load), but reads overrides from `env` instead of the
    /// process environment when it is given.
    ///
    /// # Errors
    ///
    /// Same as [`load`](Self::load).
    #[instrument(skip(env), fields(path = ?path))]
    pub fn load_with_env(
        path: Option<&Path>,
        env: Option<HashMap<String, String>>,
    ) -> Result<Self, ConfigError> {
        let file = match path {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_FILE).required(false),
        };

        let environment = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator(ENV_SEPARATOR)
            .separator(ENV_SEPARATOR)
            .source(env);

        let settings = Config::builder()
            .set_default("bot_api.timeout_ms", 5_000_i64)
            .and_then(|b| b.set_default("logging.level", default_level()))
            .map_err(|e| ConfigError::new(format!("Invalid default: {}", e)))?
            .add_source(file)
            .add_source(environment)
            .build()
            .map_err(|e| ConfigError::new(format!("Failed to read configuration: {}", e)))?;

        let config: Self = settings
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("Invalid configuration: {}", e)))?;

        config.validate()?;
        debug!(
            endpoint = %config.bot_api.endpoint(),
            db_host = %config.database.host,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Check values the type system cannot.
    ///
    /// # Errors
    ///
    /// Returns the first problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.bot_api.host.trim().is_empty() {
            return Err(ConfigError::new("bot_api.host must not be empty"));
        }
        if self.bot_api.port == 0 {
            return Err(ConfigError::new("bot_api.port must not be 0"));
        }
        if self.bot_api.timeout_ms == 0 {
            return Err(ConfigError::new("bot_api.timeout_ms must be greater than 0"));
        }
        if self.database.pool_size == 0 {
            return Err(ConfigError::new("database.pool_size must be at least 1"));
        }
        if self.database.connection_timeout_ms == 0 {
            return Err(ConfigError::new(
                "database.connection_timeout_ms must be greater than 0",
            ));
        }
        Ok(())
    }
}
