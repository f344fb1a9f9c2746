//! Connection settings for the bot-control API.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Where the bot-control API lives and how to authenticate to it.
///
/// # Examples
///
/// ```
/// use fleetdash_telemetry::BotApiConfigBuilder;
///
/// let config = BotApiConfigBuilder::default()
///     .host("bot")
///     .port(8000u16)
///     .secret_key("hunter2")
///     .build()
///     .unwrap();
///
/// assert_eq!(config.endpoint(), "http://bot:8000/api");
/// assert_eq!(config.timeout_ms, 5_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, derive_builder::Builder)]
#[builder(setter(into))]
pub struct BotApiConfig {
    /// Host name or address of the bot process
    pub host: String,
    /// Port the bot-control API listens on
    pub port: u16,
    /// Shared secret sent in the `Authentication` header
    pub secret_key: String,
    /// Upper bound for a whole request, in milliseconds
    #[serde(default = "default_timeout_ms")]
    #[builder(default = "default_timeout_ms()")]
    pub timeout_ms: u64,
}

fn default_timeout_ms() -> u64 {
    5_000
}

impl BotApiConfig {
    /// Create a configuration with the default timeout.
    pub fn new(host: impl Into<String>, port: u16, secret_key: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            port,
            secret_key: secret_key.into(),
            timeout_ms: default_timeout_ms(),
        }
    }

    /// Base URL of the API, without the query string.
    pub fn endpoint(&self) -> String {
        format!("http://{}:{}/api", self.host, self.port)
    }

    /// The request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}
