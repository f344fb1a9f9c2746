//! HTTP client for the bot-control API.

use crate::{BotApiConfig, TelemetryKind, TelemetrySource};
use async_trait::async_trait;
use fleetdash_error::TransportError;
use tracing::{debug, instrument};

/// Header carrying the shared secret. The remote side validates it.
pub const AUTHENTICATION_HEADER: &str = "Authentication";

/// Stateless client for the bot-control API.
///
/// The response status is not inspected: whatever body comes back is handed to the
/// decoder. Only failing to connect, timing out, or failing to read the body is an
/// error here. Dropping the returned future cancels the request.
#[derive(Debug, Clone)]
pub struct TelemetryClient {
    endpoint: String,
    secret_key: String,
    client: reqwest::Client,
}

impl TelemetryClient {
    /// Create a client for the configured endpoint.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be built.
    #[instrument(skip(config), fields(endpoint = %config.endpoint(), timeout_ms = config.timeout_ms))]
    pub fn new(config: &BotApiConfig) -> Result<Self, TransportError> {
        debug!("Creating telemetry client");
        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()
            .map_err(|e| TransportError::new(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            endpoint: config.endpoint(),
            secret_key: config.secret_key.clone(),
            client,
        })
    }

    /// Base URL requests are sent to.
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl TelemetrySource for TelemetryClient {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch(&self, kind: TelemetryKind) -> Result<Vec<u8>, TransportError> {
        debug!("Requesting telemetry");

        let response = self
            .client
            .get(&self.endpoint)
            .query(&[("type", kind.as_str())])
            .header(AUTHENTICATION_HEADER, &self.secret_key)
            .send()
            .await
            .map_err(|e| TransportError::new(format!("Request for {} failed: {}", kind, e)))?;

        let status = response.status();
        let body = response.bytes().await.map_err(|e| {
            TransportError::new(format!("Reading {} response failed: {}", kind, e))
        })?;

        debug!(status = %status, bytes = body.len(), "Received telemetry");
        Ok(body.to_vec())
    }
}
