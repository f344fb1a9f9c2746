//! Top-level error wrapper types.

use crate::{ConfigError, DecodeError, StoreError, TelemetryError, TransportError};

/// Every error condition fleetdash can report.
///
/// # Examples
///
/// ```
/// use fleetdash_error::{FleetdashError, StoreError, StoreErrorKind};
///
/// let store_err = StoreError::new(StoreErrorKind::Pool("timed out".into()));
/// let err: FleetdashError = store_err.into();
/// assert!(format!("{}", err).contains("Store Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum FleetdashErrorKind {
    /// Remote endpoint unreachable
    #[from(TransportError)]
    Transport(TransportError),
    /// Telemetry payload malformed
    #[from(DecodeError)]
    Decode(DecodeError),
    /// Relational store failure
    #[from(StoreError)]
    Store(StoreError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
}

impl From<TelemetryError> for FleetdashErrorKind {
    fn from(err: TelemetryError) -> Self {
        match err {
            TelemetryError::Transport(e) => Self::Transport(e),
            TelemetryError::Decode(e) => Self::Decode(e),
        }
    }
}

/// fleetdash error with kind discrimination.
///
/// # Examples
///
/// ```
/// use fleetdash_error::{ConfigError, FleetdashResult};
///
/// fn might_fail() -> FleetdashResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// assert!(might_fail().is_err());
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Fleetdash Error: {}", _0)]
pub struct FleetdashError(Box<FleetdashErrorKind>);

impl FleetdashError {
    /// Create a new error from a kind.
    pub fn new(kind: FleetdashErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &FleetdashErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to FleetdashErrorKind
impl<T> From<T> for FleetdashError
where
    T: Into<FleetdashErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for fleetdash operations.
pub type FleetdashResult<T> = std::result::Result<T, FleetdashError>;
