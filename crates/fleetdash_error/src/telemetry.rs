//! Combined error for a telemetry fetch followed by a decode.

use crate::{DecodeError, TransportError};

/// Failure of either step of a telemetry call.
///
/// # Examples
///
/// ```
/// use fleetdash_error::{TelemetryError, TransportError};
///
/// let err: TelemetryError = TransportError::new("timed out").into();
/// assert!(err.is_transport());
/// ```
#[derive(Debug, Clone, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum TelemetryError {
    /// The remote endpoint could not be reached
    #[from(TransportError)]
    Transport(TransportError),
    /// The remote endpoint answered with an unusable payload
    #[from(DecodeError)]
    Decode(DecodeError),
}

impl TelemetryError {
    /// True when the remote endpoint could not be reached.
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_))
    }

    /// True when the payload could not be decoded.
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode(_))
    }
}
