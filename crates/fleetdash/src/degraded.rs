//! What a telemetry-backed view shows when telemetry is unavailable.
//!
//! Each call resolves to exactly one of two modes. A failure is logged once and the
//! type's `Default` value, which is the documented placeholder, is used instead.
//! Nothing is remembered between calls.

use fleetdash_telemetry::{TelemetryError, TelemetryKind};
use fleetdash_view::TelemetryMode;
use tracing::warn;

/// A telemetry value together with where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Observed<T> {
    /// The decoded value, or the placeholder when degraded
    pub value: T,
    /// Whether `value` is live
    pub mode: TelemetryMode,
}

impl<T> Observed<T> {
    /// Wrap a value that came from a successful fetch and decode.
    pub fn live(value: T) -> Self {
        Self {
            value,
            mode: TelemetryMode::Live,
        }
    }

    /// True when `value` is the placeholder.
    pub fn is_degraded(&self) -> bool {
        self.mode == TelemetryMode::Degraded
    }
}

impl<T: Default> Observed<T> {
    /// The placeholder value in degraded mode.
    pub fn degraded() -> Self {
        Self {
            value: T::default(),
            mode: TelemetryMode::Degraded,
        }
    }
}

/// Resolve a telemetry result into a value that can always be rendered.
///
/// # Examples
///
/// ```
/// use fleetdash::observe;
/// use fleetdash_telemetry::{LogBundle, TelemetryKind, TransportError};
///
/// let observed = observe::<LogBundle>(
///     TelemetryKind::Logs,
///     Err(TransportError::new("connection refused").into()),
/// );
/// assert!(observed.is_degraded());
/// assert!(observed.value.text.is_empty());
/// ```
pub fn observe<T: Default>(kind: TelemetryKind, result: Result<T, TelemetryError>) -> Observed<T> {
    match result {
        Ok(value) => Observed::live(value),
        Err(error) => {
            warn!(kind = %kind, error = %error, "Telemetry unavailable, using placeholder");
            Observed::degraded()
        }
    }
}
