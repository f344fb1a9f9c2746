//! Telemetry payload decoding errors.

/// A telemetry payload was not valid JSON or did not match the expected shape.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Decode Error ({}): {} at line {} in {}", payload, message, line, file)]
pub struct DecodeError {
    /// Which payload failed to decode (`stats`, `logs` or `shards`)
    pub payload: &'static str,
    /// The underlying error message
    pub message: String,
    /// Line number where the error occurred
    pub line: u32,
    /// File where the error occurred
    pub file: &'static str,
}

impl DecodeError {
    /// Create a new DecodeError for the named payload at the current location.
    ///
    /// # Examples
    ///
    /// ```
    /// use fleetdash_error::DecodeError;
    ///
    /// let err = DecodeError::new("stats", "expected a JSON object");
    /// assert_eq!(err.payload, "stats");
    /// assert!(err.to_string().contains("expected a JSON object"));
    /// ```
    #[track_caller]
    pub fn new(payload: &'static str, message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            payload,
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}
