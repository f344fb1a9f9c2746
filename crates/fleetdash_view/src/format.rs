//! Scalar formatting helpers.

/// Format a number of seconds as `HH:MM:SS`.
///
/// Each part is zero-padded to two digits. Hours are not capped, so long uptimes
/// grow a wider hour field instead of wrapping.
///
/// # Examples
///
/// ```
/// use fleetdash_view::format_duration;
///
/// assert_eq!(format_duration(0), "00:00:00");
/// assert_eq!(format_duration(3661), "01:01:01");
/// assert_eq!(format_duration(360_000), "100:00:00");
/// ```
pub fn format_duration(seconds: u64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds - hours * 3600) / 60;
    let secs = seconds - hours * 3600 - minutes * 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, secs)
}

/// Format a latency in seconds with exactly five decimal places, rounded.
///
/// # Examples
///
/// ```
/// use fleetdash_view::format_latency;
///
/// assert_eq!(format_latency(0.123456789), "0.12346");
/// assert_eq!(format_latency(0.0), "0.00000");
/// ```
pub fn format_latency(seconds: f64) -> String {
    format!("{:.5}", seconds)
}

/// Whole seconds of uptime for display.
///
/// Rounds to the nearest second. Negative and NaN values, which the decoder lets
/// through unchanged, display as zero.
pub fn uptime_seconds(uptime: f64) -> u64 {
    // Float-to-int `as` saturates and maps NaN to 0
    uptime.round() as u64
}

/// Join per-entity lines with newlines. No lines yields an empty string.
pub fn join_lines<I>(lines: I) -> String
where
    I: IntoIterator<Item = String>,
{
    lines.into_iter().collect::<Vec<_>>().join("\n")
}
