//! Timecode formatting for human-readable output.

/// Format a number of seconds as `HH:MM:SS.mmm`.
///
/// Negative and NaN inputs are treated as zero.
///
/// ```
/// use vtg_core::format_duration;
///
/// assert_eq!(format_duration(61.5), "00:01:01.500");
/// ```
pub fn format_duration(seconds: f64) -> String {
    let seconds = if seconds.is_nan() { 0.0 } else { seconds.max(0.0) };

    let hours = (seconds / 3600.0).floor() as u64;
    let minutes = ((seconds % 3600.0) / 60.0).floor() as u64;
    let secs = seconds % 60.0;

    format!("{hours:02}:{minutes:02}:{secs:06.3}")
}
