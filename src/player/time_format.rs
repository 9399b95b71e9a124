// SPDX-License-Identifier: MPL-2.0
//! Playback time formatting for the timer label.

/// Formats a duration in seconds as `MM:SS`, or `HH:MM:SS` once it reaches an hour.
///
/// Fractional seconds are floored. Negative and non-finite inputs render as
/// `00:00`.
///
/// # Examples
///
/// ```
/// use scrubline::player::format_time;
///
/// assert_eq!(format_time(65.0), "01:05");
/// assert_eq!(format_time(3661.0), "01:01:01");
/// ```
#[must_use]
pub fn format_time(seconds: f64) -> String {
    // Saturating cast: NaN and negatives become 0
    let total_secs = seconds.max(0.0).floor() as u64;
    let hours = total_secs / 3600;
    let minutes = (total_secs / 60) % 60;
    let secs = total_secs % 60;

    if hours > 0 {
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    } else {
        format!("{:02}:{:02}", minutes, secs)
    }
}
