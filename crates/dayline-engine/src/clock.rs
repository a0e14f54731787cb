//! Fractional-hour display formatting.
//!
//! Times in dayline are plain `f64` hours since midnight (9.5 == 09:30).
//! This module renders them as `"HH:MM"` for notifications and views.

/// Format a fractional hour as a zero-padded `"HH:MM"` string.
///
/// The minute component is rounded to the nearest minute. When floating-point
/// noise makes the minutes round up to 60 (e.g., `9.9999`), the carry is
/// folded into the hour so the output is `"10:00"`, never `"09:60"`.
pub fn format_hour(hour: f64) -> String {
    let mut h = hour.floor() as i64;
    let mut m = ((hour - hour.floor()) * 60.0).round() as i64;
    if m == 60 {
        h += 1;
        m = 0;
    }
    format!("{:02}:{:02}", h, m)
}

/// Format a half-open slot as `"HH:MM to HH:MM"`.
pub fn format_range(start: f64, end: f64) -> String {
    format!("{} to {}", format_hour(start), format_hour(end))
}
