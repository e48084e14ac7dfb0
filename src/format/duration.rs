// Track-length formatting: clock style ("03:25", "01:02:03") and compact
// human style ("1h 2m 5s").

/// Split a seconds count into whole hours, minutes and seconds.
/// Returns `None` for NaN, infinite, negative or out-of-range input.
fn split_seconds(seconds: f64) -> Option<(u64, u64, u64)> {
    // `u64::MAX as f64` rounds up to 2^64, which itself does not fit.
    if !seconds.is_finite() || seconds < 0.0 || seconds >= u64::MAX as f64 {
        tracing::debug!("invalid duration {seconds}, rendering zero");
        return None;
    }
    let total = seconds.floor() as u64;
    Some((total / 3600, (total % 3600) / 60, total % 60))
}

/// Format seconds as `MM:SS`, or `HH:MM:SS` when `show_hours` is set or the
/// duration reaches an hour. Invalid input renders `"00:00"`.
pub fn format_duration(seconds: f64, show_hours: bool) -> String {
    let Some((hours, minutes, secs)) = split_seconds(seconds) else {
        return "00:00".to_string();
    };

    if show_hours || hours > 0 {
        format!("{hours:02}:{minutes:02}:{secs:02}")
    } else {
        format!("{minutes:02}:{secs:02}")
    }
}

/// Format seconds as a compact phrase such as `"2h 15m"` or `"45s"`.
///
/// Once hours are shown the minutes field is always kept, even at zero
/// (`"2h 0m 5s"`). Seconds are dropped when zero unless nothing else is shown.
/// Invalid input renders `"0s"`.
pub fn format_duration_human(seconds: f64) -> String {
    let Some((hours, minutes, secs)) = split_seconds(seconds) else {
        return "0s".to_string();
    };

    let mut parts = Vec::with_capacity(3);
    if hours > 0 {
        parts.push(format!("{hours}h"));
    }
    if hours > 0 || minutes > 0 {
        parts.push(format!("{minutes}m"));
    }
    if secs > 0 || (hours == 0 && minutes == 0) {
        parts.push(format!("{secs}s"));
    }
    parts.join(" ")
}

/// Sum of a list of track durations in seconds.
pub fn calculate_total_duration(track_durations: &[f64]) -> f64 {
    track_durations.iter().sum()
}

pub fn ms_to_seconds(ms: f64) -> f64 {
    (ms / 1000.0).floor()
}

pub fn seconds_to_ms(seconds: f64) -> f64 {
    seconds * 1000.0
}
