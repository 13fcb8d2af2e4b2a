use chrono::{DateTime, Timelike, Utc};

/// Render an hour-bucket timestamp as an `HH:MM` clock label.
///
/// Labels use UTC so the same payload formats identically in every
/// environment. No date component; across a day boundary two buckets can
/// share a label.
pub fn format_time_label(timestamp_ms: u64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(timestamp_ms as i64) {
        Some(dt) => format!("{:02}:{:02}", dt.hour(), dt.minute()),
        None => "--:--".to_string(),
    }
}

/// `HH:MM:SS.mmm` clock rendering used for log timestamps.
pub fn format_clock(timestamp_ms: u64) -> String {
    match DateTime::<Utc>::from_timestamp_millis(timestamp_ms as i64) {
        Some(dt) => format!(
            "{:02}:{:02}:{:02}.{:03}",
            dt.hour(),
            dt.minute(),
            dt.second(),
            timestamp_ms % 1000
        ),
        None => "--:--:--.---".to_string(),
    }
}
