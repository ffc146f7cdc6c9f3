//! Display formatting for timestamps, durations, and result cells.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

use chrono::DateTime;

/// `YYYY-MM-DD HH:MM` in UTC, or `-` when out of range.
#[must_use]
pub fn timestamp(ms: i64) -> String {
    DateTime::from_timestamp_millis(ms).map_or_else(|| "-".to_owned(), |dt| dt.format("%Y-%m-%d %H:%M").to_string())
}

/// Milliseconds below one second, seconds with one decimal above.
#[must_use]
pub fn duration(ms: u32) -> String {
    if ms < 1000 { format!("{ms} ms") } else { format!("{:.1} s", f64::from(ms) / 1000.0) }
}

/// Render a JSON result cell without quotes around strings.
#[must_use]
pub fn cell(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::Null => "NULL".to_owned(),
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
