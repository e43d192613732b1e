//! Utility functions for text and date formatting

use chrono::DateTime;

/// Formats an ISO 8601 timestamp as `YYYY-MM-DD HH:MM`.
///
/// Timestamps are displayed in their own offset (GitHub returns UTC).
/// Input that does not parse is returned unchanged.
///
/// # Arguments
///
/// * `iso`: Timestamp such as `2024-01-15T09:30:00Z`
///
/// # Returns
///
/// Human readable date string
pub fn format_date(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(dt) => dt.format("%Y-%m-%d %H:%M").to_string(),
        Err(_) => iso.to_string(),
    }
}

/// Truncates text to `max` characters, appending `...` when shortened.
pub fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}

/// Formats byte count as human readable file size
///
/// Converts byte count to appropriate unit (bytes, KB, MB) with two decimal
/// places for KB and MB. Uses binary prefixes.
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;

    if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}
