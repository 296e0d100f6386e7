//! Time helpers.
//!
//! Timestamps are stored as Unix milliseconds in UTC and rendered as
//! ISO 8601 strings with millisecond precision (`2023-01-30T01:59:14.048Z`).

use chrono::{DateTime, SecondsFormat, Utc};

/// Get current Unix timestamp in UTC (milliseconds)
pub fn get_utc_timestamp() -> i64 {
    Utc::now().timestamp_millis()
}

/// Convert a Unix timestamp (milliseconds) into an ISO 8601 string in UTC.
///
/// Out-of-range values are logged at `warn` and fall back to the Unix epoch.
/// Use [`try_timestamp_to_iso8601`] to detect them instead.
pub fn timestamp_to_iso8601(millis: i64) -> String {
    try_timestamp_to_iso8601(millis).unwrap_or_else(|| {
        tracing::warn!(millis, "Timestamp out of range, rendering as Unix epoch");
        DateTime::<Utc>::default().to_rfc3339_opts(SecondsFormat::Millis, true)
    })
}

/// Convert a Unix timestamp (milliseconds) into an ISO 8601 string in UTC.
///
/// Returns `None` when the value is outside the representable range.
pub fn try_timestamp_to_iso8601(millis: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp_millis(millis)
        .map(|dt| dt.to_rfc3339_opts(SecondsFormat::Millis, true))
}
