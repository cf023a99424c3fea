//! Timestamp formatting helpers.

use chrono::{DateTime, Utc};

/// UTC timestamp used throughout the harness.
pub type Timestamp = DateTime<Utc>;

/// Returns the current UTC time as an ISO 8601 formatted string:
/// `YYYY-MM-DDTHH:MM:SS.ffffff+00:00`.
#[must_use]
pub fn iso_timestamp() -> String {
    format_iso8601(&Utc::now())
}

/// Formats a timestamp as an ISO 8601 string with microsecond precision.
#[must_use]
pub fn format_iso8601(dt: &Timestamp) -> String {
    dt.format("%Y-%m-%dT%H:%M:%S%.6f+00:00").to_string()
}

/// Formats a timestamp for sample filenames: `YYYYMMDD_HHMMSS_fff`.
///
/// Millisecond precision keeps names from two saves in the same second
/// distinct; the store's numeric suffix covers ties within a millisecond.
#[must_use]
pub fn sample_timestamp(dt: &Timestamp) -> String {
    dt.format("%Y%m%d_%H%M%S_%3f").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_iso_timestamp_format() {
        let ts = iso_timestamp();
        assert!(ts.contains('T'));
        assert!(ts.ends_with("+00:00"));
    }

    #[test]
    fn test_format_iso8601_known_value() {
        let dt = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 45).unwrap();
        assert_eq!(format_iso8601(&dt), "2024-05-01T12:30:45.000000+00:00");
    }

    #[test]
    fn test_sample_timestamp_known_value() {
        let dt = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 45).unwrap()
            + chrono::Duration::milliseconds(123);
        assert_eq!(sample_timestamp(&dt), "20240501_123045_123");
    }
}
