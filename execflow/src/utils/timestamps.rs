//! Timestamp helpers.
//!
//! Frame start times travel on the wire as epoch milliseconds; these helpers
//! convert between that form and `chrono` values.

use chrono::{DateTime, TimeZone, Utc};

/// A UTC instant.
pub type Timestamp = DateTime<Utc>;

/// Returns the current time in epoch milliseconds.
#[must_use]
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// Converts epoch milliseconds into a timestamp.
///
/// Returns `None` when the value is outside chrono's representable range.
#[must_use]
pub fn millis_to_datetime(millis: i64) -> Option<Timestamp> {
    Utc.timestamp_millis_opt(millis).single()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::SecondsFormat;

    #[test]
    fn test_millis_to_datetime_epoch() {
        let dt = millis_to_datetime(0).unwrap();
        assert_eq!(dt.to_rfc3339_opts(SecondsFormat::Millis, true), "1970-01-01T00:00:00.000Z");
    }

    #[test]
    fn test_millis_to_datetime_keeps_millis() {
        let dt = millis_to_datetime(1_696_512_000_123).unwrap();
        assert_eq!(dt.timestamp_millis(), 1_696_512_000_123);
        assert_eq!(dt.to_rfc3339_opts(SecondsFormat::Millis, true), "2023-10-05T13:20:00.123Z");
    }

    #[test]
    fn test_millis_to_datetime_out_of_range() {
        assert!(millis_to_datetime(i64::MAX).is_none());
    }
}
