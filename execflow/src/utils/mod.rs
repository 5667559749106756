//! Small shared helpers for time and identifier handling.

mod timestamps;
mod uuid_utils;

pub use timestamps::{millis_to_datetime, now_millis, Timestamp};
pub use uuid_utils::generate_runtime_id;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_millis_round_trips_through_datetime() {
        let millis = now_millis();
        let dt = millis_to_datetime(millis).unwrap();
        assert_eq!(dt.timestamp_millis(), millis);
    }
}
