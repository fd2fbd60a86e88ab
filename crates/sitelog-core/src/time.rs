//! Time and duration utilities.

use chrono::{DateTime, Local, TimeZone};
use std::time::Duration;

/// Timestamp layout used by the `date` token.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3f%:z";

/// Current local time, formatted for the `date` token.
pub fn timestamp() -> String {
    format_timestamp(&Local::now())
}

/// Format any timestamp the way the `date` token does.
pub fn format_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: std::fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Elapsed time in milliseconds with three decimals, e.g. `12.345ms`.
pub fn pretty_millis(duration: Duration) -> String {
    format!("{:.3}ms", duration.as_secs_f64() * 1000.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, Utc};

    #[test]
    fn test_format_timestamp() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 1).unwrap();
        assert_eq!(format_timestamp(&at), "2024-03-09T14:05:01.000+00:00");

        let offset = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(format_timestamp(&at.with_timezone(&offset)), "2024-03-09T16:05:01.000+02:00");
    }

    #[test]
    fn test_pretty_millis() {
        assert_eq!(pretty_millis(Duration::from_micros(12_345)), "12.345ms");
        assert_eq!(pretty_millis(Duration::ZERO), "0.000ms");
        assert_eq!(pretty_millis(Duration::from_secs(2)), "2000.000ms");
    }
}
