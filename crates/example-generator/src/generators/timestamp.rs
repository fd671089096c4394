//! Clock-based generators.
//!
//! These are NOT deterministic - each call reads the current time.

use chrono::{DateTime, Local, SecondsFormat, TimeZone, Utc};
use example_core::ExampleValue;

/// Current local date as `YYYY-MM-DD`.
pub fn generate_iso_date() -> ExampleValue {
    ExampleValue::String(format_iso_date(&Local::now()))
}

/// Current local time as `HH:MM:SS.sss`.
pub fn generate_iso_time() -> ExampleValue {
    ExampleValue::String(format_iso_time(&Local::now()))
}

/// Current local date-time in RFC 3339 with milliseconds and offset.
pub fn generate_iso_datetime() -> ExampleValue {
    ExampleValue::String(format_iso_datetime(&Local::now()))
}

/// Current UTC instant for the well-known timestamp message.
pub fn generate_timestamp_now() -> ExampleValue {
    ExampleValue::String(format_timestamp(&Utc::now()))
}

pub fn format_iso_date<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%Y-%m-%d").to_string()
}

pub fn format_iso_time<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.format("%H:%M:%S%.3f").to_string()
}

pub fn format_iso_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    dt.to_rfc3339_opts(SecondsFormat::Millis, false)
}

pub fn format_timestamp(dt: &DateTime<Utc>) -> String {
    dt.to_rfc3339_opts(SecondsFormat::Nanos, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn sample() -> DateTime<FixedOffset> {
        DateTime::parse_from_rfc3339("2024-03-09T07:05:03.250+02:00").unwrap()
    }

    #[test]
    fn test_format_iso_date() {
        assert_eq!(format_iso_date(&sample()), "2024-03-09");
    }

    #[test]
    fn test_format_iso_time() {
        assert_eq!(format_iso_time(&sample()), "07:05:03.250");
    }

    #[test]
    fn test_format_iso_datetime_keeps_offset() {
        assert_eq!(format_iso_datetime(&sample()), "2024-03-09T07:05:03.250+02:00");
    }

    #[test]
    fn test_format_timestamp_is_utc() {
        let utc = sample().with_timezone(&Utc);
        assert_eq!(format_timestamp(&utc), "2024-03-09T05:05:03.250000000Z");
    }

    #[test]
    fn test_generated_values_parse() {
        let now = generate_iso_datetime();
        assert!(DateTime::parse_from_rfc3339(now.as_str().unwrap()).is_ok());

        let ts = generate_timestamp_now();
        assert!(ts.as_str().unwrap().ends_with('Z'));

        let date = generate_iso_date();
        assert_eq!(date.as_str().unwrap().len(), 10);

        let time = generate_iso_time();
        assert_eq!(time.as_str().unwrap().len(), 12);
    }
}
