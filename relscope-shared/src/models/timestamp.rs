use std::fmt;

use chrono::{DateTime, Duration, NaiveDateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// A UTC instant as the backend encodes it.
///
/// The backend emits ISO-8601 datetimes, sometimes without an offset
/// (naive UTC). Deserialization accepts both forms; serialization always
/// writes RFC 3339.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(pub DateTime<Utc>);

impl Timestamp {
    /// Render the instant relative to the current moment, e.g. "3 days ago".
    #[must_use]
    pub fn relative(&self) -> String {
        self.relative_to(Utc::now())
    }

    /// Render the instant relative to `now`.
    #[must_use]
    pub fn relative_to(&self, now: DateTime<Utc>) -> String {
        let delta = now.signed_duration_since(self.0);
        if delta < Duration::minutes(1) {
            return "just now".to_string();
        }
        if delta < Duration::hours(1) {
            return plural(delta.num_minutes(), "minute");
        }
        if delta < Duration::days(1) {
            return plural(delta.num_hours(), "hour");
        }
        if delta < Duration::days(30) {
            return plural(delta.num_days(), "day");
        }
        if delta < Duration::days(365) {
            return plural(delta.num_days() / 30, "month");
        }
        plural(delta.num_days() / 365, "year")
    }
}

fn plural(count: i64, unit: &str) -> String {
    if count == 1 {
        format!("1 {unit} ago")
    } else {
        format!("{count} {unit}s ago")
    }
}

fn parse_datetime(raw: &str) -> Result<DateTime<Utc>, String> {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| naive.and_utc())
        .map_err(|err| format!("invalid datetime {raw:?}: {err}"))
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.to_rfc3339())
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        parse_datetime(&raw)
            .map(Timestamp)
            .map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(text: &str) -> DateTime<Utc> {
        DateTime::parse_from_rfc3339(text)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let parsed = parse_datetime("2026-03-01T12:30:00+02:00").unwrap();
        assert_eq!(parsed, at("2026-03-01T10:30:00Z"));
    }

    #[test]
    fn parses_naive_as_utc() {
        let parsed = parse_datetime("2026-03-01T12:30:00").unwrap();
        assert_eq!(parsed, at("2026-03-01T12:30:00Z"));

        let fractional = parse_datetime("2026-03-01T12:30:00.123456").unwrap();
        assert_eq!(fractional.timestamp(), at("2026-03-01T12:30:00Z").timestamp());
    }

    #[test]
    fn rejects_garbage() {
        assert!(parse_datetime("yesterday").is_err());
        assert!(parse_datetime("2026-03-01").is_err());
    }

    #[test]
    fn serde_roundtrip() {
        let stamp = Timestamp(at("2026-03-01T10:30:00Z"));
        let json = serde_json::to_string(&stamp).unwrap();
        let back: Timestamp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, stamp);
    }

    #[test]
    fn deserializes_backend_naive_form() {
        let stamp: Timestamp = serde_json::from_str(r#""2026-03-01T10:30:00""#).unwrap();
        assert_eq!(stamp, Timestamp(at("2026-03-01T10:30:00Z")));
    }

    #[test]
    fn relative_rendering() {
        let now = at("2026-03-10T12:00:00Z");
        let cases = [
            ("2026-03-10T11:59:30Z", "just now"),
            ("2026-03-10T11:55:00Z", "5 minutes ago"),
            ("2026-03-10T10:59:00Z", "1 hour ago"),
            ("2026-03-09T12:00:00Z", "1 day ago"),
            ("2026-03-03T12:00:00Z", "7 days ago"),
            ("2026-01-10T12:00:00Z", "1 month ago"),
            ("2024-03-10T12:00:00Z", "2 years ago"),
        ];
        for (instant, expected) in cases {
            assert_eq!(Timestamp(at(instant)).relative_to(now), expected);
        }
    }

    #[test]
    fn relative_future_reads_as_just_now() {
        let now = at("2026-03-10T12:00:00Z");
        assert_eq!(
            Timestamp(at("2026-03-10T12:05:00Z")).relative_to(now),
            "just now"
        );
    }

    #[test]
    fn ordering_follows_the_instant() {
        let earlier = Timestamp(at("2026-03-01T00:00:00Z"));
        let later = Timestamp(at("2026-03-02T00:00:00Z"));
        assert!(earlier < later);
    }
}
