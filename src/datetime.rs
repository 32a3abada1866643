//! Wire-format timestamps.
//!
//! ReportPortal encodes timestamps as UTC strings with millisecond
//! precision, e.g. `2019-09-17T09:14:31.786Z`. This module converts between
//! that wire format and [`DateTime<Utc>`], and provides serde adapters so
//! model fields carry the typed value directly:
//!
//! ```ignore
//! #[serde(with = "crate::datetime")]
//! pub start_time: DateTime<Utc>,
//!
//! #[serde(default, with = "crate::datetime::option")]
//! pub end_time: Option<DateTime<Utc>>,
//! ```
//!
//! Conversion is strict in both directions: [`parse`] accepts exactly the
//! wire format and [`render`] reproduces it, so `render(parse(s)) == s` for
//! every valid wire string.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serializer};

use crate::error::{ReportPortalError, Result};

/// The canonical wire format: UTC, millisecond precision, trailing `Z`.
pub const WIRE_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Parse a wire-format timestamp string.
///
/// # Errors
///
/// Returns [`ReportPortalError::InvalidTimestamp`] if the string is not in
/// the canonical wire format.
pub fn parse(value: &str) -> Result<DateTime<Utc>> {
    let parsed = NaiveDateTime::parse_from_str(value, WIRE_FORMAT)
        .map(|naive| naive.and_utc())
        .map_err(|_| ReportPortalError::InvalidTimestamp(value.to_string()))?;

    // chrono treats the fractional part (and some digit variants) as
    // optional when parsing; only strings that render back unchanged
    // are canonical.
    if render(&parsed) != value {
        return Err(ReportPortalError::InvalidTimestamp(value.to_string()));
    }

    Ok(parsed)
}

/// Render a timestamp to the wire format.
pub fn render(value: &DateTime<Utc>) -> String {
    value.format(WIRE_FORMAT).to_string()
}

/// Serialize a [`DateTime<Utc>`] as a wire-format string.
pub fn serialize<S>(value: &DateTime<Utc>, serializer: S) -> core::result::Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&render(value))
}

/// Deserialize a [`DateTime<Utc>`] from a wire-format string.
pub fn deserialize<'de, D>(deserializer: D) -> core::result::Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;
    parse(&value).map_err(de::Error::custom)
}

/// Serde adapter for `Option<DateTime<Utc>>` fields.
///
/// Pair with `#[serde(default)]` so a missing field deserializes to `None`.
pub mod option {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Serialize an optional timestamp as a wire-format string or null.
    pub fn serialize<S>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> core::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(value) => serializer.serialize_some(&super::render(value)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an optional timestamp from a wire-format string or null.
    pub fn deserialize<'de, D>(
        deserializer: D,
    ) -> core::result::Result<Option<DateTime<Utc>>, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Option::<String>::deserialize(deserializer)? {
            Some(value) => super::parse(&value).map(Some).map_err(de::Error::custom),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Datelike, Timelike};
    use serde::{Deserialize, Serialize};

    use super::*;

    #[test]
    fn test_parse_wire_timestamp() {
        let parsed = parse("2019-09-17T09:14:31.786Z").unwrap();
        assert_eq!(parsed.year(), 2019);
        assert_eq!(parsed.month(), 9);
        assert_eq!(parsed.day(), 17);
        assert_eq!(parsed.hour(), 9);
        assert_eq!(parsed.minute(), 14);
        assert_eq!(parsed.second(), 31);
        assert_eq!(parsed.timestamp_subsec_millis(), 786);
    }

    #[test]
    fn test_round_trip_reproduces_wire_string() {
        for original in [
            "2019-09-17T09:14:31.786Z",
            "2016-01-01T00:00:00.000Z",
            "2024-12-31T23:59:59.999Z",
        ] {
            let round_tripped = render(&parse(original).unwrap());
            assert_eq!(round_tripped, original);
        }
    }

    #[test]
    fn test_render_pads_milliseconds() {
        let value = parse("2020-06-15T12:30:45.050Z").unwrap();
        assert_eq!(render(&value), "2020-06-15T12:30:45.050Z");
    }

    #[test]
    fn test_parse_rejects_non_canonical_strings() {
        for bad in [
            "",
            "not a timestamp",
            "2019-09-17T09:14:31Z",           // missing milliseconds
            "2019-09-17 09:14:31.786Z",       // space separator
            "2019-09-17T09:14:31.786+00:00",  // explicit offset
            "2019-09-17T09:14:31.7865Z",      // too many fraction digits
            "02019-09-17T09:14:31.786Z",      // non-canonical year digits
            "2019-13-01T00:00:00.000Z",       // invalid month
            "2019-09-17T09:14:31.786Ztrail",  // trailing garbage
        ] {
            let err = parse(bad).unwrap_err();
            assert!(
                matches!(err, ReportPortalError::InvalidTimestamp(ref v) if v == bad),
                "expected InvalidTimestamp for {:?}, got {:?}",
                bad,
                err
            );
        }
    }

    #[derive(Debug, Serialize, Deserialize)]
    struct Stamped {
        #[serde(with = "crate::datetime")]
        at: DateTime<Utc>,
        #[serde(default, with = "crate::datetime::option")]
        ended: Option<DateTime<Utc>>,
    }

    #[test]
    fn test_serde_adapter_round_trip() {
        let json = r#"{"at":"2019-09-17T09:14:31.786Z","ended":"2019-09-17T10:00:00.000Z"}"#;
        let stamped: Stamped = serde_json::from_str(json).unwrap();
        assert_eq!(render(&stamped.at), "2019-09-17T09:14:31.786Z");
        assert_eq!(serde_json::to_string(&stamped).unwrap(), json);
    }

    #[test]
    fn test_serde_adapter_optional_field() {
        let stamped: Stamped = serde_json::from_str(r#"{"at":"2019-09-17T09:14:31.786Z"}"#).unwrap();
        assert!(stamped.ended.is_none());

        let stamped: Stamped =
            serde_json::from_str(r#"{"at":"2019-09-17T09:14:31.786Z","ended":null}"#).unwrap();
        assert!(stamped.ended.is_none());
    }

    #[test]
    fn test_serde_adapter_rejects_bad_timestamp() {
        let result = serde_json::from_str::<Stamped>(r#"{"at":"2019-09-17"}"#);
        assert!(result.is_err());
    }
}
