//! Absolute points in time.
//!
//! The service reports instants as epoch seconds, sometimes fractional, and
//! the reference SDKs hold them at millisecond precision. `Timestamp` keeps
//! exactly that: signed milliseconds since the Unix epoch, always UTC.

use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::Error;

/// Bound on `|millis|` below which a fractional instant survives the trip
/// through an `f64` of epoch seconds. Fifteen significant digits print and
/// parse back exactly, and the rounding error after rescaling stays under
/// half a millisecond.
pub const EXACT_FRACTIONAL_MILLIS: i64 = 1_000_000_000_000_000;

/// An absolute instant at millisecond precision, normalized to UTC.
///
/// Ordering and equality follow the instant, never the zone it was built
/// from: two `DateTime`s in different offsets naming the same instant
/// produce equal timestamps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Timestamp {
    millis: i64,
}

impl Timestamp {
    /// 1970-01-01T00:00:00Z.
    pub const UNIX_EPOCH: Self = Self { millis: 0 };

    /// Creates a timestamp for the current instant.
    #[must_use]
    pub fn now() -> Self {
        Self::from(Utc::now())
    }

    /// Creates a timestamp from milliseconds since the Unix epoch.
    #[must_use]
    pub const fn from_millis(millis: i64) -> Self {
        Self { millis }
    }

    /// Creates a timestamp from whole seconds since the Unix epoch.
    #[must_use]
    pub const fn from_secs(secs: i64) -> Self {
        Self {
            millis: secs.saturating_mul(1000),
        }
    }

    /// Creates a timestamp from fractional epoch seconds, rounding to the
    /// nearest millisecond.
    pub fn from_secs_f64(secs: f64) -> Result<Self, Error> {
        if !secs.is_finite() {
            return Err(Error::InvalidTimestamp(format!("{secs} is not a finite number")));
        }
        let millis = (secs * 1000.0).round();
        if millis < i64::MIN as f64 || millis > i64::MAX as f64 {
            return Err(Error::InvalidTimestamp(format!("{secs} is out of range")));
        }
        Ok(Self {
            millis: millis as i64,
        })
    }

    /// Parses an RFC 3339 string, normalizing its offset to UTC.
    pub fn parse_rfc3339(s: &str) -> Result<Self, Error> {
        let parsed = DateTime::parse_from_rfc3339(s)?;
        Ok(Self::from(parsed))
    }

    /// Returns milliseconds since the Unix epoch.
    #[must_use]
    pub const fn as_millis(&self) -> i64 {
        self.millis
    }

    /// Returns fractional seconds since the Unix epoch.
    #[must_use]
    pub fn as_secs_f64(&self) -> f64 {
        self.millis as f64 / 1000.0
    }

    /// Converts to a `chrono` UTC datetime, if the instant is representable.
    #[must_use]
    pub fn to_datetime(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.millis)
    }
}

impl<Tz: TimeZone> From<DateTime<Tz>> for Timestamp {
    fn from(value: DateTime<Tz>) -> Self {
        Self {
            millis: value.timestamp_millis(),
        }
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(dt) => f.write_str(&dt.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => write!(f, "{}ms", self.millis),
        }
    }
}

impl FromStr for Timestamp {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_rfc3339(s)
    }
}

/// Whole seconds encode as an integer at any range. Fractional instants
/// encode as `f64` seconds, which is exact only while `|millis|` stays below
/// [`EXACT_FRACTIONAL_MILLIS`] (about the year 33658); past that the value
/// is refused rather than rounded.
impl Serialize for Timestamp {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        if self.millis % 1000 == 0 {
            serializer.serialize_i64(self.millis / 1000)
        } else if self.millis.unsigned_abs() < EXACT_FRACTIONAL_MILLIS.unsigned_abs() {
            serializer.serialize_f64(self.as_secs_f64())
        } else {
            Err(serde::ser::Error::custom(format!(
                "{}ms has a fractional second too large to encode exactly",
                self.millis
            )))
        }
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(TimestampVisitor)
    }
}

struct TimestampVisitor;

impl Visitor<'_> for TimestampVisitor {
    type Value = Timestamp;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("epoch seconds or an RFC 3339 string")
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
        Ok(Timestamp::from_secs(v))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
        let secs = i64::try_from(v).map_err(|_| E::custom(format!("{v} is out of range")))?;
        Ok(Timestamp::from_secs(secs))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
        Timestamp::from_secs_f64(v).map_err(E::custom)
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
        Timestamp::parse_rfc3339(v).map_err(E::custom)
    }
}
