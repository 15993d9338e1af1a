//! Calendar period validation (e.g. a term or a booking range).
//!
//! Instants are timezone-naive and compared as opaque, totally ordered values.
//! Offsets in RFC 3339 input are normalized to UTC before the offset is dropped.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, NaiveTime};

use crate::error::{GuardError, Result};
use crate::verdict::{Rejection, RejectionReason, Verdict};

/// Longest allowed period, in days. 365 days is exactly 365 × 24 × 60 × 60 × 1000 ms.
pub const DEFAULT_MAX_PERIOD_DAYS: u32 = 365;

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
];

/// A calendar range between two naive instants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Period {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Period {
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Parse both ends with [`parse_datetime`].
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self::new(parse_datetime(start)?, parse_datetime(end)?))
    }

    pub fn span(&self) -> Duration {
        self.end - self.start
    }
}

/// Parse a date-time as a naive instant.
///
/// Accepts RFC 3339 (normalized to UTC), `YYYY-MM-DDTHH:MM[:SS[.fff]]`,
/// `YYYY-MM-DD HH:MM:SS[.fff]`, and a bare `YYYY-MM-DD` (midnight).
///
/// # Errors
/// Returns `GuardError::InvalidDateTime` if no accepted format matches, which
/// includes calendar-impossible values such as `2026-02-30`.
pub fn parse_datetime(s: &str) -> Result<NaiveDateTime> {
    let trimmed = s.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.naive_utc());
    }
    for format in DATETIME_FORMATS {
        if let Ok(ndt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Ok(ndt);
        }
    }
    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .map(|date| date.and_time(NaiveTime::MIN))
        .map_err(|_| GuardError::InvalidDateTime(s.to_string()))
}

/// Check a period against ordering and the maximum span.
pub fn check_period(period: &Period, max_days: u32) -> Verdict {
    if period.start >= period.end {
        return Err(Rejection::new(
            RejectionReason::InvertedRange,
            format!(
                "period end {} does not come after start {}",
                period.end, period.start
            ),
        ));
    }

    let max_span = Duration::days(i64::from(max_days));
    if period.span() > max_span {
        return Err(Rejection::new(
            RejectionReason::OutOfBounds,
            format!(
                "period spans {} days, more than the {} day limit",
                period.span().num_days(),
                max_days
            ),
        ));
    }

    Ok(())
}

/// Validate a period given as text, with the default one-year cap.
///
/// # Errors
/// Returns `GuardError::InvalidDateTime` when either end cannot be parsed.
/// A parsable but illegal period is `Ok(false)`.
pub fn validate_period(start: &str, end: &str) -> Result<bool> {
    let period = Period::parse(start, end)?;
    Ok(check_period(&period, DEFAULT_MAX_PERIOD_DAYS).is_ok())
}

/// Serde adapter: `#[serde(with = "crate::period::text")]` on a `NaiveDateTime`
/// field, accepting every format [`parse_datetime`] does.
pub mod text {
    use chrono::NaiveDateTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&dt.format("%Y-%m-%dT%H:%M:%S").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<NaiveDateTime, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_datetime(&raw).map_err(serde::de::Error::custom)
    }
}
