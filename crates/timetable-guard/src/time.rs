//! Time-of-day arithmetic on a linear minute-of-day scale.
//!
//! Every other component compares times through [`TimePoint`], which is a
//! minute count in `[0, 1440)`. Text is parsed once, at this boundary, and a
//! malformed string is an [`GuardError::InvalidTimeFormat`] error rather than
//! a value that silently compares false later on.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{GuardError, Result};

/// A time of day at minute resolution.
///
/// Ordering follows the minute scale, so `"08:00" < "08:01" < "09:00"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimePoint(u32);

impl TimePoint {
    /// Midnight, the start of the scale.
    pub const MIDNIGHT: TimePoint = TimePoint(0);

    /// Build a time point from hours and minutes.
    ///
    /// # Errors
    /// Returns `GuardError::InvalidTimeFormat` if `hours > 23` or `minutes > 59`.
    pub fn from_hm(hours: u32, minutes: u32) -> Result<Self> {
        if hours > 23 || minutes > 59 {
            return Err(GuardError::InvalidTimeFormat(format!(
                "{:02}:{:02}",
                hours, minutes
            )));
        }
        Ok(TimePoint(hours * 60 + minutes))
    }

    /// Minutes since midnight.
    pub fn minutes(self) -> u32 {
        self.0
    }

    pub fn hours(self) -> u32 {
        self.0 / 60
    }

    pub fn minute_of_hour(self) -> u32 {
        self.0 % 60
    }
}

/// Parse an all-digit component whose length lies in `min_len..=max_len`.
fn digits(part: &str, min_len: usize, max_len: usize) -> Option<u32> {
    if part.len() < min_len || part.len() > max_len || !part.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    part.parse().ok()
}

impl FromStr for TimePoint {
    type Err = GuardError;

    /// Accepts `H:MM`, `HH:MM` and `HH:MM:SS`. Seconds are truncated.
    fn from_str(s: &str) -> Result<Self> {
        let invalid = || GuardError::InvalidTimeFormat(s.to_string());

        let mut parts = s.trim().split(':');
        let hours = parts.next().and_then(|p| digits(p, 1, 2)).ok_or_else(invalid)?;
        let minutes = parts.next().and_then(|p| digits(p, 2, 2)).ok_or_else(invalid)?;
        let seconds = match parts.next() {
            None => 0,
            Some(p) => digits(p, 2, 2).ok_or_else(invalid)?,
        };
        if parts.next().is_some() || seconds > 59 {
            return Err(invalid());
        }

        TimePoint::from_hm(hours, minutes).map_err(|_| invalid())
    }
}

impl TryFrom<String> for TimePoint {
    type Error = GuardError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<TimePoint> for String {
    fn from(value: TimePoint) -> Self {
        value.to_string()
    }
}

impl fmt::Display for TimePoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hours(), self.minute_of_hour())
    }
}

/// Convert an `"HH:MM"` string to minutes since midnight.
///
/// # Errors
/// Returns `GuardError::InvalidTimeFormat` when the text is not two
/// colon-separated integers within the hour and minute ranges.
pub fn time_to_minutes(time: &str) -> Result<u32> {
    time.parse::<TimePoint>().map(TimePoint::minutes)
}
