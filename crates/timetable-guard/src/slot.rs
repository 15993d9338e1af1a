//! Single-day time slots and their validation.

use serde::{Deserialize, Serialize};

use crate::error::{GuardError, Result};
use crate::time::TimePoint;
use crate::verdict::{Rejection, RejectionReason, Verdict};

pub const DEFAULT_MIN_DURATION: u32 = 30;
pub const DEFAULT_MAX_DURATION: u32 = 240;

/// A window `[start, end)` within one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: TimePoint,
    pub end: TimePoint,
}

impl TimeSlot {
    pub fn new(start: TimePoint, end: TimePoint) -> Self {
        Self { start, end }
    }

    /// Parse both ends. The slot itself is not validated.
    pub fn parse(start: &str, end: &str) -> Result<Self> {
        Ok(Self::new(start.parse()?, end.parse()?))
    }

    /// Signed duration in minutes; negative when the slot is inverted.
    pub fn duration_minutes(&self) -> i64 {
        i64::from(self.end.minutes()) - i64::from(self.start.minutes())
    }
}

/// Inclusive duration limits for a slot, in minutes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlotBounds {
    pub min_minutes: u32,
    pub max_minutes: u32,
}

impl SlotBounds {
    /// # Errors
    /// Returns `GuardError::InvalidConfig` when `min_minutes > max_minutes`.
    pub fn new(min_minutes: u32, max_minutes: u32) -> Result<Self> {
        let bounds = Self {
            min_minutes,
            max_minutes,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    pub(crate) fn validate(&self) -> Result<()> {
        if self.min_minutes > self.max_minutes {
            return Err(GuardError::InvalidConfig(format!(
                "slot bounds minimum {} exceeds maximum {}",
                self.min_minutes, self.max_minutes
            )));
        }
        Ok(())
    }
}

impl Default for SlotBounds {
    fn default() -> Self {
        Self {
            min_minutes: DEFAULT_MIN_DURATION,
            max_minutes: DEFAULT_MAX_DURATION,
        }
    }
}

/// Check ordering and duration limits. Every condition must hold.
///
/// Both ends are [`TimePoint`]s, which never exceed 23:59, so a slot that
/// starts before it ends always stays within one day.
pub fn check_time_slot(slot: &TimeSlot, bounds: SlotBounds) -> Verdict {
    let start = slot.start.minutes();
    let end = slot.end.minutes();

    if start >= end {
        return Err(Rejection::new(
            RejectionReason::InvertedRange,
            format!("slot end {} does not come after start {}", slot.end, slot.start),
        ));
    }

    let duration = end - start;
    if duration < bounds.min_minutes || duration > bounds.max_minutes {
        return Err(Rejection::new(
            RejectionReason::OutOfBounds,
            format!(
                "slot lasts {} minutes, outside {}..={}",
                duration, bounds.min_minutes, bounds.max_minutes
            ),
        ));
    }

    Ok(())
}

/// Validate a slot given as text. Missing bounds default to 30 and 240 minutes.
///
/// # Errors
/// Returns `GuardError::InvalidTimeFormat` when either end cannot be parsed.
/// A parsable but illegal slot is `Ok(false)`.
pub fn validate_time_slot(
    start: &str,
    end: &str,
    min_duration: Option<u32>,
    max_duration: Option<u32>,
) -> Result<bool> {
    let slot = TimeSlot::parse(start, end)?;
    let bounds = SlotBounds {
        min_minutes: min_duration.unwrap_or(DEFAULT_MIN_DURATION),
        max_minutes: max_duration.unwrap_or(DEFAULT_MAX_DURATION),
    };
    Ok(check_time_slot(&slot, bounds).is_ok())
}
