//! Availability matching: does a proposed slot fall inside a subject's
//! declared availability for that day?
//!
//! The policy has two regimes:
//!
//! - **Open world.** A subject with no windows at all is unconstrained and
//!   every slot is accepted. Missing data is not a constraint.
//! - **Closed world.** As soon as one window exists, a slot is accepted only
//!   if a single window on the same day, of kind "available", contains it.
//!   Two adjoining windows never combine to cover a slot.
//!
//! The workload guard makes the opposite choice for missing data; see
//! [`crate::workload`].

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::day::day_label;
use crate::interval;
use crate::slot::TimeSlot;
use crate::time::TimePoint;
use crate::verdict::{Rejection, RejectionReason, Verdict};

/// What a window declares about its time range.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum WindowKind {
    /// The subject may be scheduled here ("disponible" / "available").
    #[default]
    Available,
    /// Any other label (e.g. "indisponible", "preference"). Never matches.
    Other(String),
}

impl From<String> for WindowKind {
    fn from(value: String) -> Self {
        match value.trim().to_lowercase().as_str() {
            "disponible" | "available" => WindowKind::Available,
            _ => WindowKind::Other(value),
        }
    }
}

impl From<WindowKind> for String {
    fn from(value: WindowKind) -> Self {
        match value {
            WindowKind::Available => "disponible".to_string(),
            WindowKind::Other(label) => label,
        }
    }
}

/// A subject-declared interval on one day of the week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AvailabilityWindow {
    #[serde(with = "crate::day::label")]
    pub day: Weekday,
    pub start: TimePoint,
    pub end: TimePoint,
    #[serde(default)]
    pub kind: WindowKind,
}

impl AvailabilityWindow {
    pub fn available(day: Weekday, start: TimePoint, end: TimePoint) -> Self {
        Self {
            day,
            start,
            end,
            kind: WindowKind::Available,
        }
    }

    /// True when this window alone makes `slot` on `day` schedulable.
    pub fn covers(&self, day: Weekday, slot: &TimeSlot) -> bool {
        self.day == day
            && self.kind == WindowKind::Available
            && interval::contains(self.start, self.end, slot.start, slot.end)
    }
}

/// Check `slot` on `day` against a subject's windows.
pub fn check_availability(
    windows: &[AvailabilityWindow],
    day: Weekday,
    slot: &TimeSlot,
) -> Verdict {
    if windows.is_empty() {
        return Ok(());
    }
    if windows.iter().any(|w| w.covers(day, slot)) {
        return Ok(());
    }

    Err(Rejection::new(
        RejectionReason::Unavailable,
        format!(
            "no availability window on {} contains {}-{}",
            day_label(day),
            slot.start,
            slot.end
        ),
    ))
}

pub fn is_available(windows: &[AvailabilityWindow], day: Weekday, slot: &TimeSlot) -> bool {
    check_availability(windows, day, slot).is_ok()
}
