//! Detect clashes between a candidate booking and a resource's existing bookings.
//!
//! Two entries clash when they fall on the same day and their slots overlap.
//! Adjacent entries (one ends exactly when the other starts) are NOT conflicts.
//! An entry whose end does not come after its start occupies no time, so it
//! never clashes; [`check_conflict`] rejects such a candidate as an inverted
//! range instead.

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::day::day_label;
use crate::interval;
use crate::slot::TimeSlot;
use crate::time::TimePoint;
use crate::verdict::{Rejection, RejectionReason, Verdict};

/// A committed booking for a teacher or a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledEntry {
    #[serde(with = "crate::day::label")]
    pub day: Weekday,
    pub start: TimePoint,
    pub end: TimePoint,
    /// Caller-side reference (course, booking id), echoed in diagnostics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl ScheduledEntry {
    pub fn new(day: Weekday, slot: TimeSlot) -> Self {
        Self {
            day,
            start: slot.start,
            end: slot.end,
            label: None,
        }
    }

    pub fn slot(&self) -> TimeSlot {
        TimeSlot::new(self.start, self.end)
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// True when the entry occupies no time (`end <= start`).
    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    pub fn clashes_with(&self, other: &ScheduledEntry) -> bool {
        self.day == other.day
            && !self.is_empty()
            && !other.is_empty()
            && interval::overlaps(self.start, self.end, other.start, other.end)
    }

    fn describe(&self) -> String {
        let base = format!("{} {}-{}", day_label(self.day), self.start, self.end);
        match &self.label {
            Some(label) => format!("{} ({})", base, label),
            None => base,
        }
    }
}

/// A clash found by [`find_all_conflicts`].
#[derive(Debug, Clone, PartialEq)]
pub struct Conflict<'a> {
    pub existing: &'a ScheduledEntry,
    pub overlap_minutes: u32,
}

/// First existing entry that clashes with `candidate`. Stops at the first hit.
pub fn find_conflict<'a>(
    existing: &'a [ScheduledEntry],
    candidate: &ScheduledEntry,
) -> Option<&'a ScheduledEntry> {
    existing.iter().find(|entry| entry.clashes_with(candidate))
}

/// True means the candidate must be rejected.
pub fn has_conflict(existing: &[ScheduledEntry], candidate: &ScheduledEntry) -> bool {
    find_conflict(existing, candidate).is_some()
}

pub fn check_conflict(existing: &[ScheduledEntry], candidate: &ScheduledEntry) -> Verdict {
    if candidate.is_empty() {
        return Err(Rejection::new(
            RejectionReason::InvertedRange,
            format!("{} does not end after it starts", candidate.describe()),
        ));
    }
    match find_conflict(existing, candidate) {
        None => Ok(()),
        Some(entry) => Err(Rejection::new(
            RejectionReason::Conflict,
            format!(
                "{} overlaps existing {}",
                candidate.describe(),
                entry.describe()
            ),
        )),
    }
}

/// Every clashing entry with the number of shared minutes, in input order.
pub fn find_all_conflicts<'a>(
    existing: &'a [ScheduledEntry],
    candidate: &ScheduledEntry,
) -> Vec<Conflict<'a>> {
    existing
        .iter()
        .filter(|entry| entry.clashes_with(candidate))
        .map(|entry| Conflict {
            existing: entry,
            overlap_minutes: interval::overlap_len(
                entry.start.minutes(),
                entry.end.minutes(),
                candidate.start.minutes(),
                candidate.end.minutes(),
            ),
        })
        .collect()
}
