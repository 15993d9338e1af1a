//! The configured engine: the contract operations consumed by the API layer.

use chrono::Weekday;

use crate::availability::check_availability;
use crate::compatibility::{check_compatibility, Activity, Room};
use crate::config::EngineConfig;
use crate::conflict::{check_conflict, has_conflict, ScheduledEntry};
use crate::error::{GuardError, Result};
use crate::period::{check_period, Period};
use crate::request::CheckRequest;
use crate::slot::{check_time_slot, SlotBounds, TimeSlot};
use crate::subject::Subject;
use crate::verdict::{Outcome, Verdict};
use crate::workload::{
    check_workload, check_workload_with, hours_to_minutes, ConstraintHardness, Rounding,
    SoftCap, WorkloadState,
};

/// Stateless validator bound to an [`EngineConfig`].
///
/// Every method is a pure function of its arguments and the configuration,
/// so an `Engine` can be shared freely between threads.
#[derive(Debug, Clone, Default)]
pub struct Engine {
    config: EngineConfig,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn check_period(&self, period: &Period) -> Verdict {
        check_period(period, self.config.max_period_days)
    }

    /// # Errors
    /// Returns `GuardError::InvalidDateTime` when either end cannot be parsed.
    pub fn validate_period(&self, start: &str, end: &str) -> Result<bool> {
        Ok(self.check_period(&Period::parse(start, end)?).is_ok())
    }

    /// Check a slot against the bounds configured for `activity_category`.
    pub fn check_time_slot(&self, slot: &TimeSlot, activity_category: Option<&str>) -> Verdict {
        check_time_slot(slot, self.config.slot_bounds_for(activity_category))
    }

    /// Missing bounds fall back to the configured defaults (30 and 240 minutes
    /// unless overridden).
    ///
    /// # Errors
    /// Returns `GuardError::InvalidTimeFormat` when either end cannot be parsed.
    pub fn validate_time_slot(
        &self,
        start: &str,
        end: &str,
        min_duration: Option<u32>,
        max_duration: Option<u32>,
    ) -> Result<bool> {
        let slot = TimeSlot::parse(start, end)?;
        let bounds = self.bounds(None, min_duration, max_duration);
        Ok(check_time_slot(&slot, bounds).is_ok())
    }

    pub fn is_available(&self, subject: &Subject, day: Weekday, slot: &TimeSlot) -> bool {
        check_availability(&subject.availability, day, slot).is_ok()
    }

    pub fn check_compatibility(&self, room: &Room, activity: &Activity) -> Verdict {
        check_compatibility(&self.config.compatibility, room, activity)
    }

    pub fn is_resource_compatible(&self, room: &Room, activity: &Activity) -> bool {
        self.check_compatibility(room, activity).is_ok()
    }

    /// # Errors
    /// Returns `GuardError::InvalidHours` if `additional_hours` is negative or not finite.
    pub fn is_workload_within_limit(
        &self,
        subject: &Subject,
        additional_hours: f64,
    ) -> Result<bool> {
        let additional = hours_to_minutes(additional_hours, Rounding::Up)?;
        Ok(check_workload(&subject.workload, additional).is_ok())
    }

    pub fn has_conflict(&self, existing: &[ScheduledEntry], candidate: &ScheduledEntry) -> bool {
        has_conflict(existing, candidate)
    }

    /// Evaluate one request into its outcome.
    ///
    /// # Errors
    /// Only workload requests can fail here: invalid hour values, or a
    /// tolerance on a "dure" constraint. Every other field was validated when
    /// the request was deserialized.
    pub fn evaluate(&self, request: &CheckRequest) -> Result<Outcome> {
        let verdict = match request {
            CheckRequest::Period { start, end } => self.check_period(&Period::new(*start, *end)),
            CheckRequest::TimeSlot {
                start,
                end,
                min_duration,
                max_duration,
                activity_category,
            } => {
                let bounds =
                    self.bounds(activity_category.as_deref(), *min_duration, *max_duration);
                check_time_slot(&TimeSlot::new(*start, *end), bounds)
            }
            CheckRequest::Availability {
                windows,
                day,
                start,
                end,
            } => check_availability(windows, *day, &TimeSlot::new(*start, *end)),
            CheckRequest::Compatibility { room, activity } => {
                self.check_compatibility(room, activity)
            }
            CheckRequest::Workload {
                current_hours,
                max_hours,
                additional_hours,
                hardness,
                tolerance_hours,
            } => {
                let state = WorkloadState::from_hours(*current_hours, *max_hours)?;
                let additional = hours_to_minutes(*additional_hours, Rounding::Up)?;
                match (hardness, tolerance_hours) {
                    (ConstraintHardness::Hard, None) => check_workload(&state, additional),
                    (ConstraintHardness::Hard, Some(_)) => {
                        return Err(GuardError::InvalidRequest(
                            "tolerance_hours requires \"hardness\": \"souple\"".to_string(),
                        ));
                    }
                    (ConstraintHardness::Soft, tolerance) => {
                        let policy = SoftCap {
                            tolerance_minutes: hours_to_minutes(
                                tolerance.unwrap_or(0.0),
                                Rounding::Down,
                            )?,
                        };
                        check_workload_with(&policy, &state, additional)
                    }
                }
            }
            CheckRequest::Conflict {
                existing,
                candidate,
            } => check_conflict(existing, candidate),
        };

        tracing::debug!(check = request.kind(), valid = verdict.is_ok(), "request evaluated");
        Ok(verdict.into())
    }

    fn bounds(
        &self,
        activity_category: Option<&str>,
        min_duration: Option<u32>,
        max_duration: Option<u32>,
    ) -> SlotBounds {
        let configured = self.config.slot_bounds_for(activity_category);
        SlotBounds {
            min_minutes: min_duration.unwrap_or(configured.min_minutes),
            max_minutes: max_duration.unwrap_or(configured.max_minutes),
        }
    }
}
