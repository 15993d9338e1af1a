//! Workload guard: may a subject take on more teaching hours?
//!
//! Missing data is restrictive here. An unset ceiling counts as a ceiling of
//! zero, so a subject with no recorded ceiling can take on no hours at all.
//! This is the opposite of the availability matcher, where a subject with no
//! windows is available everywhere. Both defaults are intentional; do not
//! align one with the other.
//!
//! Hours are held at minute resolution so that the comparison is exact. Hour
//! values that fall between two minutes are rounded against the subject: load
//! rounds up and the ceiling rounds down.

use serde::{Deserialize, Serialize};

use crate::error::{GuardError, Result};
use crate::verdict::{Rejection, RejectionReason, Verdict};

/// Direction for hour values that do not land on a whole minute.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rounding {
    /// For committed and requested load.
    Up,
    /// For ceilings and tolerances.
    Down,
}

/// Values this close to a whole minute are taken as that minute, so float
/// noise in inputs such as 0.1h does not cost a minute.
const SNAP_MINUTES: f64 = 1e-6;

/// Convert a non-negative hour count to whole minutes.
///
/// # Errors
/// Returns `GuardError::InvalidHours` for negative, NaN or infinite values,
/// or values too large to represent.
pub fn hours_to_minutes(hours: f64, rounding: Rounding) -> Result<u32> {
    if !hours.is_finite() || hours < 0.0 {
        return Err(GuardError::InvalidHours(hours.to_string()));
    }
    let raw = hours * 60.0;
    let nearest = raw.round();
    let minutes = if (raw - nearest).abs() < SNAP_MINUTES {
        nearest
    } else {
        match rounding {
            Rounding::Up => raw.ceil(),
            Rounding::Down => raw.floor(),
        }
    };
    if minutes > f64::from(u32::MAX) {
        return Err(GuardError::InvalidHours(hours.to_string()));
    }
    Ok(minutes as u32)
}

/// Committed load and contractual ceiling for one subject.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(try_from = "WorkloadHours", into = "WorkloadHours")]
pub struct WorkloadState {
    pub committed_minutes: u32,
    pub ceiling_minutes: u32,
}

impl WorkloadState {
    pub fn new(committed_minutes: u32, ceiling_minutes: u32) -> Self {
        Self {
            committed_minutes,
            ceiling_minutes,
        }
    }

    /// Build from hour counts; absent values are 0. The committed load
    /// rounds up and the ceiling rounds down.
    pub fn from_hours(current_hours: Option<f64>, max_hours: Option<f64>) -> Result<Self> {
        Ok(Self::new(
            hours_to_minutes(current_hours.unwrap_or(0.0), Rounding::Up)?,
            hours_to_minutes(max_hours.unwrap_or(0.0), Rounding::Down)?,
        ))
    }
}

/// Serialized form: hour counts, both optional.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
struct WorkloadHours {
    #[serde(default)]
    current_hours: Option<f64>,
    #[serde(default)]
    max_hours: Option<f64>,
}

impl TryFrom<WorkloadHours> for WorkloadState {
    type Error = GuardError;

    fn try_from(value: WorkloadHours) -> Result<Self> {
        WorkloadState::from_hours(value.current_hours, value.max_hours)
    }
}

impl From<WorkloadState> for WorkloadHours {
    fn from(value: WorkloadState) -> Self {
        WorkloadHours {
            current_hours: Some(f64::from(value.committed_minutes) / 60.0),
            max_hours: Some(f64::from(value.ceiling_minutes) / 60.0),
        }
    }
}

/// Whether a workload constraint is binding ("dure") or may be bent ("souple").
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ConstraintHardness {
    #[default]
    #[serde(rename = "dure", alias = "hard")]
    Hard,
    #[serde(rename = "souple", alias = "soft")]
    Soft,
}

/// Decides whether a projected load is acceptable against a ceiling.
pub trait WorkloadPolicy {
    fn allows(&self, projected_minutes: u64, ceiling_minutes: u32) -> bool;
}

/// `projected <= ceiling`, exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct HardCap;

impl WorkloadPolicy for HardCap {
    fn allows(&self, projected_minutes: u64, ceiling_minutes: u32) -> bool {
        projected_minutes <= u64::from(ceiling_minutes)
    }
}

/// Allows overshooting the ceiling by up to `tolerance_minutes`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SoftCap {
    pub tolerance_minutes: u32,
}

impl WorkloadPolicy for SoftCap {
    fn allows(&self, projected_minutes: u64, ceiling_minutes: u32) -> bool {
        projected_minutes <= u64::from(ceiling_minutes) + u64::from(self.tolerance_minutes)
    }
}

/// Check adding `additional_minutes` to `state` under `policy`.
pub fn check_workload_with<P: WorkloadPolicy + ?Sized>(
    policy: &P,
    state: &WorkloadState,
    additional_minutes: u32,
) -> Verdict {
    let projected = u64::from(state.committed_minutes) + u64::from(additional_minutes);
    if policy.allows(projected, state.ceiling_minutes) {
        return Ok(());
    }

    Err(Rejection::new(
        RejectionReason::OverCapacity,
        format!(
            "load would reach {} minutes, ceiling is {} minutes",
            projected, state.ceiling_minutes
        ),
    ))
}

/// [`check_workload_with`] under the hard cap.
pub fn check_workload(state: &WorkloadState, additional_minutes: u32) -> Verdict {
    check_workload_with(&HardCap, state, additional_minutes)
}

/// Hard-cap check with the addition given in hours.
///
/// # Errors
/// Returns `GuardError::InvalidHours` if `additional_hours` is negative or not finite.
pub fn is_workload_within_limit(state: &WorkloadState, additional_hours: f64) -> Result<bool> {
    let additional = hours_to_minutes(additional_hours, Rounding::Up)?;
    Ok(check_workload(state, additional).is_ok())
}
