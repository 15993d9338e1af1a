//! Verdicts: why a well-formed proposal was refused.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Category of a business-rule violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectionReason {
    /// End does not come after start.
    InvertedRange,
    /// A time outside the day, a duration outside its bounds, or a period
    /// longer than the allowed span.
    OutOfBounds,
    /// No availability window covers the proposed slot.
    Unavailable,
    /// Room capacity or category does not fit the activity.
    IncompatibleResource,
    /// The workload ceiling would be exceeded.
    OverCapacity,
    /// The slot overlaps an existing booking on the same day.
    Conflict,
}

impl RejectionReason {
    pub fn as_str(self) -> &'static str {
        match self {
            RejectionReason::InvertedRange => "inverted_range",
            RejectionReason::OutOfBounds => "out_of_bounds",
            RejectionReason::Unavailable => "unavailable",
            RejectionReason::IncompatibleResource => "incompatible_resource",
            RejectionReason::OverCapacity => "over_capacity",
            RejectionReason::Conflict => "conflict",
        }
    }
}

impl fmt::Display for RejectionReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A refused proposal: the reason code plus a human-readable description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rejection {
    pub reason: RejectionReason,
    pub message: String,
}

impl Rejection {
    pub fn new(reason: RejectionReason, message: impl Into<String>) -> Self {
        let rejection = Self {
            reason,
            message: message.into(),
        };
        tracing::debug!(
            reason = %rejection.reason,
            message = %rejection.message,
            "proposal rejected"
        );
        rejection
    }
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.reason, self.message)
    }
}

/// `Ok(())` when the proposal is legal, `Err(rejection)` otherwise.
pub type Verdict = std::result::Result<(), Rejection>;

/// Serializable form of a [`Verdict`], returned across the CLI and WASM boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    pub valid: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<RejectionReason>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl Outcome {
    pub fn valid() -> Self {
        Self {
            valid: true,
            reason: None,
            message: None,
        }
    }
}

impl From<Verdict> for Outcome {
    fn from(verdict: Verdict) -> Self {
        match verdict {
            Ok(()) => Outcome::valid(),
            Err(rejection) => Outcome {
                valid: false,
                reason: Some(rejection.reason),
                message: Some(rejection.message),
            },
        }
    }
}
