//! Self-describing check requests, shared by the CLI and the WASM bindings.
//!
//! A request is a JSON (or TOML) object tagged by `"check"`:
//!
//! ```json
//! {"check": "conflict",
//!  "existing": [{"day": "lundi", "start": "08:00", "end": "10:00"}],
//!  "candidate": {"day": "lundi", "start": "09:00", "end": "11:00"}}
//! ```
//!
//! Times, days and date-times are parsed during deserialization, so a request
//! that deserializes is well-formed.

use chrono::{NaiveDateTime, Weekday};
use serde::{Deserialize, Serialize};

use crate::availability::AvailabilityWindow;
use crate::compatibility::{Activity, Room};
use crate::conflict::ScheduledEntry;
use crate::error::Result;
use crate::time::TimePoint;
use crate::workload::ConstraintHardness;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum CheckRequest {
    Period {
        #[serde(with = "crate::period::text")]
        start: NaiveDateTime,
        #[serde(with = "crate::period::text")]
        end: NaiveDateTime,
    },
    TimeSlot {
        start: TimePoint,
        end: TimePoint,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min_duration: Option<u32>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max_duration: Option<u32>,
        /// Selects configured bounds when min/max are not given explicitly.
        #[serde(default, skip_serializing_if = "Option::is_none")]
        activity_category: Option<String>,
    },
    Availability {
        #[serde(default)]
        windows: Vec<AvailabilityWindow>,
        #[serde(with = "crate::day::label")]
        day: Weekday,
        start: TimePoint,
        end: TimePoint,
    },
    Compatibility {
        room: Room,
        activity: Activity,
    },
    Workload {
        #[serde(default)]
        current_hours: Option<f64>,
        #[serde(default)]
        max_hours: Option<f64>,
        additional_hours: f64,
        #[serde(default)]
        hardness: ConstraintHardness,
        /// Allowed overshoot for a "souple" constraint. Setting it on a "dure"
        /// constraint makes the request invalid.
        #[serde(default)]
        tolerance_hours: Option<f64>,
    },
    Conflict {
        #[serde(default)]
        existing: Vec<ScheduledEntry>,
        candidate: ScheduledEntry,
    },
}

impl CheckRequest {
    pub fn kind(&self) -> &'static str {
        match self {
            CheckRequest::Period { .. } => "period",
            CheckRequest::TimeSlot { .. } => "time_slot",
            CheckRequest::Availability { .. } => "availability",
            CheckRequest::Compatibility { .. } => "compatibility",
            CheckRequest::Workload { .. } => "workload",
            CheckRequest::Conflict { .. } => "conflict",
        }
    }
}

/// Parse a JSON document holding either one request object or an array of them.
///
/// Returns the requests and whether the document was an array.
pub fn parse_requests(json: &str) -> Result<(Vec<CheckRequest>, bool)> {
    let value: serde_json::Value = serde_json::from_str(json)?;
    if value.is_array() {
        let batch: Vec<CheckRequest> = serde_json::from_value(value)?;
        return Ok((batch, true));
    }
    let single: CheckRequest = serde_json::from_value(value)?;
    Ok((vec![single], false))
}
