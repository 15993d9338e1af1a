//! # timetable-guard
//!
//! Deterministic constraint and conflict validation for academic timetables.
//!
//! The engine decides whether a proposed period, time slot, teacher or room
//! assignment, or workload change is legal before the caller persists it. It
//! owns no state and performs no I/O: every check is a pure function of its
//! inputs, returning a boolean or a [`Verdict`] that names the violated rule.
//! Unparsable input is the only hard error ([`GuardError`]).
//!
//! ## Modules
//!
//! - [`time`] — "HH:MM" text to minutes since midnight
//! - [`interval`] — open overlap and closed containment
//! - [`period`] — calendar ranges (ordering, one-year cap)
//! - [`slot`] — single-day slots (ordering, duration limits)
//! - [`availability`] — slot inside a subject's availability windows
//! - [`compatibility`] — room capacity and category against an activity
//! - [`workload`] — committed hours against a contractual ceiling
//! - [`conflict`] — overlap with existing bookings on the same day
//! - [`day`] — day-of-week labels
//! - [`config`] — engine configuration (TOML/JSON)
//! - [`request`] — tagged check requests for the CLI and WASM layers
//! - [`engine`] — the configured facade
//! - [`error`] / [`verdict`] — hard errors and rule violations

pub mod availability;
pub mod compatibility;
pub mod config;
pub mod conflict;
pub mod day;
pub mod engine;
pub mod error;
pub mod interval;
pub mod period;
pub mod request;
pub mod slot;
pub mod subject;
pub mod time;
pub mod verdict;
pub mod workload;

pub use availability::{is_available, AvailabilityWindow, WindowKind};
pub use compatibility::{is_resource_compatible, Activity, CompatibilityMatrix, Room};
pub use config::EngineConfig;
pub use conflict::{find_all_conflicts, find_conflict, has_conflict, ScheduledEntry};
pub use day::parse_day;
pub use engine::Engine;
pub use error::GuardError;
pub use period::{validate_period, Period};
pub use request::{parse_requests, CheckRequest};
pub use slot::{validate_time_slot, SlotBounds, TimeSlot};
pub use subject::Subject;
pub use time::{time_to_minutes, TimePoint};
pub use verdict::{Outcome, Rejection, RejectionReason, Verdict};
pub use workload::{is_workload_within_limit, WorkloadState};
