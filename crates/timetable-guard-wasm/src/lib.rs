//! WASM bindings for timetable-guard.
//!
//! Exposes the engine's contract operations to the JavaScript API layer via
//! `wasm-bindgen`. Scalars cross the boundary as plain values; records
//! (windows, rooms, bookings, requests) are passed as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p timetable-guard-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target nodejs --out-dir packages/timetable-guard-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/timetable_guard_wasm.wasm
//! ```

use serde::Serialize;
use timetable_guard::{
    parse_day, parse_requests, Activity, AvailabilityWindow, Engine, Room, ScheduledEntry,
    Subject, TimeSlot, WorkloadState,
};
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
struct ConflictDto {
    day: String,
    start: String,
    end: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    label: Option<String>,
    overlap_minutes: u32,
}

// ---------------------------------------------------------------------------
// Boundary logic, kept free of JsValue so it runs on native targets too
// ---------------------------------------------------------------------------

fn parse_json<T: serde::de::DeserializeOwned>(json: &str, what: &str) -> Result<T, String> {
    serde_json::from_str(json).map_err(|e| format!("Invalid {} JSON: {}", what, e))
}

fn validate_period_impl(start: &str, end: &str) -> Result<bool, String> {
    Engine::default()
        .validate_period(start, end)
        .map_err(|e| e.to_string())
}

fn validate_time_slot_impl(
    start: &str,
    end: &str,
    min_duration: Option<u32>,
    max_duration: Option<u32>,
) -> Result<bool, String> {
    Engine::default()
        .validate_time_slot(start, end, min_duration, max_duration)
        .map_err(|e| e.to_string())
}

fn is_available_impl(
    windows_json: &str,
    day: &str,
    start: &str,
    end: &str,
) -> Result<bool, String> {
    let windows: Vec<AvailabilityWindow> = parse_json(windows_json, "windows")?;
    let day = parse_day(day).map_err(|e| e.to_string())?;
    let slot = TimeSlot::parse(start, end).map_err(|e| e.to_string())?;
    let subject = Subject::new(windows, WorkloadState::default());
    Ok(Engine::default().is_available(&subject, day, &slot))
}

fn is_resource_compatible_impl(room_json: &str, activity_json: &str) -> Result<bool, String> {
    let room: Room = parse_json(room_json, "room")?;
    let activity: Activity = parse_json(activity_json, "activity")?;
    Ok(Engine::default().is_resource_compatible(&room, &activity))
}

fn is_workload_within_limit_impl(
    current_hours: Option<f64>,
    max_hours: Option<f64>,
    additional_hours: f64,
) -> Result<bool, String> {
    let workload =
        WorkloadState::from_hours(current_hours, max_hours).map_err(|e| e.to_string())?;
    let subject = Subject::new(Vec::new(), workload);
    Engine::default()
        .is_workload_within_limit(&subject, additional_hours)
        .map_err(|e| e.to_string())
}

fn has_conflict_impl(existing_json: &str, candidate_json: &str) -> Result<bool, String> {
    let existing: Vec<ScheduledEntry> = parse_json(existing_json, "existing entries")?;
    let candidate: ScheduledEntry = parse_json(candidate_json, "candidate entry")?;
    Ok(Engine::default().has_conflict(&existing, &candidate))
}

fn find_all_conflicts_impl(existing_json: &str, candidate_json: &str) -> Result<String, String> {
    let existing: Vec<ScheduledEntry> = parse_json(existing_json, "existing entries")?;
    let candidate: ScheduledEntry = parse_json(candidate_json, "candidate entry")?;

    let dtos: Vec<ConflictDto> = timetable_guard::find_all_conflicts(&existing, &candidate)
        .iter()
        .map(|c| ConflictDto {
            day: timetable_guard::day::day_label(c.existing.day).to_string(),
            start: c.existing.start.to_string(),
            end: c.existing.end.to_string(),
            label: c.existing.label.clone(),
            overlap_minutes: c.overlap_minutes,
        })
        .collect();

    serde_json::to_string(&dtos).map_err(|e| format!("Serialization error: {}", e))
}

fn evaluate_impl(requests_json: &str) -> Result<String, String> {
    let engine = Engine::default();
    let (requests, batched) = parse_requests(requests_json).map_err(|e| e.to_string())?;
    let outcomes = requests
        .iter()
        .map(|r| engine.evaluate(r))
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| e.to_string())?;

    let rendered = if batched {
        serde_json::to_string(&outcomes)
    } else {
        serde_json::to_string(&outcomes[0])
    };
    rendered.map_err(|e| format!("Serialization error: {}", e))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

fn js_err(message: String) -> JsValue {
    JsValue::from_str(&message)
}

/// Validate a calendar period (start < end, at most one year).
///
/// Throws on unparsable date-times; returns `false` for a legal-format but
/// illegal period.
#[wasm_bindgen(js_name = "validatePeriod")]
pub fn validate_period(start: &str, end: &str) -> Result<bool, JsValue> {
    validate_period_impl(start, end).map_err(js_err)
}

/// Validate a single-day slot. Bounds default to 30 and 240 minutes.
#[wasm_bindgen(js_name = "validateTimeSlot")]
pub fn validate_time_slot(
    start: &str,
    end: &str,
    min_duration: Option<u32>,
    max_duration: Option<u32>,
) -> Result<bool, JsValue> {
    validate_time_slot_impl(start, end, min_duration, max_duration).map_err(js_err)
}

/// `windows_json` is a JSON array of `{day, start, end, kind}` objects; an
/// empty array means the subject is always available.
#[wasm_bindgen(js_name = "isAvailable")]
pub fn is_available(
    windows_json: &str,
    day: &str,
    start: &str,
    end: &str,
) -> Result<bool, JsValue> {
    is_available_impl(windows_json, day, start, end).map_err(js_err)
}

/// `room_json` is `{capacity, category}`; `activity_json` is `{headcount, category}`.
#[wasm_bindgen(js_name = "isResourceCompatible")]
pub fn is_resource_compatible(room_json: &str, activity_json: &str) -> Result<bool, JsValue> {
    is_resource_compatible_impl(room_json, activity_json).map_err(js_err)
}

/// Absent current or maximum hours count as 0.
#[wasm_bindgen(js_name = "isWorkloadWithinLimit")]
pub fn is_workload_within_limit(
    current_hours: Option<f64>,
    max_hours: Option<f64>,
    additional_hours: f64,
) -> Result<bool, JsValue> {
    is_workload_within_limit_impl(current_hours, max_hours, additional_hours).map_err(js_err)
}

/// `existing_json` is a JSON array of `{day, start, end, label?}`; `candidate_json`
/// is one such object. Returns `true` when the candidate must be rejected.
#[wasm_bindgen(js_name = "hasConflict")]
pub fn has_conflict(existing_json: &str, candidate_json: &str) -> Result<bool, JsValue> {
    has_conflict_impl(existing_json, candidate_json).map_err(js_err)
}

/// Every existing entry that clashes with the candidate, as a JSON array of
/// `{day, start, end, label?, overlap_minutes}`.
#[wasm_bindgen(js_name = "findAllConflicts")]
pub fn find_all_conflicts(existing_json: &str, candidate_json: &str) -> Result<String, JsValue> {
    find_all_conflicts_impl(existing_json, candidate_json).map_err(js_err)
}

/// Evaluate one tagged check request (or an array of them) and return the
/// outcome(s) as JSON.
#[wasm_bindgen]
pub fn evaluate(requests_json: &str) -> Result<String, JsValue> {
    evaluate_impl(requests_json).map_err(js_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contract_examples() {
        assert_eq!(validate_time_slot_impl("08:00", "10:00", None, None), Ok(true));
        assert_eq!(validate_time_slot_impl("08:00", "08:10", None, None), Ok(false));
        assert_eq!(validate_period_impl("2026-09-01", "2027-06-30"), Ok(true));
        assert_eq!(is_available_impl("[]", "lundi", "08:00", "09:00"), Ok(true));
        assert_eq!(
            is_resource_compatible_impl(
                r#"{"capacity":30,"category":"laboratoire"}"#,
                r#"{"headcount":20,"category":"tp"}"#
            ),
            Ok(true)
        );
        assert_eq!(is_workload_within_limit_impl(None, None, 1.0), Ok(false));
        assert_eq!(
            has_conflict_impl(
                r#"[{"day":"lundi","start":"08:00","end":"10:00"}]"#,
                r#"{"day":"mardi","start":"09:00","end":"11:00"}"#
            ),
            Ok(false)
        );
    }

    #[test]
    fn malformed_input_is_an_error_message() {
        let err = validate_time_slot_impl("8h", "10:00", None, None).unwrap_err();
        assert!(err.contains("Invalid time format"));
        let err = is_available_impl("[]", "funday", "08:00", "09:00").unwrap_err();
        assert!(err.contains("Invalid day"));
        let err = has_conflict_impl("not json", "{}").unwrap_err();
        assert!(err.starts_with("Invalid existing entries JSON"));
    }

    #[test]
    fn conflicts_are_reported_with_overlap() {
        let json = find_all_conflicts_impl(
            r#"[{"day":"lundi","start":"08:00","end":"10:00","label":"math-101"}]"#,
            r#"{"day":"lundi","start":"09:00","end":"11:00"}"#,
        )
        .unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value[0]["overlap_minutes"], 60);
        assert_eq!(value[0]["label"], "math-101");
        assert_eq!(value[0]["day"], "lundi");
    }

    #[test]
    fn evaluate_single_request() {
        let json =
            evaluate_impl(r#"{"check":"time_slot","start":"23:00","end":"01:00"}"#).unwrap();
        assert_eq!(
            json,
            concat!(
                r#"{"valid":false,"reason":"inverted_range","#,
                r#""message":"slot end 01:00 does not come after start 23:00"}"#
            )
        );
    }
}
