//! Tests for the workload guard.

use timetable_guard::workload::{
    check_workload, check_workload_with, hours_to_minutes, HardCap, Rounding, SoftCap,
    WorkloadPolicy,
};
use timetable_guard::{
    is_workload_within_limit, Engine, GuardError, RejectionReason, Subject, WorkloadState,
};

fn state(current_hours: f64, max_hours: f64) -> WorkloadState {
    WorkloadState::from_hours(Some(current_hours), Some(max_hours)).unwrap()
}

#[test]
fn addition_within_ceiling_is_allowed() {
    assert!(is_workload_within_limit(&state(10.0, 20.0), 5.0).unwrap());
}

#[test]
fn reaching_the_ceiling_exactly_is_allowed() {
    assert!(is_workload_within_limit(&state(18.0, 20.0), 2.0).unwrap());
}

#[test]
fn exceeding_the_ceiling_is_rejected() {
    assert!(!is_workload_within_limit(&state(18.0, 20.0), 2.5).unwrap());
    let rejection = check_workload(&state(18.0, 20.0), 150).unwrap_err();
    assert_eq!(rejection.reason, RejectionReason::OverCapacity);
}

#[test]
fn fractional_hours_compare_exactly() {
    // 0.1 + 0.2 must not drift past 0.3.
    assert!(is_workload_within_limit(&state(0.1, 0.3), 0.2).unwrap());
}

#[test]
fn unset_ceiling_allows_nothing() {
    // Restrictive on missing data, unlike availability.
    let unset = WorkloadState::from_hours(None, None).unwrap();
    assert_eq!(unset, WorkloadState::default());
    assert!(!is_workload_within_limit(&unset, 1.0).unwrap());
    assert!(is_workload_within_limit(&unset, 0.0).unwrap());
}

#[test]
fn subject_without_data_is_available_but_cannot_take_hours() {
    let engine = Engine::default();
    let subject = Subject::default();
    let slot = timetable_guard::TimeSlot::parse("08:00", "10:00").unwrap();
    assert!(engine.is_available(&subject, chrono::Weekday::Mon, &slot));
    assert!(!engine.is_workload_within_limit(&subject, 2.0).unwrap());
}

#[test]
fn invalid_hours_are_errors() {
    assert!(matches!(
        hours_to_minutes(-1.0, Rounding::Up),
        Err(GuardError::InvalidHours(_))
    ));
    assert!(hours_to_minutes(f64::NAN, Rounding::Up).is_err());
    assert!(hours_to_minutes(f64::INFINITY, Rounding::Down).is_err());
    assert!(is_workload_within_limit(&state(1.0, 2.0), -0.5).is_err());
}

#[test]
fn whole_minutes_convert_exactly_in_both_directions() {
    for rounding in [Rounding::Up, Rounding::Down] {
        assert_eq!(hours_to_minutes(1.5, rounding).unwrap(), 90);
        assert_eq!(hours_to_minutes(0.3, rounding).unwrap(), 18);
        assert_eq!(hours_to_minutes(0.1, rounding).unwrap(), 6);
    }
}

#[test]
fn partial_minutes_round_against_the_subject() {
    assert_eq!(hours_to_minutes(0.005, Rounding::Up).unwrap(), 1);
    assert_eq!(hours_to_minutes(0.005, Rounding::Down).unwrap(), 0);
    assert_eq!(hours_to_minutes(10.004, Rounding::Up).unwrap(), 601);
    assert_eq!(hours_to_minutes(10.004, Rounding::Down).unwrap(), 600);
}

#[test]
fn sub_minute_addition_to_an_unset_ceiling_is_rejected() {
    let unset = WorkloadState::from_hours(None, None).unwrap();
    assert!(!is_workload_within_limit(&unset, 0.005).unwrap());
}

#[test]
fn load_already_past_the_ceiling_is_rejected() {
    assert!(!is_workload_within_limit(&state(10.004, 10.0), 0.0).unwrap());
}

#[test]
fn sub_minute_addition_to_a_full_load_is_rejected() {
    assert!(!is_workload_within_limit(&state(10.0, 10.0), 0.008).unwrap());
}

#[test]
fn fractional_ceiling_rounds_down() {
    let partial = state(0.0, 10.004);
    assert_eq!(partial.ceiling_minutes, 600);
    assert!(is_workload_within_limit(&partial, 10.0).unwrap());
}

#[test]
fn soft_cap_tolerates_a_bounded_overshoot() {
    let policy = SoftCap {
        tolerance_minutes: 60,
    };
    assert!(check_workload_with(&policy, &state(19.0, 20.0), 120).is_ok());
    assert!(check_workload_with(&policy, &state(19.0, 20.0), 121).is_err());
}

#[test]
fn custom_policies_plug_in() {
    struct Unlimited;
    impl WorkloadPolicy for Unlimited {
        fn allows(&self, _projected: u64, _ceiling: u32) -> bool {
            true
        }
    }
    assert!(check_workload_with(&Unlimited, &WorkloadState::default(), 6000).is_ok());
    assert!(check_workload_with(&HardCap, &WorkloadState::default(), 1).is_err());
}

#[test]
fn workload_serializes_as_hours() {
    let parsed: WorkloadState =
        serde_json::from_str(r#"{"current_hours": 12.5, "max_hours": 192}"#).unwrap();
    assert_eq!(parsed, WorkloadState::new(750, 11520));

    let empty: WorkloadState = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, WorkloadState::default());

    assert!(serde_json::from_str::<WorkloadState>(r#"{"max_hours": -3}"#).is_err());
}
