//! Tests for room/activity compatibility.

use timetable_guard::compatibility::check_compatibility;
use timetable_guard::{is_resource_compatible, Activity, CompatibilityMatrix, RejectionReason, Room};

fn room(capacity: u32, category: &str) -> Room {
    Room {
        capacity,
        category: category.to_string(),
    }
}

fn activity(headcount: u32, category: &str) -> Activity {
    Activity {
        headcount,
        category: category.to_string(),
    }
}

#[test]
fn too_small_room_is_incompatible() {
    assert!(!is_resource_compatible(&room(20, "standard"), &activity(25, "td")));
}

#[test]
fn lab_fits_practical_work() {
    assert!(is_resource_compatible(&room(30, "laboratoire"), &activity(20, "tp")));
    assert!(is_resource_compatible(&room(30, "informatique"), &activity(20, "tp")));
}

#[test]
fn capacity_equal_to_headcount_fits() {
    assert!(is_resource_compatible(&room(25, "standard"), &activity(25, "td")));
}

#[test]
fn category_mismatch_is_incompatible_even_with_room_to_spare() {
    assert!(!is_resource_compatible(&room(200, "amphitheatre"), &activity(20, "td")));
    assert!(!is_resource_compatible(&room(40, "standard"), &activity(20, "tp")));
}

#[test]
fn lectures_accept_amphitheatres_and_standard_rooms() {
    assert!(is_resource_compatible(&room(300, "amphitheatre"), &activity(250, "cours")));
    assert!(is_resource_compatible(&room(40, "standard"), &activity(30, "cours")));
}

#[test]
fn workshops_accept_studio_rooms() {
    for category in ["atelier", "arts", "musique"] {
        assert!(is_resource_compatible(&room(15, category), &activity(12, "atelier")));
    }
}

#[test]
fn unknown_activity_requires_standard_room() {
    assert!(is_resource_compatible(&room(30, "standard"), &activity(10, "conference")));
    assert!(!is_resource_compatible(&room(30, "laboratoire"), &activity(10, "conference")));
}

#[test]
fn capacity_failure_is_reported_first() {
    let matrix = CompatibilityMatrix::default();
    let rejection =
        check_compatibility(&matrix, &room(10, "laboratoire"), &activity(20, "td")).unwrap_err();
    assert_eq!(rejection.reason, RejectionReason::IncompatibleResource);
    assert!(rejection.message.contains("seats 10"));
}

#[test]
fn injected_table_extends_categories() {
    let matrix = CompatibilityMatrix::default().with_requirement("seminaire", ["salle_reunion"]);
    assert!(
        check_compatibility(&matrix, &room(12, "salle_reunion"), &activity(10, "seminaire"))
            .is_ok()
    );
    // Built-in entries survive.
    assert!(check_compatibility(&matrix, &room(30, "laboratoire"), &activity(20, "tp")).is_ok());
}

#[test]
fn injected_table_can_override_a_category() {
    let matrix =
        CompatibilityMatrix::default().with_requirement("td", ["standard", "informatique"]);
    assert!(check_compatibility(&matrix, &room(30, "informatique"), &activity(20, "td")).is_ok());
}

#[test]
fn empty_table_sends_everything_to_the_fallback() {
    let matrix = CompatibilityMatrix::empty();
    assert!(check_compatibility(&matrix, &room(30, "standard"), &activity(20, "tp")).is_ok());
    assert!(check_compatibility(&matrix, &room(30, "laboratoire"), &activity(20, "tp")).is_err());
}
