//! Property-based tests for time arithmetic and interval algebra.

use proptest::prelude::*;
use timetable_guard::interval::{contains, overlap_len, overlaps};
use timetable_guard::time_to_minutes;

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

/// A non-empty minute interval within the day.
fn arb_interval() -> impl Strategy<Value = (u32, u32)> {
    (0u32..1439).prop_flat_map(|start| (Just(start), (start + 1)..=1440))
}

proptest! {
    #![proptest_config(config())]

    #[test]
    fn minutes_stay_within_the_day(h in 0u32..24, m in 0u32..60) {
        let minutes = time_to_minutes(&format!("{:02}:{:02}", h, m)).unwrap();
        prop_assert!(minutes < 1440);
        prop_assert_eq!(minutes, h * 60 + m);
    }

    #[test]
    fn minutes_are_strictly_increasing(
        h1 in 0u32..24,
        m1 in 0u32..60,
        h2 in 0u32..24,
        m2 in 0u32..60,
    ) {
        let a = time_to_minutes(&format!("{:02}:{:02}", h1, m1)).unwrap();
        let b = time_to_minutes(&format!("{:02}:{:02}", h2, m2)).unwrap();
        prop_assert_eq!((h1, m1).cmp(&(h2, m2)), a.cmp(&b));
    }

    #[test]
    fn interval_overlaps_itself((s, e) in arb_interval()) {
        prop_assert!(overlaps(s, e, s, e));
    }

    #[test]
    fn touching_intervals_never_overlap((s, e) in arb_interval(), len in 1u32..120) {
        prop_assert!(!overlaps(s, e, e, e + len));
        prop_assert!(!overlaps(e, e + len, s, e));
    }

    #[test]
    fn overlap_is_symmetric((s1, e1) in arb_interval(), (s2, e2) in arb_interval()) {
        prop_assert_eq!(overlaps(s1, e1, s2, e2), overlaps(s2, e2, s1, e1));
        prop_assert_eq!(overlap_len(s1, e1, s2, e2), overlap_len(s2, e2, s1, e1));
    }

    #[test]
    fn containment_implies_overlap((s1, e1) in arb_interval(), (s2, e2) in arb_interval()) {
        if contains(s1, e1, s2, e2) {
            prop_assert!(overlaps(s1, e1, s2, e2));
            prop_assert_eq!(overlap_len(s1, e1, s2, e2), e2 - s2);
        }
    }

    #[test]
    fn verdicts_are_deterministic((s1, e1) in arb_interval(), (s2, e2) in arb_interval()) {
        prop_assert_eq!(overlaps(s1, e1, s2, e2), overlaps(s1, e1, s2, e2));
        prop_assert_eq!(contains(s1, e1, s2, e2), contains(s1, e1, s2, e2));
    }
}
