//! Interval algebra: the two comparisons every higher-level check is built on.
//!
//! Boundary semantics are fixed here and nowhere else:
//!
//! - [`overlaps`] is open. Intervals that only touch (`e1 == s2`) do NOT overlap.
//! - [`contains`] is closed. An inner interval may share either endpoint with the outer one.
//!
//! Both are generic over the scale, so the same rules apply to minute-of-day
//! values and to calendar date-times.

/// True iff `[s1, e1)` and `[s2, e2)` share at least one instant.
///
/// Equivalent to `s1 < e2 && e1 > s2`.
pub fn overlaps<T: PartialOrd>(s1: T, e1: T, s2: T, e2: T) -> bool {
    s1 < e2 && e1 > s2
}

/// True iff `[inner_start, inner_end]` lies within `[outer_start, outer_end]`.
pub fn contains<T: PartialOrd>(outer_start: T, outer_end: T, inner_start: T, inner_end: T) -> bool {
    inner_start >= outer_start && inner_end <= outer_end
}

/// Length of the part two minute intervals share, or 0 when they do not overlap.
///
/// An inverted interval (`end < start`) has no length and shares nothing.
pub fn overlap_len(s1: u32, e1: u32, s2: u32, e2: u32) -> u32 {
    if !overlaps(s1, e1, s2, e2) {
        return 0;
    }
    e1.min(e2).saturating_sub(s1.max(s2))
}
