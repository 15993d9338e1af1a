//! Room/activity compatibility.
//!
//! A room fits an activity when it seats the expected headcount AND its
//! category is one the activity's category accepts. The category table is a
//! value ([`CompatibilityMatrix`]) injected by the caller, so an institution
//! can add or override categories without touching the check itself.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::verdict::{Rejection, RejectionReason, Verdict};

/// Room category accepted for any activity category the table does not know.
pub const FALLBACK_ROOM_CATEGORY: &str = "standard";

/// A physical room as seen by the compatibility check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub capacity: u32,
    pub category: String,
}

/// An activity (course session) that needs a room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activity {
    /// Expected number of attendees.
    pub headcount: u32,
    pub category: String,
}

fn normalize(label: &str) -> String {
    label.trim().to_lowercase()
}

/// Activity category → set of acceptable room categories.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "MatrixConfig", into = "MatrixConfig")]
pub struct CompatibilityMatrix {
    requirements: BTreeMap<String, BTreeSet<String>>,
    fallback: BTreeSet<String>,
}

impl CompatibilityMatrix {
    /// A matrix with no entries; every activity falls back to "standard" rooms.
    pub fn empty() -> Self {
        Self {
            requirements: BTreeMap::new(),
            fallback: BTreeSet::from([FALLBACK_ROOM_CATEGORY.to_string()]),
        }
    }

    /// Set (or replace) the accepted room categories for an activity category.
    pub fn with_requirement<I, S>(mut self, activity_category: &str, room_categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.requirements.insert(
            normalize(activity_category),
            room_categories.into_iter().map(|c| normalize(c.as_ref())).collect(),
        );
        self
    }

    /// Replace the set used for unknown activity categories.
    pub fn with_fallback<I, S>(mut self, room_categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.fallback = room_categories.into_iter().map(|c| normalize(c.as_ref())).collect();
        self
    }

    /// Room categories accepted for `activity_category`.
    pub fn accepted_rooms(&self, activity_category: &str) -> &BTreeSet<String> {
        self.requirements
            .get(&normalize(activity_category))
            .unwrap_or(&self.fallback)
    }

    pub fn accepts(&self, activity_category: &str, room_category: &str) -> bool {
        self.accepted_rooms(activity_category)
            .contains(&normalize(room_category))
    }

    /// Known activity categories with their accepted room categories, sorted.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &BTreeSet<String>)> {
        self.requirements.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn fallback(&self) -> &BTreeSet<String> {
        &self.fallback
    }
}

impl Default for CompatibilityMatrix {
    /// The built-in table: practical work in labs, workshops in studios,
    /// lectures in standard rooms or amphitheatres, tutorials in standard rooms.
    fn default() -> Self {
        CompatibilityMatrix::empty()
            .with_requirement("tp", ["laboratoire", "informatique", "atelier"])
            .with_requirement("atelier", ["atelier", "arts", "musique"])
            .with_requirement("cours", ["standard", "amphitheatre"])
            .with_requirement("td", ["standard"])
    }
}

/// On-disk form of the matrix.
///
/// Entries in `requirements` are layered over the built-in table unless
/// `include_defaults` is false.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct MatrixConfig {
    #[serde(default = "include_defaults")]
    include_defaults: bool,
    #[serde(default)]
    requirements: BTreeMap<String, Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    fallback: Option<Vec<String>>,
}

fn include_defaults() -> bool {
    true
}

impl From<MatrixConfig> for CompatibilityMatrix {
    fn from(config: MatrixConfig) -> Self {
        let mut matrix = if config.include_defaults {
            CompatibilityMatrix::default()
        } else {
            CompatibilityMatrix::empty()
        };
        for (activity, rooms) in &config.requirements {
            matrix = matrix.with_requirement(activity, rooms);
        }
        if let Some(fallback) = config.fallback {
            matrix = matrix.with_fallback(fallback);
        }
        matrix
    }
}

impl From<CompatibilityMatrix> for MatrixConfig {
    fn from(matrix: CompatibilityMatrix) -> Self {
        MatrixConfig {
            include_defaults: false,
            requirements: matrix
                .requirements
                .into_iter()
                .map(|(k, v)| (k, v.into_iter().collect()))
                .collect(),
            fallback: Some(matrix.fallback.into_iter().collect()),
        }
    }
}

/// Check capacity, then category. Both must pass.
pub fn check_compatibility(
    matrix: &CompatibilityMatrix,
    room: &Room,
    activity: &Activity,
) -> Verdict {
    if room.capacity < activity.headcount {
        return Err(Rejection::new(
            RejectionReason::IncompatibleResource,
            format!(
                "room seats {} but the activity expects {}",
                room.capacity, activity.headcount
            ),
        ));
    }

    if !matrix.accepts(&activity.category, &room.category) {
        let accepted: Vec<&str> = matrix
            .accepted_rooms(&activity.category)
            .iter()
            .map(String::as_str)
            .collect();
        return Err(Rejection::new(
            RejectionReason::IncompatibleResource,
            format!(
                "room category '{}' is not accepted for '{}' (accepted: {})",
                room.category,
                activity.category,
                accepted.join(", ")
            ),
        ));
    }

    Ok(())
}

/// [`check_compatibility`] against the built-in table.
pub fn is_resource_compatible(room: &Room, activity: &Activity) -> bool {
    check_compatibility(&CompatibilityMatrix::default(), room, activity).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_are_case_insensitive() {
        let matrix = CompatibilityMatrix::default();
        assert!(matrix.accepts("TP", " Laboratoire "));
    }

    #[test]
    fn unknown_activity_falls_back_to_standard() {
        let matrix = CompatibilityMatrix::default();
        assert!(matrix.accepts("seminaire", "standard"));
        assert!(!matrix.accepts("seminaire", "amphitheatre"));
    }
}
