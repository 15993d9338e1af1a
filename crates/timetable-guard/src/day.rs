//! Day-of-week labels.
//!
//! Scheduling records tag slots with a day label. The platform stores French
//! names ("lundi", "mardi", ...); English names and three-letter abbreviations
//! are accepted too. Labels are parsed into [`chrono::Weekday`] so that day
//! comparisons are exact enum comparisons rather than string matches.

use chrono::Weekday;

use crate::error::{GuardError, Result};

/// Parse a day label, case-insensitively.
///
/// # Errors
/// Returns `GuardError::InvalidDay` for any label that names no weekday.
pub fn parse_day(label: &str) -> Result<Weekday> {
    let day = match label.trim().to_lowercase().as_str() {
        "lundi" | "monday" | "mon" => Weekday::Mon,
        "mardi" | "tuesday" | "tue" => Weekday::Tue,
        "mercredi" | "wednesday" | "wed" => Weekday::Wed,
        "jeudi" | "thursday" | "thu" => Weekday::Thu,
        "vendredi" | "friday" | "fri" => Weekday::Fri,
        "samedi" | "saturday" | "sat" => Weekday::Sat,
        "dimanche" | "sunday" | "sun" => Weekday::Sun,
        _ => return Err(GuardError::InvalidDay(label.to_string())),
    };
    Ok(day)
}

/// The stored (French) label for a weekday.
pub fn day_label(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "lundi",
        Weekday::Tue => "mardi",
        Weekday::Wed => "mercredi",
        Weekday::Thu => "jeudi",
        Weekday::Fri => "vendredi",
        Weekday::Sat => "samedi",
        Weekday::Sun => "dimanche",
    }
}

/// Serde adapter: `#[serde(with = "crate::day::label")]` on a `Weekday` field.
pub mod label {
    use chrono::Weekday;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(day: &Weekday, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(super::day_label(*day))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Weekday, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_day(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn french_and_english_labels_agree() {
        assert_eq!(parse_day("lundi").unwrap(), parse_day("Monday").unwrap());
        assert!(parse_day(" MER ").is_err());
        assert_eq!(parse_day("wed").unwrap(), Weekday::Wed);
    }

    #[test]
    fn label_roundtrips_through_parse() {
        for day in [Weekday::Mon, Weekday::Thu, Weekday::Sun] {
            assert_eq!(parse_day(day_label(day)).unwrap(), day);
        }
    }
}
