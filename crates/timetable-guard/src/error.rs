//! Error types for timetable-guard operations.
//!
//! Errors are reserved for input the engine cannot interpret at all. A slot
//! that is too short or a room that is too small is not an error; it is a
//! [`Rejection`](crate::verdict::Rejection).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuardError {
    #[error("Invalid time format: '{0}' (expected HH:MM)")]
    InvalidTimeFormat(String),

    #[error("Invalid date-time: '{0}'")]
    InvalidDateTime(String),

    #[error("Invalid day of week: '{0}'")]
    InvalidDay(String),

    #[error("Invalid hours value: {0}")]
    InvalidHours(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, GuardError>;
