use thiserror::Error;

// Re-export a simple Result alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

use crate::core::types::{DayOfWeek, TimeOfDay, TimeWindow};

/// Error set for the availability/scheduling core.
#[derive(Error, Debug)]
pub enum Error {
    // ---- Local validation ----------------------------------------------------
    /// A time string does not parse as HH:MM (or HH:MM:SS at the wire).
    #[error("Invalid time format: '{input}'. Expected 'HH:MM'.")]
    InvalidTimeFormat { input: String },

    /// A window ends at or before it starts.
    #[error("Invalid window on {day}: end {end} must be later than start {start}.")]
    InvalidRange {
        day: DayOfWeek,
        start: TimeOfDay,
        end: TimeOfDay,
    },

    /// Two windows on the same day intersect.
    #[error("Overlapping windows on {day}: {second} starts before {first} ends.")]
    OverlappingWindows {
        day: DayOfWeek,
        first: TimeWindow,
        second: TimeWindow,
    },

    // ---- Remote collaborator -------------------------------------------------
    /// Schedule fetch failed; the editor recovers with a local default.
    #[error("Could not load the schedule: {0}")]
    FetchFailed(String),

    /// Schedule save rejected; the edit session is preserved.
    #[error("Could not save the schedule: {0}")]
    SaveFailed(String),

    // ---- Editor session ------------------------------------------------------
    /// Edit or save attempted while a remote call is in flight.
    #[error("The schedule editor is {0}; edits are disabled.")]
    EditorBusy(&'static str),

    // ---- Parsing / Config / Plumbing -----------------------------------------
    /// Malformed boundary data (unknown day numbers, bad enum values, etc.)
    #[error("Parse error: {0}")]
    Parse(String),

    /// Any issue initializing/reading config (file missing, invalid JSON, etc.)
    #[error("Config error: {0}")]
    Config(String),

    /// IO passthrough (read/write files, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serde JSON passthrough (config and wire payload decode/encode).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ----------------------- Convenience constructors ----------------------------

impl Error {
    /// Helper to create a time-format error from the offending input.
    pub fn time_format<S: Into<String>>(input: S) -> Self {
        Error::InvalidTimeFormat {
            input: input.into(),
        }
    }
    /// Helper to create a generic parse error.
    pub fn parse<S: Into<String>>(msg: S) -> Self {
        Error::Parse(msg.into())
    }
    /// Helper to create a generic config error.
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Error::Config(msg.into())
    }
    /// Helper to wrap a backend message as a fetch failure.
    pub fn fetch<S: Into<String>>(msg: S) -> Self {
        Error::FetchFailed(msg.into())
    }
    /// Helper to wrap a backend message as a save failure.
    pub fn save<S: Into<String>>(msg: S) -> Self {
        Error::SaveFailed(msg.into())
    }
}
