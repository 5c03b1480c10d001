//! Error types for meeting-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MeetingError {
    /// A time string did not have the `HHMM` shape.
    #[error("Invalid time format '{input}': {reason}")]
    InvalidTimeFormat { input: String, reason: String },

    #[error("Meeting not found: {0}")]
    NotFound(String),

    /// The store could not be read or written.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    /// The store was readable but held a record that did not decode.
    #[error("Decode error: {0}")]
    Decode(#[from] serde_json::Error),
}

impl MeetingError {
    pub(crate) fn invalid_time(input: &str, reason: impl Into<String>) -> Self {
        MeetingError::InvalidTimeFormat {
            input: input.to_string(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, MeetingError>;
