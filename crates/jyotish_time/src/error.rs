//! Error types for instant parsing and conversion.

use thiserror::Error;

/// Errors from building or converting an [`crate::Instant`].
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// The timestamp has no UTC offset; astronomical math never runs on naive time.
    #[error("timestamp `{0}` has no UTC offset")]
    MissingOffset(String),
    /// Text could not be parsed as a date, time or offset.
    #[error("cannot parse `{input}`: {reason}")]
    Parse { input: String, reason: String },
    /// UTC offset outside +/-24h.
    #[error("UTC offset of {0} seconds is out of range")]
    InvalidOffset(i32),
    /// The value cannot be represented as a calendar timestamp.
    #[error("Julian Date {0} is not representable as a timestamp")]
    Unrepresentable(f64),
}
