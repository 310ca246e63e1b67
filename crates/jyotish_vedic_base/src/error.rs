//! Error types for Vedic calculations.

use thiserror::Error;

/// Errors from Vedic base calculations.
///
/// Every variant is a deterministic function of its inputs; retrying with
/// the same inputs never helps.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// Invalid geographic location parameter.
    #[error("invalid location: {0}")]
    InvalidLocation(&'static str),
    /// The ascendant has no stable value at this time and place.
    #[error("ascendant undefined at latitude {latitude_deg:.4}: {reason}")]
    AscendantUndefined {
        latitude_deg: f64,
        reason: &'static str,
    },
    /// An internal consistency check failed. Indicates a bug.
    #[error("invariant violated: {0}")]
    InvariantViolation(String),
}
