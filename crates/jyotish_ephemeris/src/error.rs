//! Ephemeris errors.

use jyotish_time::Instant;
use thiserror::Error;

use crate::body::Body;
use crate::window::ValidityWindow;

/// Errors from an ephemeris provider. None of them are retryable.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// The instant lies outside the provider's validity window.
    #[error("instant {instant} is outside the ephemeris window {window}")]
    OutOfRange {
        instant: Instant,
        window: ValidityWindow,
    },
    /// The provider has no model for this body.
    #[error("ephemeris has no position for {0}")]
    MissingBody(Body),
}
