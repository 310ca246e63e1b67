//! Session errors.

use jyotish_ephemeris::{EphemerisError, NodeMode};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum SessionError {
    /// "Now" is outside the ephemeris window.
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    #[error("session id must not be empty")]
    EmptySessionId,
    /// The chart's Rahu/Ketu convention differs from the ephemeris in use.
    #[error("chart uses {} nodes but the ephemeris computes {} nodes", .chart.name(), .ephemeris.name())]
    NodeModeMismatch { chart: NodeMode, ephemeris: NodeMode },
}
