//! Error types for chart construction.

use jyotish_ephemeris::EphemerisError;
use jyotish_time::TimeError;
use jyotish_vedic_base::VedicError;
use thiserror::Error;

/// Errors from building a birth chart.
///
/// Lower-level errors pass through unchanged; [`ChartError::kind`] gives the
/// category a caller needs to decide on messaging. Nothing is retried.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ChartError {
    /// Date, time, offset or location is missing. Raised before any
    /// ephemeris work.
    #[error("incomplete birth data: missing {}", .missing.join(", "))]
    IncompleteBirthData { missing: Vec<&'static str> },
    /// A place name could not be turned into coordinates.
    #[error("could not locate place `{0}`")]
    PlaceNotFound(String),
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    #[error(transparent)]
    Vedic(#[from] VedicError),
    #[error(transparent)]
    Time(#[from] TimeError),
}

/// Coarse category of a [`ChartError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    IncompleteBirthData,
    OutOfRange,
    AscendantUndefined,
    InvariantViolation,
    InvalidInput,
}

impl ChartError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::IncompleteBirthData { .. } => ErrorKind::IncompleteBirthData,
            Self::Time(TimeError::MissingOffset(_)) => ErrorKind::IncompleteBirthData,
            Self::PlaceNotFound(_) | Self::Time(_) => ErrorKind::InvalidInput,
            Self::Ephemeris(EphemerisError::OutOfRange { .. }) => ErrorKind::OutOfRange,
            Self::Ephemeris(EphemerisError::MissingBody(_)) => ErrorKind::InvariantViolation,
            Self::Vedic(VedicError::AscendantUndefined { .. }) => ErrorKind::AscendantUndefined,
            Self::Vedic(VedicError::InvariantViolation(_)) => ErrorKind::InvariantViolation,
            Self::Vedic(_) => ErrorKind::InvalidInput,
            Self::Ephemeris(_) => ErrorKind::InvalidInput,
        }
    }

    pub(crate) fn missing(fields: Vec<&'static str>) -> Self {
        Self::IncompleteBirthData { missing: fields }
    }
}
