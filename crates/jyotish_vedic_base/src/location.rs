//! Geographic coordinate used for ascendant and house computation.

use serde::{Deserialize, Serialize};

use crate::error::VedicError;

/// Geodetic latitude/longitude in degrees, east longitude positive.
///
/// Construct with [`GeoCoordinate::new`]; deserialization goes through the
/// same validation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCoordinate")]
pub struct GeoCoordinate {
    latitude_deg: f64,
    longitude_deg: f64,
}

#[derive(Deserialize)]
struct RawCoordinate {
    latitude_deg: f64,
    longitude_deg: f64,
}

impl TryFrom<RawCoordinate> for GeoCoordinate {
    type Error = VedicError;

    fn try_from(raw: RawCoordinate) -> Result<Self, Self::Error> {
        Self::new(raw.latitude_deg, raw.longitude_deg)
    }
}

impl GeoCoordinate {
    /// Validate and build a coordinate.
    ///
    /// Latitude must lie in [-90, 90] and longitude in [-180, 180].
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, VedicError> {
        if !latitude_deg.is_finite() || !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(VedicError::InvalidLocation("latitude out of range [-90, 90]"));
        }
        if !longitude_deg.is_finite() || !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(VedicError::InvalidLocation(
                "longitude out of range [-180, 180]",
            ));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    pub fn latitude_rad(&self) -> f64 {
        self.latitude_deg.to_radians()
    }
}
