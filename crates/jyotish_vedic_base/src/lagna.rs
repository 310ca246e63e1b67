//! Lagna (Ascendant) computation.
//!
//! The ascendant is the ecliptic point rising on the eastern horizon:
//!
//! `Asc = atan2(cos(LST), -(sin(LST)*cos(eps) + tan(phi)*sin(eps)))`
//!
//! with LST the local sidereal time, eps the mean obliquity of date and
//! phi the geographic latitude.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapter 13;
//! Montenbruck & Pfleger, "Astronomy on the Personal Computer".

use jyotish_frames::{mean_obliquity_deg, normalize_360};
use jyotish_time::{Instant, jd_to_centuries, local_sidereal_time_rad};
use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::location::GeoCoordinate;
use crate::sidereal::SiderealConverter;

/// Below this magnitude the atan2 arguments carry no direction.
const DEGENERACY_LIMIT: f64 = 1e-9;

/// Ascendant in both zodiacs.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ascendant {
    pub tropical_deg: f64,
    pub sidereal_deg: f64,
}

/// Ascendant longitude in degrees from LST, latitude and obliquity (radians).
///
/// Returns `None` when the horizon and ecliptic coincide.
pub(crate) fn ascendant_from_lst(lst_rad: f64, lat_rad: f64, eps_rad: f64) -> Option<f64> {
    let y = lst_rad.cos();
    let x = -(lst_rad.sin() * eps_rad.cos() + lat_rad.tan() * eps_rad.sin());
    if y.hypot(x) < DEGENERACY_LIMIT || !x.is_finite() {
        return None;
    }
    Some(normalize_360(y.atan2(x).to_degrees()))
}

/// Tropical ascendant in degrees [0, 360), mean equinox of date.
///
/// Fails with [`VedicError::AscendantUndefined`] inside the polar circles
/// (|latitude| > 90 - obliquity), where parts of the ecliptic never rise
/// and the ascendant jumps discontinuously.
pub fn ascendant_tropical_deg(
    instant: &Instant,
    location: &GeoCoordinate,
) -> Result<f64, VedicError> {
    let eps_deg = mean_obliquity_deg(jd_to_centuries(instant.jd_tt()));
    let lat = location.latitude_deg();
    if lat.abs() > 90.0 - eps_deg {
        return Err(VedicError::AscendantUndefined {
            latitude_deg: lat,
            reason: "latitude inside the polar circle",
        });
    }

    // UT1 is taken equal to UTC.
    let lst = local_sidereal_time_rad(instant.jd_utc(), location.longitude_deg());
    ascendant_from_lst(lst, location.latitude_rad(), eps_deg.to_radians()).ok_or(
        VedicError::AscendantUndefined {
            latitude_deg: lat,
            reason: "horizon coincides with the ecliptic",
        },
    )
}

/// Ascendant in the tropical zodiac and in the converter's sidereal zodiac.
pub fn ascendant(
    instant: &Instant,
    location: &GeoCoordinate,
    converter: &SiderealConverter,
) -> Result<Ascendant, VedicError> {
    let tropical_deg = ascendant_tropical_deg(instant, location)?;
    Ok(Ascendant {
        tropical_deg,
        sidereal_deg: converter.to_sidereal(tropical_deg, instant),
    })
}
