//! Geometric Sun, Meeus *Astronomical Algorithms* 2nd ed., chapter 25.
//!
//! Low-accuracy solar theory: mean longitude plus the equation of centre.
//! Accuracy is about 0.01 deg, referred to the mean equinox of date.

use jyotish_frames::normalize_360;

use crate::EclipticPoint;

/// Geocentric geometric Sun at `t` Julian centuries of TT since J2000.0.
///
/// Latitude is taken as zero (it never exceeds 1.2").
pub fn sun_geocentric(t: f64) -> EclipticPoint {
    let t2 = t * t;
    let l0 = 280.46646 + 36000.76983 * t + 0.0003032 * t2;
    let m = (357.52911 + 35999.05029 * t - 0.0001537 * t2).to_radians();
    let e = 0.016708634 - 0.000042037 * t - 0.0000001267 * t2;

    let c = (1.914602 - 0.004817 * t - 0.000014 * t2) * m.sin()
        + (0.019993 - 0.000101 * t) * (2.0 * m).sin()
        + 0.000289 * (3.0 * m).sin();

    let true_lon = l0 + c;
    let nu = m + c.to_radians();
    let r = 1.000001018 * (1.0 - e * e) / (1.0 + e * nu.cos());

    EclipticPoint {
        lon_deg: normalize_360(true_lon),
        lat_deg: 0.0,
        distance_au: r,
    }
}
