//! Greenwich and local sidereal time.
//!
//! The jyotish core has no Earth-orientation data, so UT1 is taken equal
//! to UTC (|UT1 - UTC| < 0.9 s, about 0.004 deg of Earth rotation).
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use std::f64::consts::{PI, TAU};

use crate::julian::{DAYS_PER_JULIAN_CENTURY, J2000_JD};

const ARCSEC_TO_RAD: f64 = PI / (180.0 * 3600.0);

/// Earth Rotation Angle in radians [0, 2*pi) at a UT1 Julian Date.
pub fn earth_rotation_angle_rad(jd_ut1: f64) -> f64 {
    let du = jd_ut1 - J2000_JD;
    // Split the integer day count off to keep precision in the fractional turn.
    let turns = 0.779_057_273_264_0 + 0.002_737_811_911_354_48 * du + du.fract();
    (TAU * turns).rem_euclid(TAU)
}

/// Greenwich Mean Sidereal Time in radians [0, 2*pi) at a UT1 Julian Date.
pub fn gmst_rad(jd_ut1: f64) -> f64 {
    let era = earth_rotation_angle_rad(jd_ut1);
    let t = (jd_ut1 - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
    let poly_arcsec = 0.014506
        + 4612.156534 * t
        + 1.3915817 * t * t
        - 0.00000044 * t.powi(3)
        - 0.000029956 * t.powi(4)
        - 0.0000000368 * t.powi(5);
    (era + poly_arcsec * ARCSEC_TO_RAD).rem_euclid(TAU)
}

/// Local sidereal time in radians [0, 2*pi) for an east-positive longitude.
pub fn local_sidereal_time_rad(jd_ut1: f64, east_longitude_deg: f64) -> f64 {
    (gmst_rad(jd_ut1) + east_longitude_deg.to_radians()).rem_euclid(TAU)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn era_at_j2000_noon() {
        let theta = earth_rotation_angle_rad(J2000_JD).to_degrees();
        assert!((theta - 280.46).abs() < 0.1, "ERA = {theta}");
    }

    #[test]
    fn gmst_j2000_midnight() {
        // 2000-Jan-01 0h UT: GMST = 6h 39m 51.2s = 99.967 deg
        let gmst = gmst_rad(2_451_544.5).to_degrees();
        assert!((gmst - 99.967).abs() < 0.01, "GMST = {gmst}");
    }

    #[test]
    fn gmst_meeus_example_12a() {
        // 1987 April 10, 0h UT: GMST = 13h 10m 46.3668s = 197.693195 deg
        let gmst = gmst_rad(2_446_895.5).to_degrees();
        assert!((gmst - 197.693195).abs() < 0.001, "GMST = {gmst}");
    }

    #[test]
    fn lst_adds_east_longitude() {
        let jd = 2_460_000.5;
        let lst = local_sidereal_time_rad(jd, 90.0);
        let expected = (gmst_rad(jd) + PI / 2.0).rem_euclid(TAU);
        assert!((lst - expected).abs() < 1e-12);
    }

    #[test]
    fn lst_west_longitude_wraps() {
        let lst = local_sidereal_time_rad(2_451_544.5, -120.0);
        assert!((0.0..TAU).contains(&lst));
    }

    #[test]
    fn ranges() {
        for &jd in &[2_451_545.0, 2_451_544.5, 2_460_000.5, 2_415_020.0, 2_488_069.5] {
            let g = gmst_rad(jd);
            assert!((0.0..TAU).contains(&g), "GMST out of range at {jd}: {g}");
        }
    }
}
