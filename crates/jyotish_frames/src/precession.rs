//! IAU 2006 general precession in ecliptic longitude.
//!
//! The general precession p_A is the accumulated westward motion of the
//! equinox along the ecliptic since J2000.0. It drives both the ayanamsha
//! and the J2000 -> mean-of-date longitude shift used for the planets.
//!
//! Source: Capitaine, Wallace & Chapront 2003, A&A 412, 567-586 (Table 1).

use crate::spherical::normalize_360;

/// General precession in ecliptic longitude, in arcseconds.
///
/// `t` = Julian centuries of TT since J2000.0.
/// The dominant linear term is ~5028.80"/century.
pub fn general_precession_longitude_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3 - 0.000023857 * t4 - 0.0000000383 * t5
}

/// General precession in ecliptic longitude, in degrees.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    general_precession_longitude_arcsec(t) / 3600.0
}

/// Shift a J2000 ecliptic longitude to the mean equinox of date.
///
/// First-order: adds p_A and ignores the small ecliptic-pole motion,
/// which stays below 1" in longitude for low-latitude bodies within a
/// few centuries of J2000.
pub fn precess_longitude_from_j2000(lon_j2000_deg: f64, t: f64) -> f64 {
    normalize_360(lon_j2000_deg + general_precession_longitude_deg(t))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_at_j2000() {
        assert_eq!(general_precession_longitude_arcsec(0.0), 0.0);
    }

    #[test]
    fn one_century_approx() {
        let p = general_precession_longitude_arcsec(1.0);
        assert!((p - 5029.90).abs() < 1.0, "p_A(1.0) = {p}");
    }

    #[test]
    fn rate_per_year() {
        let p = general_precession_longitude_arcsec(0.01);
        assert!((p - 50.29).abs() < 0.1, "p_A(0.01) = {p}");
    }

    #[test]
    fn negative_century() {
        assert!(general_precession_longitude_arcsec(-1.0) < 0.0);
    }

    #[test]
    fn precess_wraps() {
        let lon = precess_longitude_from_j2000(359.9, 0.5);
        assert!(lon < 1.0, "lon = {lon}");
    }
}
