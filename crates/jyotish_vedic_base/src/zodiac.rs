//! Sidereal longitude to sign, nakshatra and pada.
//!
//! Sign, nakshatra and pada all derive from one normalized longitude and
//! pass through the same boundary snap, so a value that floating-point
//! arithmetic leaves a hair below an exact boundary (for example
//! `7.0 * (360.0 / 27.0)`) lands in the division that begins there for
//! every kind of division at once.

use serde::{Deserialize, Serialize};

use jyotish_frames::normalize_360;

use crate::nakshatra::{NAKSHATRA_SPAN, Nakshatra, PADA_SPAN};
use crate::rashi::{RASHI_SPAN, Rashi};

/// Tolerance below an exact division boundary that still counts as the
/// boundary itself, in degrees (about 3.6 micro-arcseconds).
pub const BOUNDARY_EPSILON_DEG: f64 = 1e-9;

/// Normalize into [0, 360), sending values within epsilon of 360 to 0.
fn snapped_longitude(lon_deg: f64) -> f64 {
    let lon = normalize_360(lon_deg);
    if lon > 360.0 - BOUNDARY_EPSILON_DEG {
        0.0
    } else {
        lon
    }
}

/// Split `value` into `(index, remainder)` over equal divisions of `span`.
fn divide(value: f64, span: f64, count: u8) -> (u8, f64) {
    let idx = ((value + BOUNDARY_EPSILON_DEG) / span).floor();
    let idx = (idx.max(0.0) as u8).min(count - 1);
    let remainder = (value - idx as f64 * span).max(0.0);
    (idx, remainder)
}

/// Derived placement of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ZodiacPosition {
    /// Normalized sidereal longitude the placement was derived from.
    pub longitude_deg: f64,
    pub rashi: Rashi,
    /// Degrees within the sign, [0, 30).
    pub degree_in_sign: f64,
    pub nakshatra: Nakshatra,
    /// Degrees within the nakshatra, [0, 13.333...).
    pub degrees_in_nakshatra: f64,
    /// Pada 1..=4.
    pub pada: u8,
}

impl ZodiacPosition {
    /// Sign number 1..=12.
    pub fn sign_number(&self) -> u8 {
        self.rashi.number()
    }

    /// Nakshatra number 1..=27.
    pub fn nakshatra_number(&self) -> u8 {
        self.nakshatra.number()
    }

    /// Fraction of the nakshatra already traversed, [0, 1).
    pub fn nakshatra_fraction(&self) -> f64 {
        self.degrees_in_nakshatra / NAKSHATRA_SPAN
    }
}

/// Resolve a sidereal longitude into sign, nakshatra and pada.
pub fn resolve(sidereal_lon_deg: f64) -> ZodiacPosition {
    let lon = snapped_longitude(sidereal_lon_deg);
    let (sign_idx, degree_in_sign) = divide(lon, RASHI_SPAN, 12);
    let (nak_idx, degrees_in_nakshatra) = divide(lon, NAKSHATRA_SPAN, 27);
    let (pada_idx, _) = divide(degrees_in_nakshatra, PADA_SPAN, 4);

    ZodiacPosition {
        longitude_deg: lon,
        rashi: Rashi::from_index(sign_idx),
        degree_in_sign,
        nakshatra: Nakshatra::from_index(nak_idx),
        degrees_in_nakshatra,
        pada: pada_idx + 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn origin() {
        let z = resolve(0.0);
        assert_eq!(z.rashi, Rashi::Mesha);
        assert_eq!(z.nakshatra, Nakshatra::Ashwini);
        assert_eq!(z.pada, 1);
        assert_eq!(z.degree_in_sign, 0.0);
    }

    #[test]
    fn every_nakshatra_boundary_starts_pada_one() {
        for k in 0..27u8 {
            let z = resolve(k as f64 * (360.0 / 27.0));
            assert_eq!(z.nakshatra.index(), k, "k={k}");
            assert_eq!(z.pada, 1, "k={k}");
            assert!(z.degrees_in_nakshatra < 1e-9);
        }
    }

    #[test]
    fn every_pada_boundary() {
        for k in 0..108u32 {
            let z = resolve(k as f64 * (360.0 / 108.0));
            assert_eq!(z.nakshatra.index() as u32, k / 4, "k={k}");
            assert_eq!(z.pada as u32, k % 4 + 1, "k={k}");
        }
    }

    #[test]
    fn just_below_sign_boundary() {
        let z = resolve(29.999999);
        assert_eq!(z.rashi, Rashi::Mesha);
        assert_eq!(z.nakshatra, Nakshatra::Krittika);
        assert_eq!(z.pada, 1);
    }

    #[test]
    fn wraps_negative_and_full_circle() {
        assert_eq!(resolve(-0.5).rashi, Rashi::Meena);
        assert_eq!(resolve(360.0).rashi, Rashi::Mesha);
        let z = resolve(360.0 - 1e-12);
        assert_eq!(z.rashi, Rashi::Mesha);
        assert_eq!(z.nakshatra, Nakshatra::Ashwini);
    }

    #[test]
    fn last_pada_of_revati() {
        let z = resolve(359.9);
        assert_eq!(z.rashi, Rashi::Meena);
        assert_eq!(z.nakshatra, Nakshatra::Revati);
        assert_eq!(z.pada, 4);
    }

    #[test]
    fn numbers_are_one_based() {
        let z = resolve(45.0);
        assert_eq!(z.sign_number(), 2);
        assert_eq!(z.nakshatra_number(), 4);
        assert!((z.degree_in_sign - 15.0).abs() < 1e-12);
    }
}
