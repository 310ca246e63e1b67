//! Sidereal planetary positions.

use std::collections::BTreeMap;

use jyotish_ephemeris::{BodyPositions, RawPosition};
use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::sidereal::SiderealConverter;
use crate::zodiac::{ZodiacPosition, resolve};

/// Tropical and sidereal longitude of one graha at one instant.
///
/// Sign, nakshatra and pada are derived on demand through [`Self::zodiac`]
/// rather than stored.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlanetaryPosition {
    pub graha: Graha,
    pub tropical_longitude_deg: f64,
    pub sidereal_longitude_deg: f64,
    pub latitude_deg: f64,
    pub daily_motion_deg: f64,
    pub is_retrograde: bool,
}

impl PlanetaryPosition {
    pub fn from_raw(graha: Graha, raw: &RawPosition, sidereal_longitude_deg: f64) -> Self {
        Self {
            graha,
            tropical_longitude_deg: raw.longitude_deg,
            sidereal_longitude_deg,
            latitude_deg: raw.latitude_deg,
            daily_motion_deg: raw.daily_motion_deg,
            is_retrograde: raw.is_retrograde(),
        }
    }

    pub fn zodiac(&self) -> ZodiacPosition {
        resolve(self.sidereal_longitude_deg)
    }
}

/// Convert a full set of raw ephemeris positions into sidereal positions.
pub fn sidereal_positions(
    raw: &BodyPositions,
    converter: &SiderealConverter,
) -> BTreeMap<Graha, PlanetaryPosition> {
    let ayanamsha = converter.ayanamsha(&raw.instant);
    raw.iter()
        .map(|(body, pos)| {
            let graha = Graha::from_body(body);
            let sidereal = jyotish_frames::normalize_360(pos.longitude_deg - ayanamsha);
            (graha, PlanetaryPosition::from_raw(graha, pos, sidereal))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use jyotish_ephemeris::{AnalyticEphemeris, Ephemeris};
    use jyotish_time::Instant;

    #[test]
    fn converts_every_body() {
        let instant = Instant::parse("1987-03-15T04:20:00+05:30").unwrap();
        let raw = AnalyticEphemeris::default().positions(&instant).unwrap();
        let conv = SiderealConverter::default();
        let sid = sidereal_positions(&raw, &conv);
        assert_eq!(sid.len(), 9);
        for (g, p) in &sid {
            assert_eq!(*g, p.graha);
            let expected = conv.to_sidereal(p.tropical_longitude_deg, &instant);
            assert!((p.sidereal_longitude_deg - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn retrograde_follows_motion() {
        let raw = RawPosition {
            longitude_deg: 10.0,
            latitude_deg: 0.0,
            distance_au: 1.0,
            daily_motion_deg: -0.1,
        };
        let p = PlanetaryPosition::from_raw(Graha::Shani, &raw, 350.0);
        assert!(p.is_retrograde);
        assert_eq!(p.zodiac().rashi, crate::rashi::Rashi::Meena);
    }
}
