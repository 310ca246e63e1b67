//! The immutable birth chart.

use std::collections::BTreeMap;

use jyotish_time::Instant;
use jyotish_vedic_base::{
    Ascendant, ChartConvention, DashaTree, GeoCoordinate, Graha, Houses, PlanetaryPosition,
    VedicError, ZodiacPosition,
};
use serde::{Deserialize, Serialize};

/// Everything computed for one birth.
///
/// Built once by [`crate::ChartBuilder`] and never modified; changed birth
/// details produce a new chart. Deserializing re-checks the houses, the
/// dasha tree and the planet set, so a stored chart that was tampered with
/// is rejected instead of silently used.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawBirthChart")]
pub struct BirthChart {
    convention: ChartConvention,
    birth: Instant,
    location: GeoCoordinate,
    ascendant: Ascendant,
    houses: Houses,
    planets: BTreeMap<Graha, PlanetaryPosition>,
    dasha: DashaTree,
}

#[derive(Deserialize)]
struct RawBirthChart {
    convention: ChartConvention,
    birth: Instant,
    location: GeoCoordinate,
    ascendant: Ascendant,
    houses: Houses,
    planets: BTreeMap<Graha, PlanetaryPosition>,
    dasha: DashaTree,
}

impl TryFrom<RawBirthChart> for BirthChart {
    type Error = VedicError;

    fn try_from(raw: RawBirthChart) -> Result<Self, Self::Error> {
        Self::assemble(
            raw.convention,
            raw.birth,
            raw.location,
            raw.ascendant,
            raw.houses,
            raw.planets,
            raw.dasha,
        )
    }
}

/// What a chart was computed from.
///
/// Two charts with equal identities are interchangeable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartIdentity {
    pub birth: Instant,
    pub location: GeoCoordinate,
    pub convention: ChartConvention,
}

impl BirthChart {
    pub(crate) fn assemble(
        convention: ChartConvention,
        birth: Instant,
        location: GeoCoordinate,
        ascendant: Ascendant,
        houses: Houses,
        planets: BTreeMap<Graha, PlanetaryPosition>,
        dasha: DashaTree,
    ) -> Result<Self, VedicError> {
        houses.verify()?;
        dasha.verify()?;
        if houses.system != convention.house_system {
            return Err(VedicError::InvariantViolation(format!(
                "houses are {} but the convention is {}",
                houses.system.name(),
                convention.house_system.name()
            )));
        }
        if planets.len() != Graha::all().len() {
            return Err(VedicError::InvariantViolation(format!(
                "chart has {} planets",
                planets.len()
            )));
        }
        if let Some((graha, _)) = planets.iter().find(|(g, p)| **g != p.graha) {
            return Err(VedicError::InvariantViolation(format!(
                "position stored under {graha} belongs to another graha"
            )));
        }
        if (dasha.birth_jd() - birth.jd_utc()).abs() > 1e-6 {
            return Err(VedicError::InvariantViolation(
                "dasha tree was built for another birth".to_string(),
            ));
        }
        Ok(Self {
            convention,
            birth,
            location,
            ascendant,
            houses,
            planets,
            dasha,
        })
    }

    pub fn convention(&self) -> &ChartConvention {
        &self.convention
    }

    /// Short convention tag, e.g. `v1/lahiri/whole-sign/mean`.
    pub fn convention_tag(&self) -> String {
        self.convention.tag()
    }

    pub fn birth(&self) -> &Instant {
        &self.birth
    }

    pub fn location(&self) -> &GeoCoordinate {
        &self.location
    }

    pub fn ascendant(&self) -> &Ascendant {
        &self.ascendant
    }

    pub fn houses(&self) -> &Houses {
        &self.houses
    }

    pub fn planets(&self) -> &BTreeMap<Graha, PlanetaryPosition> {
        &self.planets
    }

    pub fn planet(&self, graha: Graha) -> Option<&PlanetaryPosition> {
        self.planets.get(&graha)
    }

    /// House (1..=12) occupied by a graha.
    pub fn house_of(&self, graha: Graha) -> Option<u8> {
        self.planet(graha)
            .map(|p| self.houses.house_of(p.sidereal_longitude_deg))
    }

    /// Sign, nakshatra and pada of the ascendant.
    pub fn ascendant_zodiac(&self) -> ZodiacPosition {
        jyotish_vedic_base::resolve(self.ascendant.sidereal_deg)
    }

    pub fn dasha(&self) -> &DashaTree {
        &self.dasha
    }

    pub fn identity(&self) -> ChartIdentity {
        ChartIdentity {
            birth: self.birth,
            location: self.location,
            convention: self.convention,
        }
    }
}
