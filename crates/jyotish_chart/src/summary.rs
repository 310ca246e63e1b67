//! Flat, serializable view of a chart's placements.

use std::collections::BTreeMap;
use std::fmt::{Display, Formatter};

use jyotish_time::Instant;
use jyotish_vedic_base::{Graha, Nakshatra, Rashi, ZodiacPosition, deg_to_dms};
use serde::{Deserialize, Serialize};

use crate::chart::BirthChart;

/// Where one point (a planet or the ascendant) falls.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlacementSummary {
    pub sign: Rashi,
    pub sign_number: u8,
    pub house: u8,
    pub nakshatra: Nakshatra,
    pub pada: u8,
    /// Degrees within the sign, [0, 30).
    pub degree: f64,
    /// `degree` as text, e.g. `12°04'33.10"`.
    pub degree_dms: String,
    pub sidereal_longitude_deg: f64,
    pub retrograde: bool,
}

impl PlacementSummary {
    fn new(zodiac: &ZodiacPosition, house: u8, retrograde: bool) -> Self {
        Self {
            sign: zodiac.rashi,
            sign_number: zodiac.sign_number(),
            house,
            nakshatra: zodiac.nakshatra,
            pada: zodiac.pada,
            degree: zodiac.degree_in_sign,
            degree_dms: deg_to_dms(zodiac.degree_in_sign).to_string(),
            sidereal_longitude_deg: zodiac.longitude_deg,
            retrograde,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseSummary {
    pub house: u8,
    pub sign: Rashi,
    pub start_deg: f64,
    /// Grahas in this house, traditional order.
    pub occupants: Vec<Graha>,
}

/// Planet to {sign, house, nakshatra, pada, degree, retrograde}, plus the
/// ascendant and the house cusps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartSummary {
    pub convention: String,
    pub birth: Instant,
    pub ascendant: PlacementSummary,
    pub houses: Vec<HouseSummary>,
    pub planets: BTreeMap<Graha, PlacementSummary>,
}

impl BirthChart {
    pub fn summary(&self) -> ChartSummary {
        let houses = self.houses();
        let planets: BTreeMap<Graha, PlacementSummary> = self
            .planets()
            .iter()
            .map(|(g, p)| {
                let house = houses.house_of(p.sidereal_longitude_deg);
                (*g, PlacementSummary::new(&p.zodiac(), house, p.is_retrograde))
            })
            .collect();

        let house_rows = houses
            .iter()
            .map(|cusp| HouseSummary {
                house: cusp.house_number,
                sign: cusp.sign,
                start_deg: cusp.start_deg,
                occupants: planets
                    .iter()
                    .filter(|(_, s)| s.house == cusp.house_number)
                    .map(|(g, _)| *g)
                    .collect(),
            })
            .collect();

        let asc = self.ascendant_zodiac();
        ChartSummary {
            convention: self.convention_tag(),
            birth: *self.birth(),
            ascendant: PlacementSummary::new(&asc, houses.house_of(asc.longitude_deg), false),
            houses: house_rows,
            planets,
        }
    }
}

impl Display for ChartSummary {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Birth:      {}", self.birth)?;
        writeln!(f, "Convention: {}", self.convention)?;
        writeln!(
            f,
            "Lagna:      {} {} ({} pada {})",
            self.ascendant.sign.name(),
            self.ascendant.degree_dms,
            self.ascendant.nakshatra.name(),
            self.ascendant.pada
        )?;
        writeln!(f)?;
        for (graha, p) in &self.planets {
            writeln!(
                f,
                "{:<8} {:<10} {:>14}  H{:<2}  {} pada {}{}",
                graha.name(),
                p.sign.name(),
                p.degree_dms,
                p.house,
                p.nakshatra.name(),
                p.pada,
                if p.retrograde { "  (R)" } else { "" }
            )?;
        }
        Ok(())
    }
}
