//! Bhava (house) computation.
//!
//! Two equal-division systems are offered:
//! - Whole-sign (default): house 1 is the ascendant's entire sign, house 2
//!   the next sign, and so on. Cusps fall on sign boundaries.
//! - Equal: house 1 begins at the ascendant degree; each house spans 30 deg.
//!
//! Neither depends on latitude once the ascendant is known. The 12 houses
//! are checked to partition the circle before they are returned.

use jyotish_frames::normalize_360;
use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::rashi::{RASHI_SPAN, Rashi};
use crate::zodiac::{BOUNDARY_EPSILON_DEG, resolve};

/// Tolerance for the partition check, degrees.
const PARTITION_TOLERANCE_DEG: f64 = 1e-9;

/// House division convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HouseSystem {
    #[default]
    WholeSign,
    Equal,
}

impl HouseSystem {
    pub const fn name(self) -> &'static str {
        match self {
            Self::WholeSign => "whole-sign",
            Self::Equal => "equal",
        }
    }
}

/// One house: number, the sign at its start, and the start longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusp {
    /// 1..=12.
    pub house_number: u8,
    pub sign: Rashi,
    /// Sidereal longitude where the house begins, [0, 360).
    pub start_deg: f64,
}

impl HouseCusp {
    /// Exclusive end of the house.
    pub fn end_deg(&self) -> f64 {
        normalize_360(self.start_deg + RASHI_SPAN)
    }

    /// Whether `lon` falls in [start, start + 30), across 0 deg if needed.
    ///
    /// Uses the same boundary snap as sign resolution.
    pub fn contains(&self, lon_deg: f64) -> bool {
        normalize_360(lon_deg - self.start_deg + BOUNDARY_EPSILON_DEG) < RASHI_SPAN
    }
}

/// The 12 houses of a chart, house 1 first.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Houses {
    pub system: HouseSystem,
    pub cusps: [HouseCusp; 12],
}

impl Houses {
    /// House number 1..=12 containing a sidereal longitude.
    pub fn house_of(&self, lon_deg: f64) -> u8 {
        let offset = normalize_360(lon_deg - self.cusps[0].start_deg + BOUNDARY_EPSILON_DEG);
        let n = ((offset / RASHI_SPAN).floor() as u8).min(11);
        n + 1
    }

    pub fn iter(&self) -> impl Iterator<Item = &HouseCusp> {
        self.cusps.iter()
    }

    /// Verify the houses tile [0, 360) with no gap or overlap.
    pub fn verify(&self) -> Result<(), VedicError> {
        for (i, cusp) in self.cusps.iter().enumerate() {
            if cusp.house_number as usize != i + 1 {
                return Err(VedicError::InvariantViolation(format!(
                    "house at position {i} is numbered {}",
                    cusp.house_number
                )));
            }
            let next = &self.cusps[(i + 1) % 12];
            let gap = normalize_360(next.start_deg - cusp.start_deg);
            let gap = if gap > 360.0 - PARTITION_TOLERANCE_DEG {
                gap - 360.0
            } else {
                gap
            };
            if (gap - RASHI_SPAN).abs() > PARTITION_TOLERANCE_DEG {
                return Err(VedicError::InvariantViolation(format!(
                    "house {} spans {gap} deg instead of 30",
                    cusp.house_number
                )));
            }
        }
        Ok(())
    }
}

/// Compute the 12 houses from a sidereal ascendant.
pub fn compute_houses(
    ascendant_sidereal_deg: f64,
    system: HouseSystem,
) -> Result<Houses, VedicError> {
    let asc = resolve(ascendant_sidereal_deg);
    let first_start = match system {
        HouseSystem::WholeSign => asc.rashi.start_deg(),
        HouseSystem::Equal => asc.longitude_deg,
    };

    let cusps = std::array::from_fn(|i| {
        let start_deg = normalize_360(first_start + i as f64 * RASHI_SPAN);
        HouseCusp {
            house_number: i as u8 + 1,
            sign: resolve(start_deg).rashi,
            start_deg,
        }
    });

    let houses = Houses { system, cusps };
    houses.verify()?;
    Ok(houses)
}
