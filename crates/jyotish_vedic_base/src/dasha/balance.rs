//! Dasha balance at birth.
//!
//! The Moon's progress through its nakshatra is the elapsed fraction of the
//! first mahadasha; the remainder plays out from birth.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::nakshatra::Nakshatra;
use crate::zodiac::resolve;

use super::types::DAYS_PER_YEAR;
use super::vimshottari::period_days;

/// Birth balance of the first mahadasha.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashaBalance {
    /// Sidereal Moon longitude the balance was computed from.
    pub moon_sidereal_deg: f64,
    pub nakshatra: Nakshatra,
    /// Lord of the first mahadasha.
    pub lord: Graha,
    /// Fraction of the nakshatra (and of the first mahadasha) already
    /// traversed at birth, [0, 1).
    pub elapsed_fraction: f64,
    pub elapsed_days: f64,
    /// Days of the first mahadasha remaining at birth.
    pub balance_days: f64,
}

impl DashaBalance {
    pub fn balance_years(&self) -> f64 {
        self.balance_days / DAYS_PER_YEAR
    }

    pub fn full_days(&self) -> f64 {
        period_days(self.lord)
    }
}

/// Compute the birth balance from the sidereal Moon longitude.
pub fn birth_balance(moon_sidereal_deg: f64) -> DashaBalance {
    let pos = resolve(moon_sidereal_deg);
    let lord = pos.nakshatra.lord();
    let full = period_days(lord);
    let elapsed_fraction = pos.nakshatra_fraction();
    let elapsed_days = full * elapsed_fraction;
    DashaBalance {
        moon_sidereal_deg: pos.longitude_deg,
        nakshatra: pos.nakshatra,
        lord,
        elapsed_fraction,
        elapsed_days,
        balance_days: full - elapsed_days,
    }
}
