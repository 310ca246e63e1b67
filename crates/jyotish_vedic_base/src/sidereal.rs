//! Tropical to sidereal longitude conversion.

use jyotish_frames::normalize_360;
use jyotish_time::{Instant, jd_to_centuries};

use crate::ayanamsha::{AyanamshaSystem, ayanamsha_deg};

/// Applies one fixed ayanamsha system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SiderealConverter {
    system: AyanamshaSystem,
}

impl SiderealConverter {
    pub const fn new(system: AyanamshaSystem) -> Self {
        Self { system }
    }

    pub const fn system(&self) -> AyanamshaSystem {
        self.system
    }

    /// Ayanamsha at `instant`, degrees.
    pub fn ayanamsha(&self, instant: &Instant) -> f64 {
        ayanamsha_deg(self.system, jd_to_centuries(instant.jd_tt()))
    }

    /// Sidereal longitude in [0, 360).
    pub fn to_sidereal(&self, tropical_deg: f64, instant: &Instant) -> f64 {
        normalize_360(tropical_deg - self.ayanamsha(instant))
    }
}

/// Lahiri sidereal longitude in [0, 360).
pub fn to_sidereal(tropical_deg: f64, instant: &Instant) -> f64 {
    SiderealConverter::default().to_sidereal(tropical_deg, instant)
}
