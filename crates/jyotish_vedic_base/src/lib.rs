//! Vedic calculations built on the tropical ephemeris.
//!
//! This crate provides:
//! - Ayanamsha and the sidereal converter (Lahiri pinned by default)
//! - Ascendant (lagna) and whole-sign / equal houses (bhava)
//! - Rashi, nakshatra and pada resolution with a shared boundary rule
//! - The Vimshottari dasha tree and active-period lookup
//!
//! All angles are in degrees unless a name says otherwise.

pub mod ayanamsha;
pub mod bhava;
pub mod convention;
pub mod dasha;
pub mod error;
pub mod graha;
pub mod lagna;
pub mod location;
pub mod nakshatra;
pub mod position;
pub mod rashi;
pub mod sidereal;
pub mod zodiac;

pub use ayanamsha::{ALL_AYANAMSHA_SYSTEMS, AyanamshaSystem, ayanamsha_deg};
pub use bhava::{HouseCusp, HouseSystem, Houses, compute_houses};
pub use convention::ChartConvention;
pub use dasha::{
    ActiveChain, DAYS_PER_YEAR, DashaBalance, DashaLevel, DashaPeriod, DashaTree, active_chain,
    build_tree,
};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha};
pub use lagna::{Ascendant, ascendant, ascendant_tropical_deg};
pub use location::GeoCoordinate;
pub use nakshatra::{ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, PADA_SPAN};
pub use position::{PlanetaryPosition, sidereal_positions};
pub use rashi::{ALL_RASHIS, Dms, Rashi, deg_to_dms, dms_to_deg};
pub use sidereal::{SiderealConverter, to_sidereal};
pub use zodiac::{BOUNDARY_EPSILON_DEG, ZodiacPosition, resolve};
