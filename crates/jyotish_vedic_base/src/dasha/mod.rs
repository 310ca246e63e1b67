//! Vimshottari dasha (planetary period) calculations.
//!
//! The 120-year cycle is divided into nine mahadashas, each into nine
//! antardashas and each of those into nine pratyantardashas, with
//! sub-periods proportional to the lords' years and cycling from the
//! parent's lord.
//!
//! Boundaries are JD UTC with 1 year = 365.25 days and are never rounded.

pub mod balance;
pub mod query;
pub mod subperiod;
pub mod tree;
pub mod types;
pub mod vimshottari;

pub use balance::{DashaBalance, birth_balance};
pub use query::{ActiveChain, active_chain, find_active_period};
pub use subperiod::{proportional_children, snap_last_child_end};
pub use tree::DashaTree;
pub use types::{ALL_LEVELS, DAYS_PER_YEAR, DashaLevel, DashaPeriod};
pub use vimshottari::{
    VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS, period_days, period_years,
    sequence_from,
};

use jyotish_time::Instant;

use crate::error::VedicError;

/// Build the dasha tree from the sidereal Moon longitude at birth.
pub fn build_tree(moon_sidereal_deg: f64, birth: &Instant) -> Result<DashaTree, VedicError> {
    DashaTree::build(moon_sidereal_deg, birth)
}
