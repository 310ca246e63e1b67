//! The three-level Vimshottari dasha tree.
//!
//! Periods are stored level by level. Within a level they are time-ordered,
//! so the children of any period form one contiguous run that is found by
//! binary search on the parent index.

use std::ops::Range;

use jyotish_time::Instant;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::VedicError;

use super::balance::{DashaBalance, birth_balance};
use super::subperiod::proportional_children;
use super::types::{ALL_LEVELS, DashaLevel, DashaPeriod};
use super::vimshottari::{cycle_days, period_days, sequence_from};

/// Slack allowed when comparing period boundaries, in days (about 0.09 s).
const SPAN_TOLERANCE_DAYS: f64 = 1e-6;

/// Mahadasha, antardasha and pratyantardasha periods for one birth.
///
/// Immutable once built. The first mahadasha starts before birth by the
/// elapsed part of its length, so the nine mahadashas span exactly one
/// 120-year cycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawDashaTree")]
pub struct DashaTree {
    birth_jd: f64,
    balance: DashaBalance,
    levels: Vec<Vec<DashaPeriod>>,
}

#[derive(Deserialize)]
struct RawDashaTree {
    birth_jd: f64,
    balance: DashaBalance,
    levels: Vec<Vec<DashaPeriod>>,
}

impl TryFrom<RawDashaTree> for DashaTree {
    type Error = VedicError;

    fn try_from(raw: RawDashaTree) -> Result<Self, Self::Error> {
        let tree = Self {
            birth_jd: raw.birth_jd,
            balance: raw.balance,
            levels: raw.levels,
        };
        tree.verify()?;
        Ok(tree)
    }
}

impl DashaTree {
    /// Build the tree from the sidereal Moon longitude at birth.
    pub fn build(moon_sidereal_deg: f64, birth: &Instant) -> Result<Self, VedicError> {
        Self::build_jd(moon_sidereal_deg, birth.jd_utc())
    }

    /// Build the tree from a birth JD UTC.
    pub fn build_jd(moon_sidereal_deg: f64, birth_jd: f64) -> Result<Self, VedicError> {
        if !moon_sidereal_deg.is_finite() || !birth_jd.is_finite() {
            return Err(VedicError::InvariantViolation(
                "dasha inputs must be finite".to_string(),
            ));
        }

        let balance = birth_balance(moon_sidereal_deg);
        let mut cursor = birth_jd - balance.elapsed_days;
        let mut mahadashas = Vec::with_capacity(9);
        for (order_0, lord) in sequence_from(balance.lord).enumerate() {
            let end = cursor + period_days(lord);
            mahadashas.push(DashaPeriod {
                lord,
                start_jd: cursor,
                end_jd: end,
                level: DashaLevel::Mahadasha,
                order: order_0 as u16 + 1,
                parent: None,
            });
            cursor = end;
        }

        let mut levels = vec![mahadashas];
        for _ in 1..ALL_LEVELS.len() {
            let parents = levels.last().map(Vec::as_slice).unwrap_or_default();
            let children: Vec<DashaPeriod> = parents
                .iter()
                .enumerate()
                .flat_map(|(idx, p)| proportional_children(p, idx as u32))
                .collect();
            levels.push(children);
        }

        let tree = Self {
            birth_jd,
            balance,
            levels,
        };
        tree.verify()?;

        debug!(
            lord = %balance.lord,
            nakshatra = balance.nakshatra.name(),
            balance_years = balance.balance_years(),
            periods = tree.levels.iter().map(Vec::len).sum::<usize>(),
            "built vimshottari tree"
        );
        Ok(tree)
    }

    pub fn birth_jd(&self) -> f64 {
        self.birth_jd
    }

    /// Balance of the first mahadasha at birth.
    pub fn balance(&self) -> &DashaBalance {
        &self.balance
    }

    /// All periods of one level, time-ordered.
    pub fn level(&self, level: DashaLevel) -> &[DashaPeriod] {
        self.levels
            .get(level.index())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn mahadashas(&self) -> &[DashaPeriod] {
        self.level(DashaLevel::Mahadasha)
    }

    /// Start of the first mahadasha (at or before birth).
    pub fn start_jd(&self) -> f64 {
        self.mahadashas().first().map_or(self.birth_jd, |p| p.start_jd)
    }

    /// End of the last mahadasha.
    pub fn end_jd(&self) -> f64 {
        self.mahadashas().last().map_or(self.birth_jd, |p| p.end_jd)
    }

    /// Index range, within the child level, of the children of one period.
    pub fn children_range(&self, level: DashaLevel, index: usize) -> Range<usize> {
        let Some(child_level) = level.child_level() else {
            return 0..0;
        };
        let key = Some(index as u32);
        let kids = self.level(child_level);
        let start = kids.partition_point(|c| c.parent < key);
        let end = kids.partition_point(|c| c.parent <= key);
        start..end
    }

    /// Children of one period.
    pub fn children(&self, level: DashaLevel, index: usize) -> &[DashaPeriod] {
        match level.child_level() {
            Some(child_level) => &self.level(child_level)[self.children_range(level, index)],
            None => &[],
        }
    }

    /// Enclosing period of the period at `index` in `level`.
    pub fn parent(&self, level: DashaLevel, index: usize) -> Option<&DashaPeriod> {
        let parent_level = level.parent_level()?;
        let idx = self.level(level).get(index)?.parent?;
        self.level(parent_level).get(idx as usize)
    }

    /// Check every structural invariant of the tree.
    pub fn verify(&self) -> Result<(), VedicError> {
        let fail = |msg: String| Err(VedicError::InvariantViolation(msg));

        if self.levels.len() != ALL_LEVELS.len() {
            return fail(format!("tree has {} levels", self.levels.len()));
        }

        let mahas = self.mahadashas();
        if mahas.len() != 9 {
            return fail(format!("{} mahadashas instead of 9", mahas.len()));
        }
        check_run(mahas, DashaLevel::Mahadasha)?;
        let span = self.end_jd() - self.start_jd();
        if (span - cycle_days()).abs() > SPAN_TOLERANCE_DAYS {
            return fail(format!("mahadashas span {span} days, not 120 years"));
        }
        if !(self.start_jd() <= self.birth_jd && self.birth_jd < self.end_jd()) {
            return fail("birth lies outside the first cycle".to_string());
        }
        if mahas[0].lord != self.balance.lord {
            return fail("first mahadasha lord differs from the balance lord".to_string());
        }

        for level in [DashaLevel::Mahadasha, DashaLevel::Antardasha] {
            let Some(child_level) = level.child_level() else {
                continue;
            };
            let parents = self.level(level);
            let mut expected_children = 0;
            for (idx, parent) in parents.iter().enumerate() {
                let kids = self.children(level, idx);
                expected_children += kids.len();
                if kids.len() != 9 {
                    return fail(format!(
                        "{} {idx} has {} children",
                        level.name(),
                        kids.len()
                    ));
                }
                check_run(kids, child_level)?;
                if kids[0].lord != parent.lord {
                    return fail(format!("{} {idx} first child lord", level.name()));
                }
                let first = kids[0].start_jd;
                let last = kids[kids.len() - 1].end_jd;
                if (first - parent.start_jd).abs() > SPAN_TOLERANCE_DAYS
                    || (last - parent.end_jd).abs() > SPAN_TOLERANCE_DAYS
                {
                    return fail(format!("children of {} {idx} do not span it", level.name()));
                }
                let total: f64 = kids.iter().map(DashaPeriod::duration_days).sum();
                if (total - parent.duration_days()).abs() > SPAN_TOLERANCE_DAYS {
                    return fail(format!(
                        "children of {} {idx} sum to {total} days, parent is {}",
                        level.name(),
                        parent.duration_days()
                    ));
                }
            }
            if self.level(child_level).len() != expected_children {
                return fail(format!("orphan periods below {}", level.name()));
            }
        }
        Ok(())
    }
}

/// A sibling run must be on one level, positive, ordered and contiguous.
fn check_run(run: &[DashaPeriod], level: DashaLevel) -> Result<(), VedicError> {
    for (i, p) in run.iter().enumerate() {
        if p.level != level {
            return Err(VedicError::InvariantViolation(format!(
                "{} found among {} periods",
                p.level.name(),
                level.name()
            )));
        }
        if !(p.duration_days() > 0.0) {
            return Err(VedicError::InvariantViolation(format!(
                "{} {} of {} has non-positive length",
                level.name(),
                i,
                p.lord
            )));
        }
    }
    for pair in run.windows(2) {
        if (pair[1].start_jd - pair[0].end_jd).abs() > SPAN_TOLERANCE_DAYS {
            return Err(VedicError::InvariantViolation(format!(
                "gap or overlap between {} periods of {} and {}",
                level.name(),
                pair[0].lord,
                pair[1].lord
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::types::DAYS_PER_YEAR;
    use crate::graha::Graha;
    use crate::nakshatra::NAKSHATRA_SPAN;

    const BIRTH_JD: f64 = 2_447_000.25;

    #[test]
    fn sizes() {
        let tree = DashaTree::build_jd(100.0, BIRTH_JD).unwrap();
        assert_eq!(tree.level(DashaLevel::Mahadasha).len(), 9);
        assert_eq!(tree.level(DashaLevel::Antardasha).len(), 81);
        assert_eq!(tree.level(DashaLevel::Pratyantardasha).len(), 729);
    }

    #[test]
    fn nakshatra_boundary_gives_full_first_mahadasha() {
        // Start of Magha (120 deg): Ketu, nothing elapsed.
        let tree = DashaTree::build_jd(9.0 * NAKSHATRA_SPAN, BIRTH_JD).unwrap();
        let first = tree.mahadashas()[0];
        assert_eq!(first.lord, Graha::Ketu);
        assert!((first.start_jd - BIRTH_JD).abs() < 1e-6);
        assert!((first.duration_years() - 7.0).abs() < 1e-9);
        assert!(tree.balance().elapsed_fraction < 1e-9);
    }

    #[test]
    fn half_way_through_nakshatra_halves_first_mahadasha() {
        // Middle of Bharani: Shukra, 10 of 20 years remain.
        let tree = DashaTree::build_jd(1.5 * NAKSHATRA_SPAN, BIRTH_JD).unwrap();
        let first = tree.mahadashas()[0];
        assert_eq!(first.lord, Graha::Shukra);
        let remaining = first.end_jd - BIRTH_JD;
        assert!((remaining - 10.0 * DAYS_PER_YEAR).abs() < 1e-6, "{remaining}");
        assert!((tree.balance().balance_days - 10.0 * DAYS_PER_YEAR).abs() < 1e-6);
    }

    #[test]
    fn spans_one_cycle() {
        let tree = DashaTree::build_jd(311.7, BIRTH_JD).unwrap();
        let span_years = (tree.end_jd() - tree.start_jd()) / DAYS_PER_YEAR;
        assert!((span_years - 120.0).abs() < 1e-9);
        assert!(tree.start_jd() <= BIRTH_JD);
    }

    #[test]
    fn parent_and_children_agree() {
        let tree = DashaTree::build_jd(200.0, BIRTH_JD).unwrap();
        for (i, ad) in tree.level(DashaLevel::Antardasha).iter().enumerate() {
            let md = tree.parent(DashaLevel::Antardasha, i).unwrap();
            assert!(md.start_jd <= ad.start_jd && ad.end_jd <= md.end_jd + 1e-9);
        }
        let kids = tree.children(DashaLevel::Mahadasha, 3);
        assert_eq!(kids.len(), 9);
        assert_eq!(kids[0].lord, tree.mahadashas()[3].lord);
        assert!(tree.parent(DashaLevel::Mahadasha, 0).is_none());
        assert!(tree.children(DashaLevel::Pratyantardasha, 0).is_empty());
    }

    #[test]
    fn rejects_non_finite_input() {
        assert!(matches!(
            DashaTree::build_jd(f64::NAN, BIRTH_JD),
            Err(VedicError::InvariantViolation(_))
        ));
    }

    #[test]
    fn verify_catches_tampering() {
        let mut tree = DashaTree::build_jd(50.0, BIRTH_JD).unwrap();
        tree.levels[1][5].end_jd += 1.0;
        assert!(matches!(tree.verify(), Err(VedicError::InvariantViolation(_))));
    }

    #[test]
    fn serde_round_trip_verifies() {
        let tree = DashaTree::build_jd(77.7, BIRTH_JD).unwrap();
        let json = serde_json::to_string(&tree).unwrap();
        let back: DashaTree = serde_json::from_str(&json).unwrap();
        assert_eq!(back, tree);

        let mut broken: serde_json::Value = serde_json::from_str(&json).unwrap();
        broken["levels"][2][10]["end_jd"] = serde_json::json!(0.0);
        assert!(serde_json::from_value::<DashaTree>(broken).is_err());
    }
}
