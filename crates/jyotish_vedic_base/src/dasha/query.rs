//! Active-period lookup.

use jyotish_time::Instant;
use serde::{Deserialize, Serialize};

use crate::graha::Graha;

use super::tree::DashaTree;
use super::types::{DashaLevel, DashaPeriod};

/// The mahadasha, antardasha and pratyantardasha running at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActiveChain {
    pub query_jd: f64,
    pub mahadasha: DashaPeriod,
    pub antardasha: DashaPeriod,
    pub pratyantardasha: DashaPeriod,
}

impl ActiveChain {
    /// Outermost first.
    pub fn periods(&self) -> [DashaPeriod; 3] {
        [self.mahadasha, self.antardasha, self.pratyantardasha]
    }

    pub fn lords(&self) -> [Graha; 3] {
        [
            self.mahadasha.lord,
            self.antardasha.lord,
            self.pratyantardasha.lord,
        ]
    }

    /// e.g. `Shukra/Surya/Chandra`.
    pub fn label(&self) -> String {
        let [a, b, c] = self.lords();
        format!("{a}/{b}/{c}")
    }
}

/// Index of the period containing `jd` in an ordered, contiguous run.
///
/// Start-inclusive and end-exclusive: at a shared boundary the later period
/// wins.
pub fn find_active_period(periods: &[DashaPeriod], jd: f64) -> Option<usize> {
    let idx = periods.partition_point(|p| p.end_jd <= jd);
    periods
        .get(idx)
        .filter(|p| p.start_jd <= jd)
        .map(|_| idx)
}

impl DashaTree {
    /// The active chain at a JD UTC, `None` outside the tree's span.
    pub fn active_chain_jd(&self, jd: f64) -> Option<ActiveChain> {
        let md_idx = find_active_period(self.mahadashas(), jd)?;

        let ad_range = self.children_range(DashaLevel::Mahadasha, md_idx);
        let ad_level = self.level(DashaLevel::Antardasha);
        let ad_idx = ad_range.start + find_active_period(&ad_level[ad_range.clone()], jd)?;

        let pd_range = self.children_range(DashaLevel::Antardasha, ad_idx);
        let pd_level = self.level(DashaLevel::Pratyantardasha);
        let pd_idx = pd_range.start + find_active_period(&pd_level[pd_range.clone()], jd)?;

        Some(ActiveChain {
            query_jd: jd,
            mahadasha: self.mahadashas()[md_idx],
            antardasha: ad_level[ad_idx],
            pratyantardasha: pd_level[pd_idx],
        })
    }

    /// The active chain at an instant, `None` outside the tree's span.
    pub fn active_chain(&self, at: &Instant) -> Option<ActiveChain> {
        self.active_chain_jd(at.jd_utc())
    }
}

/// Free-function form of [`DashaTree::active_chain`].
pub fn active_chain(tree: &DashaTree, at: &Instant) -> Option<ActiveChain> {
    tree.active_chain(at)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::types::DAYS_PER_YEAR;

    const BIRTH_JD: f64 = 2_451_000.5;

    fn tree() -> DashaTree {
        DashaTree::build_jd(123.456, BIRTH_JD).unwrap()
    }

    #[test]
    fn birth_instant_is_covered() {
        let t = tree();
        let chain = t.active_chain_jd(BIRTH_JD).unwrap();
        assert_eq!(chain.mahadasha.lord, t.balance().lord);
        assert!(chain.mahadasha.contains_jd(BIRTH_JD));
        assert!(chain.antardasha.contains_jd(BIRTH_JD));
        assert!(chain.pratyantardasha.contains_jd(BIRTH_JD));
    }

    #[test]
    fn boundary_belongs_to_later_period() {
        let t = tree();
        let second = t.mahadashas()[1];
        let chain = t.active_chain_jd(second.start_jd).unwrap();
        assert_eq!(chain.mahadasha, second);
        assert_eq!(chain.antardasha.lord, second.lord);
        assert_eq!(chain.pratyantardasha.lord, second.lord);
        assert_eq!(chain.antardasha.start_jd, second.start_jd);
    }

    #[test]
    fn outside_span_is_none() {
        let t = tree();
        assert!(t.active_chain_jd(t.start_jd() - 1.0).is_none());
        assert!(t.active_chain_jd(t.end_jd()).is_none());
        assert!(t.active_chain_jd(t.start_jd()).is_some());
    }

    #[test]
    fn chain_is_nested() {
        let t = tree();
        for year in 0..110 {
            let jd = BIRTH_JD + year as f64 * DAYS_PER_YEAR + 17.3;
            let Some(c) = t.active_chain_jd(jd) else {
                continue;
            };
            assert!(c.mahadasha.start_jd <= c.antardasha.start_jd);
            assert!(c.antardasha.start_jd <= c.pratyantardasha.start_jd);
            assert!(c.pratyantardasha.end_jd <= c.antardasha.end_jd);
            assert!(c.antardasha.end_jd <= c.mahadasha.end_jd);
        }
    }

    #[test]
    fn find_in_empty_run() {
        assert_eq!(find_active_period(&[], 1.0), None);
    }

    #[test]
    fn label_format() {
        let t = tree();
        let c = t.active_chain_jd(BIRTH_JD).unwrap();
        assert_eq!(c.label().split('/').count(), 3);
    }
}
