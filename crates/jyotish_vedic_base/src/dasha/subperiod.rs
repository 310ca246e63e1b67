//! Proportional sub-period generation.
//!
//! Each child lasts `parent_duration * child_years / 120`, cycling through
//! the Vimshottari order starting from the parent's own lord.

use super::types::{DashaLevel, DashaPeriod};
use super::vimshottari::{VIMSHOTTARI_TOTAL_YEARS, period_years, sequence_from};

/// Snap the last child's end to the parent's end to absorb floating-point drift.
pub fn snap_last_child_end(children: &mut [DashaPeriod], parent_end_jd: f64) {
    if let Some(last) = children.last_mut() {
        last.end_jd = parent_end_jd;
    }
}

/// The nine children of `parent`, or none at the deepest level.
///
/// `parent_idx` is the parent's index within its own level.
pub fn proportional_children(parent: &DashaPeriod, parent_idx: u32) -> Vec<DashaPeriod> {
    let Some(child_level) = parent.level.child_level() else {
        return Vec::new();
    };
    children_at(parent, parent_idx, child_level)
}

fn children_at(parent: &DashaPeriod, parent_idx: u32, level: DashaLevel) -> Vec<DashaPeriod> {
    let parent_duration = parent.duration_days();
    let mut children = Vec::with_capacity(9);
    let mut cursor = parent.start_jd;

    for (order_0, lord) in sequence_from(parent.lord).enumerate() {
        let duration = parent_duration * period_years(lord) / VIMSHOTTARI_TOTAL_YEARS;
        let end = cursor + duration;
        children.push(DashaPeriod {
            lord,
            start_jd: cursor,
            end_jd: end,
            level,
            order: order_0 as u16 + 1,
            parent: Some(parent_idx),
        });
        cursor = end;
    }

    snap_last_child_end(&mut children, parent.end_jd);
    children
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dasha::types::DAYS_PER_YEAR;
    use crate::graha::Graha;

    fn venus_maha() -> DashaPeriod {
        DashaPeriod {
            lord: Graha::Shukra,
            start_jd: 2_440_000.5,
            end_jd: 2_440_000.5 + 20.0 * DAYS_PER_YEAR,
            level: DashaLevel::Mahadasha,
            order: 1,
            parent: None,
        }
    }

    #[test]
    fn first_child_is_parent_lord() {
        let kids = proportional_children(&venus_maha(), 0);
        assert_eq!(kids.len(), 9);
        assert_eq!(kids[0].lord, Graha::Shukra);
        assert_eq!(kids[1].lord, Graha::Surya);
        assert_eq!(kids[8].lord, Graha::Ketu);
    }

    #[test]
    fn venus_venus_is_three_years_four_months() {
        let kids = proportional_children(&venus_maha(), 0);
        // 20 * 20 / 120 = 3.333 years.
        assert!((kids[0].duration_years() - 20.0 / 6.0).abs() < 1e-9);
    }

    #[test]
    fn children_tile_parent() {
        let parent = venus_maha();
        let kids = proportional_children(&parent, 4);
        assert_eq!(kids[0].start_jd, parent.start_jd);
        assert_eq!(kids[8].end_jd, parent.end_jd);
        for pair in kids.windows(2) {
            assert_eq!(pair[0].end_jd, pair[1].start_jd);
        }
        assert!(kids.iter().all(|k| k.parent == Some(4)));
        assert!(kids.iter().all(|k| k.level == DashaLevel::Antardasha));
    }

    #[test]
    fn deepest_level_has_no_children() {
        let mut p = venus_maha();
        p.level = DashaLevel::Pratyantardasha;
        assert!(proportional_children(&p, 0).is_empty());
    }
}
