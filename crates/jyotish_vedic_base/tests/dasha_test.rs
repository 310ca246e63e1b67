//! Integration tests for the Vimshottari dasha tree.

use jyotish_time::Instant;
use jyotish_vedic_base::dasha::{VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_YEARS};
use jyotish_vedic_base::{
    DAYS_PER_YEAR, DashaLevel, DashaTree, Graha, NAKSHATRA_SPAN, active_chain, build_tree,
};
use proptest::prelude::*;

fn birth() -> Instant {
    Instant::parse("1990-04-12T06:30:00+05:30").unwrap()
}

#[test]
fn sequence_years_total_120() {
    let total: f64 = VIMSHOTTARI_YEARS.iter().sum();
    assert_eq!(total, 120.0);
    assert_eq!(VIMSHOTTARI_SEQUENCE[0], Graha::Ketu);
    assert_eq!(VIMSHOTTARI_SEQUENCE[8], Graha::Buddh);
}

/// Moon exactly at the start of Magha: full seven-year Ketu mahadasha from birth.
#[test]
fn moon_on_nakshatra_boundary() {
    let b = birth();
    let tree = build_tree(120.0, &b).unwrap();
    let first = tree.mahadashas()[0];
    assert_eq!(first.lord, Graha::Ketu);
    assert!((first.start_jd - b.jd_utc()).abs() < 1e-6);
    assert!((first.end_jd - first.start_jd - 7.0 * DAYS_PER_YEAR).abs() < 1e-6);
}

/// Moon half-way through Rohini: five of Chandra's ten years remain.
#[test]
fn moon_half_way_through_nakshatra() {
    let b = birth();
    let tree = build_tree(3.5 * NAKSHATRA_SPAN, &b).unwrap();
    let first = tree.mahadashas()[0];
    assert_eq!(first.lord, Graha::Chandra);
    assert!((first.end_jd - b.jd_utc() - 5.0 * DAYS_PER_YEAR).abs() < 1e-6);
    assert!((b.jd_utc() - first.start_jd - 5.0 * DAYS_PER_YEAR).abs() < 1e-6);
    assert_eq!(tree.mahadashas()[1].lord, Graha::Mangal);
}

#[test]
fn active_chain_at_birth_matches_balance_lord() {
    let b = birth();
    let tree = build_tree(200.0, &b).unwrap();
    let chain = active_chain(&tree, &b).unwrap();
    assert_eq!(chain.mahadasha.lord, tree.balance().lord);
    assert_eq!(chain.mahadasha.level, DashaLevel::Mahadasha);
    assert_eq!(chain.antardasha.level, DashaLevel::Antardasha);
    assert_eq!(chain.pratyantardasha.level, DashaLevel::Pratyantardasha);
}

#[test]
fn every_pratyantardasha_start_resolves_to_itself() {
    let tree = DashaTree::build_jd(33.3, 2_448_000.5).unwrap();
    for period in tree.level(DashaLevel::Pratyantardasha) {
        let chain = tree.active_chain_jd(period.start_jd).unwrap();
        assert_eq!(chain.pratyantardasha, *period);
    }
}

#[test]
fn tree_json_round_trip() {
    let tree = build_tree(271.0, &birth()).unwrap();
    let json = serde_json::to_string(&tree).unwrap();
    let back: DashaTree = serde_json::from_str(&json).unwrap();
    assert_eq!(serde_json::to_string(&back).unwrap(), json);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn tree_spans_one_cycle(moon in 0.0f64..360.0, birth_jd in 2_415_020.5f64..2_488_069.5) {
        let tree = DashaTree::build_jd(moon, birth_jd).unwrap();
        let span = tree.end_jd() - tree.start_jd();
        prop_assert!((span - 120.0 * DAYS_PER_YEAR).abs() < 1e-6);
        prop_assert!(tree.start_jd() <= birth_jd && birth_jd < tree.end_jd());
        prop_assert!(tree.verify().is_ok());
    }

    #[test]
    fn exactly_one_chain_per_instant(moon in 0.0f64..360.0, offset_years in 0.0f64..119.9) {
        let tree = DashaTree::build_jd(moon, 2_451_545.0).unwrap();
        let jd = tree.start_jd() + offset_years * DAYS_PER_YEAR;
        let chain = tree.active_chain_jd(jd).unwrap();

        for (level, active) in [
            (DashaLevel::Mahadasha, chain.mahadasha),
            (DashaLevel::Antardasha, chain.antardasha),
            (DashaLevel::Pratyantardasha, chain.pratyantardasha),
        ] {
            let hits: Vec<_> = tree
                .level(level)
                .iter()
                .filter(|p| p.contains_jd(jd))
                .collect();
            prop_assert_eq!(hits.len(), 1);
            prop_assert_eq!(*hits[0], active);
        }
    }
}
