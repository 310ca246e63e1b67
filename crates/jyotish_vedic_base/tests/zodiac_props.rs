//! Property tests for the sign/nakshatra resolver and house partition.

use jyotish_vedic_base::{
    HouseSystem, NAKSHATRA_SPAN, Nakshatra, Rashi, compute_houses, resolve,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn sign_and_nakshatra_share_one_longitude(lon in -720.0f64..720.0) {
        let pos = resolve(lon);
        prop_assert!((0.0..360.0).contains(&pos.longitude_deg));

        let from_sign = pos.rashi.start_deg() + pos.degree_in_sign;
        let from_nak = pos.nakshatra.start_deg() + pos.degrees_in_nakshatra;
        prop_assert!((from_sign - pos.longitude_deg).abs() < 1e-9);
        prop_assert!((from_nak - pos.longitude_deg).abs() < 1e-9);

        prop_assert!(pos.degree_in_sign < 30.0);
        prop_assert!(pos.degrees_in_nakshatra < NAKSHATRA_SPAN);
        prop_assert!((1..=4).contains(&pos.pada));
    }

    #[test]
    fn whole_sign_houses_partition_circle(asc in 0.0f64..360.0, lon in 0.0f64..360.0) {
        let houses = compute_houses(asc, HouseSystem::WholeSign).unwrap();
        prop_assert_eq!(houses.cusps[0].sign, resolve(asc).rashi);

        let containing: Vec<u8> = houses
            .iter()
            .filter(|c| c.contains(lon))
            .map(|c| c.house_number)
            .collect();
        prop_assert_eq!(containing.len(), 1);
        prop_assert_eq!(containing[0], houses.house_of(lon));
    }

    #[test]
    fn equal_houses_start_at_ascendant(asc in 0.0f64..360.0) {
        let houses = compute_houses(asc, HouseSystem::Equal).unwrap();
        prop_assert!((houses.cusps[0].start_deg - resolve(asc).longitude_deg).abs() < 1e-9);
        prop_assert_eq!(houses.house_of(asc), 1);
        prop_assert!(houses.verify().is_ok());
    }
}

#[test]
fn every_nakshatra_boundary_starts_its_own_nakshatra() {
    for k in 0..27u8 {
        let lon = k as f64 * (360.0 / 27.0);
        let pos = resolve(lon);
        assert_eq!(pos.nakshatra, Nakshatra::from_index(k), "k={k}");
        assert_eq!(pos.pada, 1, "k={k}");
    }
}

#[test]
fn sign_boundaries() {
    assert_eq!(resolve(30.0).rashi, Rashi::Vrishabha);
    assert_eq!(resolve(29.999_999_999_9).rashi, Rashi::Vrishabha);
    assert_eq!(resolve(29.999).rashi, Rashi::Mesha);
    assert_eq!(resolve(359.999_999_999_9).rashi, Rashi::Mesha);
    assert_eq!(resolve(360.0).nakshatra, Nakshatra::Ashwini);
}

#[test]
fn known_placement() {
    // 0 Simha is Magha pada 1, 10 deg Simha is Magha pada 4.
    let pos = resolve(130.0);
    assert_eq!(pos.rashi, Rashi::Simha);
    assert_eq!(pos.nakshatra, Nakshatra::Magha);
    assert_eq!(pos.pada, 4);
    assert_eq!(pos.sign_number(), 5);
    assert_eq!(pos.nakshatra_number(), 10);
}
