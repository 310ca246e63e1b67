//! Vimshottari constants: graha order and period lengths.
//!
//! Provenance: BPHS, chapter on Vimshottari dasha. The nakshatra to lord
//! mapping is [`crate::nakshatra::Nakshatra::lord`].

use crate::graha::Graha;

use super::types::DAYS_PER_YEAR;

/// Graha order of the cycle.
pub const VIMSHOTTARI_SEQUENCE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Period of each graha in [`VIMSHOTTARI_SEQUENCE`] order, in years.
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Length of the full cycle in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

fn sequence_position(graha: Graha) -> usize {
    match graha {
        Graha::Ketu => 0,
        Graha::Shukra => 1,
        Graha::Surya => 2,
        Graha::Chandra => 3,
        Graha::Mangal => 4,
        Graha::Rahu => 5,
        Graha::Guru => 6,
        Graha::Shani => 7,
        Graha::Buddh => 8,
    }
}

/// Mahadasha length of a graha in years.
pub fn period_years(graha: Graha) -> f64 {
    VIMSHOTTARI_YEARS[sequence_position(graha)]
}

/// Mahadasha length of a graha in days.
pub fn period_days(graha: Graha) -> f64 {
    period_years(graha) * DAYS_PER_YEAR
}

/// Full cycle length in days.
pub fn cycle_days() -> f64 {
    VIMSHOTTARI_TOTAL_YEARS * DAYS_PER_YEAR
}

/// The nine grahas in cycle order, starting with `first`.
pub fn sequence_from(first: Graha) -> impl Iterator<Item = Graha> {
    let start = sequence_position(first);
    (0..VIMSHOTTARI_SEQUENCE.len()).map(move |i| VIMSHOTTARI_SEQUENCE[(start + i) % 9])
}
