//! Geocentric Moon, Meeus *Astronomical Algorithms* 2nd ed., chapter 47.
//!
//! Truncated ELP-2000/82 series: the 36 largest longitude/distance terms
//! of Table 47.A and the 30 largest latitude terms of Table 47.B, plus the
//! additive Venus, Jupiter and flattening terms. Accuracy is about 0.01 deg
//! in longitude and 0.005 deg in latitude, mean equinox of date.

use jyotish_frames::normalize_360;

use crate::{EclipticPoint, KM_PER_AU};

/// Table 47.A: `[D, M, M', F, sigma_l (1e-6 deg), sigma_r (1e-3 km)]`.
#[rustfmt::skip]
static LON_DIST_TERMS: [[f64; 6]; 36] = [
    [0.0,  0.0,  1.0,  0.0,  6_288_774.0, -20_905_355.0],
    [2.0,  0.0, -1.0,  0.0,  1_274_027.0,  -3_699_111.0],
    [2.0,  0.0,  0.0,  0.0,    658_314.0,  -2_955_968.0],
    [0.0,  0.0,  2.0,  0.0,    213_618.0,    -569_925.0],
    [0.0,  1.0,  0.0,  0.0,   -185_116.0,      48_888.0],
    [0.0,  0.0,  0.0,  2.0,   -114_332.0,      -3_149.0],
    [2.0,  0.0, -2.0,  0.0,     58_793.0,     246_158.0],
    [2.0, -1.0, -1.0,  0.0,     57_066.0,    -152_138.0],
    [2.0,  0.0,  1.0,  0.0,     53_322.0,    -170_733.0],
    [2.0, -1.0,  0.0,  0.0,     45_758.0,    -204_586.0],
    [0.0,  1.0, -1.0,  0.0,    -40_923.0,    -129_620.0],
    [1.0,  0.0,  0.0,  0.0,    -34_720.0,     108_743.0],
    [0.0,  1.0,  1.0,  0.0,    -30_383.0,     104_755.0],
    [2.0,  0.0,  0.0, -2.0,     15_327.0,      10_321.0],
    [0.0,  0.0,  1.0,  2.0,    -12_528.0,           0.0],
    [0.0,  0.0,  1.0, -2.0,     10_980.0,      79_661.0],
    [4.0,  0.0, -1.0,  0.0,     10_675.0,     -34_782.0],
    [0.0,  0.0,  3.0,  0.0,     10_034.0,     -23_210.0],
    [4.0,  0.0, -2.0,  0.0,      8_548.0,     -21_636.0],
    [2.0,  1.0, -1.0,  0.0,     -7_888.0,      24_208.0],
    [2.0,  1.0,  0.0,  0.0,     -6_766.0,      30_824.0],
    [1.0,  0.0, -1.0,  0.0,     -5_163.0,      -8_379.0],
    [1.0,  1.0,  0.0,  0.0,      4_987.0,     -16_675.0],
    [2.0, -1.0,  1.0,  0.0,      4_036.0,     -12_831.0],
    [2.0,  0.0,  2.0,  0.0,      3_994.0,     -10_445.0],
    [4.0,  0.0,  0.0,  0.0,      3_861.0,     -11_650.0],
    [2.0,  0.0, -3.0,  0.0,      3_665.0,      14_403.0],
    [0.0,  1.0, -2.0,  0.0,     -2_689.0,      -7_003.0],
    [2.0,  0.0, -1.0,  2.0,     -2_602.0,           0.0],
    [2.0, -1.0, -2.0,  0.0,      2_390.0,      10_056.0],
    [1.0,  0.0,  1.0,  0.0,     -2_348.0,       6_322.0],
    [2.0, -2.0,  0.0,  0.0,      2_236.0,      -9_884.0],
    [0.0,  1.0,  2.0,  0.0,     -2_120.0,       5_751.0],
    [0.0,  2.0,  0.0,  0.0,     -2_069.0,           0.0],
    [2.0, -2.0, -1.0,  0.0,      2_048.0,      -4_950.0],
    [2.0,  0.0,  1.0, -2.0,     -1_773.0,       4_130.0],
];

/// Table 47.B: `[D, M, M', F, sigma_b (1e-6 deg)]`.
#[rustfmt::skip]
static LAT_TERMS: [[f64; 5]; 30] = [
    [0.0,  0.0,  0.0,  1.0, 5_128_122.0],
    [0.0,  0.0,  1.0,  1.0,   280_602.0],
    [0.0,  0.0,  1.0, -1.0,   277_693.0],
    [2.0,  0.0,  0.0, -1.0,   173_237.0],
    [2.0,  0.0, -1.0,  1.0,    55_413.0],
    [2.0,  0.0, -1.0, -1.0,    46_271.0],
    [2.0,  0.0,  0.0,  1.0,    32_573.0],
    [0.0,  0.0,  2.0,  1.0,    17_198.0],
    [2.0,  0.0,  1.0, -1.0,     9_266.0],
    [0.0,  0.0,  2.0, -1.0,     8_822.0],
    [2.0, -1.0,  0.0, -1.0,     8_216.0],
    [2.0,  0.0, -2.0, -1.0,     4_324.0],
    [2.0,  0.0,  1.0,  1.0,     4_200.0],
    [2.0,  1.0,  0.0, -1.0,    -3_359.0],
    [2.0, -1.0, -1.0,  1.0,     2_463.0],
    [2.0, -1.0,  0.0,  1.0,     2_211.0],
    [2.0, -1.0, -1.0, -1.0,     2_065.0],
    [0.0,  1.0, -1.0, -1.0,    -1_870.0],
    [4.0,  0.0, -1.0, -1.0,     1_828.0],
    [0.0,  1.0,  0.0,  1.0,    -1_794.0],
    [0.0,  0.0,  0.0,  3.0,    -1_749.0],
    [0.0,  1.0, -1.0,  1.0,    -1_565.0],
    [1.0,  0.0,  0.0,  1.0,    -1_491.0],
    [0.0,  1.0,  1.0,  1.0,    -1_475.0],
    [0.0,  1.0,  1.0, -1.0,    -1_410.0],
    [0.0,  1.0,  0.0, -1.0,    -1_344.0],
    [1.0,  0.0,  0.0, -1.0,    -1_335.0],
    [0.0,  0.0,  3.0,  1.0,     1_107.0],
    [4.0,  0.0,  0.0, -1.0,     1_021.0],
    [4.0,  0.0, -1.0,  1.0,       833.0],
];

/// Mean arguments of the lunar theory, degrees.
struct LunarArguments {
    /// Mean longitude L'.
    lp: f64,
    /// Mean elongation D.
    d: f64,
    /// Sun's mean anomaly M.
    m: f64,
    /// Moon's mean anomaly M'.
    mp: f64,
    /// Argument of latitude F.
    f: f64,
}

impl LunarArguments {
    fn at(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        Self {
            lp: 218.3164477 + 481267.88123421 * t - 0.0015786 * t2 + t3 / 538841.0
                - t4 / 65194000.0,
            d: 297.8501921 + 445267.1114034 * t - 0.0018819 * t2 + t3 / 545868.0
                - t4 / 113065000.0,
            m: 357.5291092 + 35999.0502909 * t - 0.0001536 * t2 + t3 / 24490000.0,
            mp: 134.9633964 + 477198.8675055 * t + 0.0087414 * t2 + t3 / 69699.0
                - t4 / 14712000.0,
            f: 93.2720950 + 483202.0175233 * t - 0.0036539 * t2 - t3 / 3526000.0
                + t4 / 863310000.0,
        }
    }

    fn combine(&self, d: f64, m: f64, mp: f64, f: f64) -> f64 {
        (d * self.d + m * self.m + mp * self.mp + f * self.f).to_radians()
    }
}

/// Eccentricity damping for terms involving the Sun's anomaly.
fn eccentricity_factor(e: f64, m_multiplier: f64) -> f64 {
    match m_multiplier.abs() as u8 {
        1 => e,
        2 => e * e,
        _ => 1.0,
    }
}

/// Geocentric Moon at `t` Julian centuries of TT since J2000.0.
pub fn moon_geocentric(t: f64) -> EclipticPoint {
    let args = LunarArguments::at(t);
    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479264.290 * t).to_radians();
    let a3 = (313.45 + 481266.484 * t).to_radians();
    let e = 1.0 - 0.002516 * t - 0.0000074 * t * t;

    let mut sum_l = 0.0;
    let mut sum_r = 0.0;
    for row in &LON_DIST_TERMS {
        let arg = args.combine(row[0], row[1], row[2], row[3]);
        let k = eccentricity_factor(e, row[1]);
        sum_l += row[4] * k * arg.sin();
        sum_r += row[5] * k * arg.cos();
    }

    let mut sum_b = 0.0;
    for row in &LAT_TERMS {
        let arg = args.combine(row[0], row[1], row[2], row[3]);
        sum_b += row[4] * eccentricity_factor(e, row[1]) * arg.sin();
    }

    let lp = args.lp.to_radians();
    let f = args.f.to_radians();
    let mp = args.mp.to_radians();

    sum_l += 3958.0 * a1.sin() + 1962.0 * (lp - f).sin() + 318.0 * a2.sin();
    sum_b += -2235.0 * lp.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f).sin()
        + 175.0 * (a1 + f).sin()
        + 127.0 * (lp - mp).sin()
        - 115.0 * (lp + mp).sin();

    let distance_km = 385_000.56 + sum_r / 1000.0;

    EclipticPoint {
        lon_deg: normalize_360(args.lp + sum_l / 1_000_000.0),
        lat_deg: sum_b / 1_000_000.0,
        distance_au: distance_km / KM_PER_AU,
    }
}
