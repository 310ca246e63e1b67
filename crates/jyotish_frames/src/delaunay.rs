//! Delaunay fundamental arguments of lunisolar motion.
//!
//! Polynomials from IERS Conventions 2010, Table 5.2e. Used by the lunar
//! node computation.

use std::f64::consts::TAU;

const AS2RAD: f64 = TAU / 1_296_000.0;

/// The five Delaunay arguments `[l, l', F, D, Omega]` in radians.
///
/// `t` = Julian centuries of TT since J2000.0.
/// - `l`  mean anomaly of the Moon
/// - `l'` mean anomaly of the Sun
/// - `F`  mean argument of latitude of the Moon
/// - `D`  mean elongation of the Moon from the Sun
/// - `Omega` mean longitude of the Moon's ascending node
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let l = (485868.249036 + 1717915923.2178 * t + 31.8792 * t2 + 0.051635 * t3 - 0.00024470 * t4)
        * AS2RAD;
    let lp = (1287104.79305 + 129596581.0481 * t - 0.5532 * t2 + 0.000136 * t3 - 0.00001149 * t4)
        * AS2RAD;
    let f = (335779.526232 + 1739527262.8478 * t - 12.7512 * t2 - 0.001037 * t3 + 0.00000417 * t4)
        * AS2RAD;
    let d = (1072260.70369 + 1602961601.2090 * t - 6.3706 * t2 + 0.006593 * t3 - 0.00003169 * t4)
        * AS2RAD;
    let om =
        (450160.398036 - 6962890.5431 * t + 7.4722 * t2 + 0.007702 * t3 - 0.00005939 * t4) * AS2RAD;

    [l, lp, f, d, om]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_longitude_at_j2000() {
        let om = fundamental_arguments(0.0)[4].to_degrees();
        assert!((om - 125.044).abs() < 0.01, "Omega = {om}");
    }

    #[test]
    fn node_regresses() {
        let a = fundamental_arguments(0.0)[4];
        let b = fundamental_arguments(0.001)[4];
        assert!(b < a, "node should move westward");
    }

    #[test]
    fn sun_anomaly_at_j2000() {
        let lp = fundamental_arguments(0.0)[1].to_degrees();
        assert!((lp - 357.529).abs() < 0.01, "l' = {lp}");
    }
}
