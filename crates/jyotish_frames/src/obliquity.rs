//! Mean obliquity of the ecliptic.
//!
//! IAU 2006 polynomial (Hilton et al. 2006), arcseconds.

/// Mean obliquity at J2000.0 in degrees (84381.406").
pub const OBLIQUITY_J2000_DEG: f64 = 84_381.406 / 3600.0;

/// Mean obliquity of date in degrees, `t` in Julian centuries TT since J2000.0.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    let arcsec = 84_381.406 - 46.836769 * t - 0.0001831 * t * t + 0.00200340 * t.powi(3)
        - 0.000000576 * t.powi(4)
        - 0.0000000434 * t.powi(5);
    arcsec / 3600.0
}
