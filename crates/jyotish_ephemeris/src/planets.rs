//! Planet positions from JPL approximate Keplerian elements.
//!
//! Elements and rates from E.M. Standish, "Keplerian Elements for
//! Approximate Positions of the Major Planets", Table 2a (valid
//! 3000 BC to 3000 AD), referred to the J2000 ecliptic and equinox.
//! Heliocentric positions are differenced against the Earth-Moon
//! barycentre and the result is precessed to the mean equinox of date.
//!
//! Accuracy is a few arcminutes for the inner planets and up to about
//! 0.2 deg for Jupiter and Saturn, well inside a nakshatra pada.

use jyotish_frames::{cartesian_to_spherical, precess_longitude_from_j2000};

use crate::EclipticPoint;
use crate::body::Body;

/// Osculating-like elements at J2000 and their rates per Julian century.
#[derive(Debug, Clone, Copy)]
struct OrbitalElements {
    /// Semi-major axis (AU).
    a: [f64; 2],
    /// Eccentricity.
    e: [f64; 2],
    /// Inclination (deg).
    i: [f64; 2],
    /// Mean longitude (deg).
    l: [f64; 2],
    /// Longitude of perihelion (deg).
    peri: [f64; 2],
    /// Longitude of ascending node (deg).
    node: [f64; 2],
    /// Extra mean-anomaly terms `[b, c, s, f]` for Jupiter and Saturn.
    extra: Option<[f64; 4]>,
}

const MERCURY: OrbitalElements = OrbitalElements {
    a: [0.38709843, 0.0],
    e: [0.20563661, 0.00002123],
    i: [7.00559432, -0.00590158],
    l: [252.25166724, 149472.67486623],
    peri: [77.45771895, 0.15940013],
    node: [48.33961819, -0.12214182],
    extra: None,
};

const VENUS: OrbitalElements = OrbitalElements {
    a: [0.72332102, -0.00000026],
    e: [0.00676399, -0.00005107],
    i: [3.39777545, 0.00043494],
    l: [181.97970850, 58517.81560260],
    peri: [131.76755713, 0.05679648],
    node: [76.67261496, -0.27274174],
    extra: None,
};

const EARTH_MOON_BARYCENTRE: OrbitalElements = OrbitalElements {
    a: [1.00000018, -0.00000003],
    e: [0.01673163, -0.00003661],
    i: [-0.00054346, -0.01337178],
    l: [100.46691572, 35999.37306329],
    peri: [102.93005885, 0.31795260],
    node: [-5.11260389, -0.24123856],
    extra: None,
};

const MARS: OrbitalElements = OrbitalElements {
    a: [1.52371243, 0.00000097],
    e: [0.09336511, 0.00009149],
    i: [1.85181869, -0.00724757],
    l: [-4.56813164, 19140.29934243],
    peri: [-23.91744784, 0.45223625],
    node: [49.71320984, -0.26852431],
    extra: None,
};

const JUPITER: OrbitalElements = OrbitalElements {
    a: [5.20248019, -0.00002864],
    e: [0.04853590, 0.00018026],
    i: [1.29861416, -0.00322699],
    l: [34.33479152, 3034.90371757],
    peri: [14.27495244, 0.18199196],
    node: [100.29282654, 0.13024619],
    extra: Some([-0.00012452, 0.06064060, -0.35635438, 38.35125000]),
};

const SATURN: OrbitalElements = OrbitalElements {
    a: [9.54149883, -0.00003065],
    e: [0.05550825, -0.00032044],
    i: [2.49424102, 0.00451969],
    l: [50.07571329, 1222.11494724],
    peri: [92.86136063, 0.54179478],
    node: [113.63998702, -0.25015002],
    extra: Some([0.00025899, -0.13434469, 0.87320147, 38.35125000]),
};

fn elements_for(body: Body) -> Option<&'static OrbitalElements> {
    match body {
        Body::Mercury => Some(&MERCURY),
        Body::Venus => Some(&VENUS),
        Body::Mars => Some(&MARS),
        Body::Jupiter => Some(&JUPITER),
        Body::Saturn => Some(&SATURN),
        _ => None,
    }
}

/// Solve Kepler's equation `M = E - e sin E` by Newton iteration (radians).
pub fn solve_kepler(mean_anomaly: f64, e: f64) -> f64 {
    let mut ecc_anomaly = mean_anomaly + e * mean_anomaly.sin();
    for _ in 0..30 {
        let delta = (mean_anomaly - (ecc_anomaly - e * ecc_anomaly.sin()))
            / (1.0 - e * ecc_anomaly.cos());
        ecc_anomaly += delta;
        if delta.abs() < 1e-12 {
            break;
        }
    }
    ecc_anomaly
}

/// Heliocentric J2000 ecliptic position in AU.
fn heliocentric(el: &OrbitalElements, t: f64) -> [f64; 3] {
    let at = |p: [f64; 2]| p[0] + p[1] * t;
    let a = at(el.a);
    let e = at(el.e);
    let i = at(el.i).to_radians();
    let l = at(el.l);
    let peri = at(el.peri);
    let node = at(el.node);

    let mut m = l - peri;
    if let Some([b, c, s, f]) = el.extra {
        let ft = (f * t).to_radians();
        m += b * t * t + c * ft.cos() + s * ft.sin();
    }
    let m = ((m + 180.0).rem_euclid(360.0) - 180.0).to_radians();
    let omega = (peri - node).to_radians();
    let node = node.to_radians();

    let ea = solve_kepler(m, e);
    let xp = a * (ea.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ea.sin();

    let (so, co) = omega.sin_cos();
    let (sn, cn) = node.sin_cos();
    let (si, ci) = i.sin_cos();

    [
        (co * cn - so * sn * ci) * xp + (-so * cn - co * sn * ci) * yp,
        (co * sn + so * cn * ci) * xp + (-so * sn + co * cn * ci) * yp,
        (so * si) * xp + (co * si) * yp,
    ]
}

/// Geocentric geometric position of a planet, mean equinox of date.
///
/// Returns `None` for bodies that are not Keplerian planets.
/// `t` = Julian centuries of TT since J2000.0.
pub fn planet_geocentric(body: Body, t: f64) -> Option<EclipticPoint> {
    let el = elements_for(body)?;
    let planet = heliocentric(el, t);
    let earth = heliocentric(&EARTH_MOON_BARYCENTRE, t);
    let geo = [
        planet[0] - earth[0],
        planet[1] - earth[1],
        planet[2] - earth[2],
    ];
    let sph = cartesian_to_spherical(&geo);
    Some(EclipticPoint {
        lon_deg: precess_longitude_from_j2000(sph.lon_deg, t),
        lat_deg: sph.lat_deg,
        distance_au: sph.distance,
    })
}
