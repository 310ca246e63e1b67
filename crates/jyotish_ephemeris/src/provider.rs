//! The ephemeris provider seam and its analytic implementation.

use std::collections::BTreeMap;
use std::sync::Arc;

use jyotish_frames::normalize_360;
use jyotish_time::{Instant, jd_to_centuries};
use serde::{Deserialize, Serialize};

use crate::EclipticPoint;
use crate::body::{ALL_BODIES, Body};
use crate::error::EphemerisError;
use crate::lunar::moon_geocentric;
use crate::nodes::{NodeMode, rahu_deg};
use crate::planets::planet_geocentric;
use crate::solar::sun_geocentric;
use crate::window::ValidityWindow;

/// Half-width of the central difference used for daily motion, in days.
const MOTION_HALF_STEP_DAYS: f64 = 0.5;

/// Tropical geocentric position of one body at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawPosition {
    /// Ecliptic longitude in degrees [0, 360), mean equinox of date.
    pub longitude_deg: f64,
    /// Ecliptic latitude in degrees.
    pub latitude_deg: f64,
    /// Geocentric distance in AU. Zero for the nodes.
    pub distance_au: f64,
    /// Signed longitude change per day in degrees.
    pub daily_motion_deg: f64,
}

impl RawPosition {
    /// Negative daily motion.
    pub fn is_retrograde(&self) -> bool {
        self.daily_motion_deg < 0.0
    }
}

/// Positions of every tracked body at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyPositions {
    pub instant: Instant,
    pub bodies: BTreeMap<Body, RawPosition>,
}

impl BodyPositions {
    pub fn get(&self, body: Body) -> Option<&RawPosition> {
        self.bodies.get(&body)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Body, &RawPosition)> {
        self.bodies.iter().map(|(b, p)| (*b, p))
    }
}

/// Source of tropical geocentric body positions.
///
/// Implementations must be deterministic: the same instant always yields
/// the same positions.
pub trait Ephemeris: Send + Sync {
    /// Instants this provider will answer for.
    fn validity(&self) -> ValidityWindow;

    /// Positions of all nine bodies at `instant`.
    fn positions(&self, instant: &Instant) -> Result<BodyPositions, EphemerisError>;

    /// How Rahu and Ketu are computed. Providers of true nodes override this.
    fn node_mode(&self) -> NodeMode {
        NodeMode::Mean
    }

    /// Position of a single body.
    fn position(&self, body: Body, instant: &Instant) -> Result<RawPosition, EphemerisError> {
        let all = self.positions(instant)?;
        all.get(body)
            .copied()
            .ok_or(EphemerisError::MissingBody(body))
    }
}

impl<E: Ephemeris + ?Sized> Ephemeris for Arc<E> {
    fn validity(&self) -> ValidityWindow {
        (**self).validity()
    }

    fn node_mode(&self) -> NodeMode {
        (**self).node_mode()
    }

    fn positions(&self, instant: &Instant) -> Result<BodyPositions, EphemerisError> {
        (**self).positions(instant)
    }

    fn position(&self, body: Body, instant: &Instant) -> Result<RawPosition, EphemerisError> {
        (**self).position(body, instant)
    }
}

impl<E: Ephemeris + ?Sized> Ephemeris for &E {
    fn validity(&self) -> ValidityWindow {
        (**self).validity()
    }

    fn node_mode(&self) -> NodeMode {
        (**self).node_mode()
    }

    fn positions(&self, instant: &Instant) -> Result<BodyPositions, EphemerisError> {
        (**self).positions(instant)
    }
}

/// File-free ephemeris built from analytic series.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnalyticEphemeris {
    window: ValidityWindow,
    node_mode: NodeMode,
}

impl Default for AnalyticEphemeris {
    fn default() -> Self {
        Self::new(ValidityWindow::DEFAULT, NodeMode::Mean)
    }
}

impl AnalyticEphemeris {
    pub fn new(window: ValidityWindow, node_mode: NodeMode) -> Self {
        Self { window, node_mode }
    }

    fn geometric(&self, body: Body, jd_tt: f64) -> Result<EclipticPoint, EphemerisError> {
        let t = jd_to_centuries(jd_tt);
        let point = match body {
            Body::Sun => sun_geocentric(t),
            Body::Moon => moon_geocentric(t),
            Body::Rahu | Body::Ketu => {
                let rahu = rahu_deg(t, self.node_mode);
                let lon = if body == Body::Ketu {
                    normalize_360(rahu + 180.0)
                } else {
                    rahu
                };
                EclipticPoint {
                    lon_deg: lon,
                    lat_deg: 0.0,
                    distance_au: 0.0,
                }
            }
            Body::Mercury | Body::Venus | Body::Mars | Body::Jupiter | Body::Saturn => {
                match planet_geocentric(body, t) {
                    Some(point) => point,
                    None => return Err(EphemerisError::MissingBody(body)),
                }
            }
        };
        Ok(point)
    }

    fn raw_position(&self, body: Body, jd_tt: f64) -> Result<RawPosition, EphemerisError> {
        let here = self.geometric(body, jd_tt)?;
        let before = self.geometric(body, jd_tt - MOTION_HALF_STEP_DAYS)?;
        let after = self.geometric(body, jd_tt + MOTION_HALF_STEP_DAYS)?;
        let delta = signed_arc(after.lon_deg - before.lon_deg);
        Ok(RawPosition {
            longitude_deg: here.lon_deg,
            latitude_deg: here.lat_deg,
            distance_au: here.distance_au,
            daily_motion_deg: delta / (2.0 * MOTION_HALF_STEP_DAYS),
        })
    }
}

/// Wrap a longitude difference into (-180, 180].
fn signed_arc(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    if r > 180.0 { r - 360.0 } else { r }
}

impl Ephemeris for AnalyticEphemeris {
    fn validity(&self) -> ValidityWindow {
        self.window
    }

    fn node_mode(&self) -> NodeMode {
        self.node_mode
    }

    fn positions(&self, instant: &Instant) -> Result<BodyPositions, EphemerisError> {
        if !self.window.contains(instant) {
            return Err(EphemerisError::OutOfRange {
                instant: *instant,
                window: self.window,
            });
        }
        let jd_tt = instant.jd_tt();
        let bodies = ALL_BODIES
            .iter()
            .map(|&body| Ok((body, self.raw_position(body, jd_tt)?)))
            .collect::<Result<_, EphemerisError>>()?;
        Ok(BodyPositions {
            instant: *instant,
            bodies,
        })
    }

    fn position(&self, body: Body, instant: &Instant) -> Result<RawPosition, EphemerisError> {
        if !self.window.contains(instant) {
            return Err(EphemerisError::OutOfRange {
                instant: *instant,
                window: self.window,
            });
        }
        self.raw_position(body, instant.jd_tt())
    }
}
