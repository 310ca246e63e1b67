//! Analytic geocentric ephemeris for the bodies used in Vedic charts.
//!
//! This crate provides:
//! - The [`Ephemeris`] trait, the provider seam used by chart and transit code
//! - [`AnalyticEphemeris`], a file-free implementation built from
//!   published series (Meeus for Sun and Moon, JPL Keplerian elements for
//!   the planets, Delaunay Omega for the lunar nodes)
//! - An explicit [`ValidityWindow`]; instants outside it are rejected
//!
//! All longitudes are tropical, geocentric, referred to the mean equinox
//! of date.

pub mod body;
pub mod error;
pub mod lunar;
pub mod nodes;
pub mod planets;
pub mod provider;
pub mod solar;
pub mod window;

pub use body::{ALL_BODIES, Body};
pub use error::EphemerisError;
pub use nodes::{LunarNode, NodeMode, lunar_node_deg};
pub use provider::{AnalyticEphemeris, BodyPositions, Ephemeris, RawPosition};
pub use window::ValidityWindow;

/// Kilometres per astronomical unit (IAU 2012).
pub const KM_PER_AU: f64 = 149_597_870.7;

/// Geometric ecliptic position of a body at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EclipticPoint {
    /// Longitude in degrees [0, 360), mean equinox of date.
    pub lon_deg: f64,
    /// Latitude in degrees.
    pub lat_deg: f64,
    /// Geocentric distance in AU.
    pub distance_au: f64,
}
