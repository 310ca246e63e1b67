//! Reference-frame helpers for ephemeris computations.
//!
//! Provides the IAU 2006 general precession and mean obliquity, the five
//! Delaunay arguments, and Cartesian/spherical conversion.

pub mod delaunay;
pub mod obliquity;
pub mod precession;
pub mod spherical;

pub use delaunay::fundamental_arguments;
pub use obliquity::{OBLIQUITY_J2000_DEG, mean_obliquity_deg};
pub use precession::{
    general_precession_longitude_arcsec, general_precession_longitude_deg,
    precess_longitude_from_j2000,
};
pub use spherical::{SphericalCoords, cartesian_to_spherical, normalize_360};
