//! Time handling for the jyotish core.
//!
//! This crate provides:
//! - [`Instant`], a civil timestamp that always carries its UTC offset
//! - Julian Date conversions (UTC and TT)
//! - Delta-T (TT - UTC) from the Espenak-Meeus polynomials
//! - Greenwich and local sidereal time
//! - An injectable [`TimeSource`] so "now" can be pinned in tests

pub mod clock;
pub mod delta_t;
pub mod error;
pub mod instant;
pub mod julian;
pub mod sidereal;

pub use clock::{ManualClock, SystemClock, TimeSource};
pub use delta_t::delta_t_seconds;
pub use error::TimeError;
pub use instant::Instant;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd,
    jd_to_calendar, jd_to_centuries,
};
pub use sidereal::{earth_rotation_angle_rad, gmst_rad, local_sidereal_time_rad};
