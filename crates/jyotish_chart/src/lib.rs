//! Birth chart construction.
//!
//! This crate provides:
//! - [`BirthDetails`], the raw request, and its resolution into an instant
//!   and a coordinate (with an optional injected [`Geocoder`])
//! - [`ChartBuilder`], which composes the ephemeris, sidereal conversion,
//!   ascendant, houses and the dasha tree into one immutable [`BirthChart`]
//! - [`ChartSummary`], the serializable per-planet placement view
//! - [`rebuild_charts`] for recomputing many stored profiles at once

pub mod batch;
pub mod builder;
pub mod chart;
pub mod details;
pub mod error;
pub mod summary;

pub use batch::{RebuildReport, rebuild_charts};
pub use builder::{ChartBuilder, build};
pub use chart::{BirthChart, ChartIdentity};
pub use details::{BirthDetails, BirthPlace, Geocoder};
pub use error::{ChartError, ErrorKind};
pub use summary::{ChartSummary, HouseSummary, PlacementSummary};
