//! Chart construction.
//!
//! Orchestration order: validate inputs, ephemeris window, ascendant and
//! houses, one batch ephemeris query, sidereal conversion, dasha tree. The builder holds no
//! mutable state, so one instance can serve any number of threads.

use jyotish_ephemeris::{AnalyticEphemeris, Ephemeris, EphemerisError, ValidityWindow};
use jyotish_time::Instant;
use jyotish_vedic_base::{
    ChartConvention, DashaTree, GeoCoordinate, Graha, VedicError, ascendant, compute_houses,
    sidereal_positions,
};
use tracing::debug;

use crate::chart::BirthChart;
use crate::details::{BirthDetails, Geocoder};
use crate::error::ChartError;

/// Builds [`BirthChart`]s from an ephemeris and a fixed convention.
#[derive(Debug, Clone)]
pub struct ChartBuilder<E> {
    ephemeris: E,
    convention: ChartConvention,
}

impl ChartBuilder<AnalyticEphemeris> {
    /// The bundled analytic ephemeris over `window`, with nodes following
    /// the convention.
    pub fn analytic(window: ValidityWindow, convention: ChartConvention) -> Self {
        Self::new(
            AnalyticEphemeris::new(window, convention.node_mode),
            convention,
        )
    }
}

impl Default for ChartBuilder<AnalyticEphemeris> {
    fn default() -> Self {
        Self::analytic(ValidityWindow::DEFAULT, ChartConvention::PINNED)
    }
}

impl<E: Ephemeris> ChartBuilder<E> {
    pub fn new(ephemeris: E, convention: ChartConvention) -> Self {
        Self {
            ephemeris,
            convention,
        }
    }

    pub fn convention(&self) -> &ChartConvention {
        &self.convention
    }

    pub fn ephemeris(&self) -> &E {
        &self.ephemeris
    }

    /// Build a chart for a birth instant and place.
    pub fn build(
        &self,
        instant: &Instant,
        location: &GeoCoordinate,
    ) -> Result<BirthChart, ChartError> {
        let window = self.ephemeris.validity();
        if !window.contains(instant) {
            return Err(EphemerisError::OutOfRange {
                instant: *instant,
                window,
            }
            .into());
        }

        let converter = self.convention.converter();
        let asc = ascendant(instant, location, &converter)?;
        let houses = compute_houses(asc.sidereal_deg, self.convention.house_system)?;

        let raw = self.ephemeris.positions(instant)?;
        let planets = sidereal_positions(&raw, &converter);

        let moon = planets.get(&Graha::Chandra).ok_or_else(|| {
            VedicError::InvariantViolation("ephemeris returned no Moon position".to_string())
        })?;
        let dasha = DashaTree::build(moon.sidereal_longitude_deg, instant)?;

        let chart = BirthChart::assemble(
            self.convention,
            *instant,
            *location,
            asc,
            houses,
            planets,
            dasha,
        )?;
        debug!(
            birth = %instant,
            convention = %self.convention.tag(),
            ascendant = asc.sidereal_deg,
            "built birth chart"
        );
        Ok(chart)
    }

    /// Build from possibly-missing inputs.
    ///
    /// Missing data fails with [`ChartError::IncompleteBirthData`] before
    /// the ephemeris is touched.
    pub fn build_partial(
        &self,
        instant: Option<&Instant>,
        location: Option<&GeoCoordinate>,
    ) -> Result<BirthChart, ChartError> {
        match (instant, location) {
            (Some(i), Some(l)) => self.build(i, l),
            (i, l) => {
                let mut missing = Vec::new();
                if i.is_none() {
                    missing.push("instant");
                }
                if l.is_none() {
                    missing.push("location");
                }
                Err(ChartError::missing(missing))
            }
        }
    }

    /// Resolve raw birth details, then build.
    pub fn build_from_details(
        &self,
        details: &BirthDetails,
        geocoder: Option<&dyn Geocoder>,
    ) -> Result<BirthChart, ChartError> {
        let (instant, location) = details.resolve(geocoder)?;
        self.build(&instant, &location)
    }
}

/// Build a chart with the bundled ephemeris and the pinned convention.
pub fn build(instant: &Instant, location: &GeoCoordinate) -> Result<BirthChart, ChartError> {
    ChartBuilder::default().build(instant, location)
}
