//! Current-state evaluation: where the grahas are now and which dasha runs.

use std::collections::BTreeMap;
use std::sync::Arc;

use jyotish_chart::BirthChart;
use jyotish_config::{ConfigError, CoreConfig};
use jyotish_ephemeris::{AnalyticEphemeris, Ephemeris};
use jyotish_time::{Instant, SystemClock, TimeSource};
use jyotish_vedic_base::{ActiveChain, Graha, PlanetaryPosition, sidereal_positions};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SessionError;

/// Transits and active dasha for one chart at one instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentSnapshot {
    pub at: Instant,
    /// Sidereal positions at `at`, in the chart's ayanamsha.
    pub transits: BTreeMap<Graha, PlanetaryPosition>,
    /// `None` once the chart's 120-year cycle has run out.
    pub active_dasha: Option<ActiveChain>,
}

impl CurrentSnapshot {
    /// Natal house a transiting graha currently occupies.
    pub fn transit_house(&self, chart: &BirthChart, graha: Graha) -> Option<u8> {
        self.transits
            .get(&graha)
            .map(|p| chart.houses().house_of(p.sidereal_longitude_deg))
    }
}

/// Evaluates [`CurrentSnapshot`]s against an injected ephemeris and clock.
#[derive(Clone)]
pub struct CurrentStateService {
    ephemeris: Arc<dyn Ephemeris>,
    clock: Arc<dyn TimeSource>,
}

impl std::fmt::Debug for CurrentStateService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CurrentStateService")
            .field("window", &self.ephemeris.validity())
            .finish_non_exhaustive()
    }
}

impl Default for CurrentStateService {
    /// Analytic ephemeris over the default window, system clock.
    fn default() -> Self {
        Self::new(Arc::new(AnalyticEphemeris::default()), Arc::new(SystemClock))
    }
}

impl CurrentStateService {
    /// Charts evaluated by this service must use the ephemeris' node mode;
    /// other charts are rejected with [`SessionError::NodeModeMismatch`].
    pub fn new(ephemeris: Arc<dyn Ephemeris>, clock: Arc<dyn TimeSource>) -> Self {
        Self { ephemeris, clock }
    }

    /// Analytic ephemeris over the configured window and node mode, system
    /// clock.
    pub fn from_config(config: &CoreConfig) -> Result<Self, ConfigError> {
        let ephemeris = AnalyticEphemeris::new(
            config.validity_window()?,
            config.convention().node_mode,
        );
        Ok(Self::new(Arc::new(ephemeris), Arc::new(SystemClock)))
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    /// Snapshot at the clock's current time.
    pub fn snapshot(&self, chart: &BirthChart) -> Result<CurrentSnapshot, SessionError> {
        self.snapshot_at(chart, &self.now())
    }

    /// Snapshot at an explicit instant.
    pub fn snapshot_at(
        &self,
        chart: &BirthChart,
        at: &Instant,
    ) -> Result<CurrentSnapshot, SessionError> {
        let chart_nodes = chart.convention().node_mode;
        if chart_nodes != self.ephemeris.node_mode() {
            return Err(SessionError::NodeModeMismatch {
                chart: chart_nodes,
                ephemeris: self.ephemeris.node_mode(),
            });
        }
        let raw = self.ephemeris.positions(at)?;
        let transits = sidereal_positions(&raw, &chart.convention().converter());
        let active_dasha = chart.dasha().active_chain(at);
        let label = active_dasha
            .as_ref()
            .map(ActiveChain::label)
            .unwrap_or_default();
        debug!(at = %at, dasha = %label, "evaluated current state");
        Ok(CurrentSnapshot {
            at: *at,
            transits,
            active_dasha,
        })
    }
}
