//! Per-session memoization of the first-turn snapshot.
//!
//! A session's transits and active dasha are evaluated once, on its first
//! turn, and reused by later turns until the entry is older than the
//! staleness window or the session's chart changes. Expiry is decided when
//! an entry is read; there is no background sweep.
//!
//! Each session id owns a slot behind its own mutex. The map lock is only
//! held long enough to find or insert the slot, so turns of one session run
//! one at a time while different sessions never wait on each other.

use std::sync::Arc;
use std::time::Duration;

use dashmap::DashMap;
use jyotish_chart::BirthChart;
use jyotish_config::{ConfigError, CoreConfig};
use jyotish_time::Instant;
use parking_lot::Mutex;
use serde::Serialize;
use tracing::{debug, info};

use crate::current::{CurrentSnapshot, CurrentStateService};
use crate::error::SessionError;

/// Six hours.
pub const DEFAULT_STALENESS: Duration = Duration::from_secs(6 * 60 * 60);

/// What a session reuses between turns.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSnapshot {
    pub session_id: String,
    pub chart: Arc<BirthChart>,
    pub current: CurrentSnapshot,
    pub created_at: Instant,
}

impl SessionSnapshot {
    /// Whether more than `staleness` has passed between creation and `now`.
    pub fn is_stale(&self, now: &Instant, staleness: Duration) -> bool {
        let elapsed_ms = (now.utc() - self.created_at.utc()).num_milliseconds();
        elapsed_ms > 0 && elapsed_ms as u128 > staleness.as_millis()
    }
}

type Slot = Arc<Mutex<Option<Arc<SessionSnapshot>>>>;

/// Session id to snapshot, with read-time expiry.
#[derive(Debug)]
pub struct SessionCache {
    service: CurrentStateService,
    staleness: Duration,
    slots: DashMap<String, Slot>,
}

impl SessionCache {
    pub fn new(service: CurrentStateService, staleness: Duration) -> Self {
        Self {
            service,
            staleness,
            slots: DashMap::new(),
        }
    }

    pub fn with_default_staleness(service: CurrentStateService) -> Self {
        Self::new(service, DEFAULT_STALENESS)
    }

    /// Service and staleness window from `[ephemeris]`, `[session]` and
    /// `[convention]`.
    pub fn from_config(config: &CoreConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let service = CurrentStateService::from_config(config)?;
        Ok(Self::new(service, config.staleness()))
    }

    pub fn staleness(&self) -> Duration {
        self.staleness
    }

    pub fn service(&self) -> &CurrentStateService {
        &self.service
    }

    /// Number of sessions with a slot, fresh or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Return the session's snapshot, computing it on first use, after
    /// expiry, or when `chart` differs from the cached one.
    pub fn get_or_compute(
        &self,
        session_id: &str,
        chart: &Arc<BirthChart>,
    ) -> Result<Arc<SessionSnapshot>, SessionError> {
        if session_id.is_empty() {
            return Err(SessionError::EmptySessionId);
        }

        let slot: Slot = self
            .slots
            .entry(session_id.to_owned())
            .or_default()
            .value()
            .clone();
        let mut entry = slot.lock();
        let now = self.service.now();

        if let Some(cached) = entry.as_ref() {
            if cached.chart.identity() != chart.identity() {
                info!(session = session_id, "chart changed, rebuilding session snapshot");
            } else if cached.is_stale(&now, self.staleness) {
                info!(
                    session = session_id,
                    created_at = %cached.created_at,
                    "session snapshot expired"
                );
            } else {
                debug!(session = session_id, "session cache hit");
                return Ok(Arc::clone(cached));
            }
        } else {
            debug!(session = session_id, "session cache miss");
        }

        let current = self.service.snapshot_at(chart, &now)?;
        let fresh = Arc::new(SessionSnapshot {
            session_id: session_id.to_owned(),
            chart: Arc::clone(chart),
            current,
            created_at: now,
        });
        *entry = Some(Arc::clone(&fresh));
        Ok(fresh)
    }

    /// The cached snapshot if present and fresh. Never computes.
    pub fn peek(&self, session_id: &str) -> Option<Arc<SessionSnapshot>> {
        let slot = self.slots.get(session_id)?.value().clone();
        let now = self.service.now();
        let entry = slot.lock();
        entry
            .as_ref()
            .filter(|s| !s.is_stale(&now, self.staleness))
            .cloned()
    }

    /// Discard a session. Returns whether it existed.
    pub fn end_session(&self, session_id: &str) -> bool {
        let removed = self.slots.remove(session_id).is_some();
        if removed {
            debug!(session = session_id, "session ended");
        }
        removed
    }

    /// Drop every stale or empty slot. Slots that a caller holds, locked
    /// or about to be, are kept. Returns the number removed.
    pub fn purge_expired(&self) -> usize {
        let now = self.service.now();
        let before = self.slots.len();
        self.slots.retain(|_, slot| {
            if Arc::strong_count(slot) > 1 {
                return true;
            }
            match slot.try_lock() {
                Some(entry) => entry
                    .as_ref()
                    .is_some_and(|s| !s.is_stale(&now, self.staleness)),
                None => true,
            }
        });
        let purged = before.saturating_sub(self.slots.len());
        if purged > 0 {
            info!(purged, "purged expired sessions");
        }
        purged
    }
}
