//! Batch recomputation of stored profiles.
//!
//! Used when a convention changes and every stored chart must be rebuilt.
//! Profiles without complete birth data are skipped, failures are collected
//! per profile, and the run never stops early.

use std::fmt::Display;

use jyotish_ephemeris::Ephemeris;
use tracing::{info, warn};

use crate::builder::ChartBuilder;
use crate::chart::BirthChart;
use crate::details::{BirthDetails, Geocoder};
use crate::error::{ChartError, ErrorKind};

/// Outcome of [`rebuild_charts`].
#[derive(Debug)]
pub struct RebuildReport<K> {
    pub rebuilt: Vec<(K, BirthChart)>,
    /// Profiles with incomplete birth data.
    pub skipped: Vec<K>,
    pub failed: Vec<(K, ChartError)>,
}

impl<K> RebuildReport<K> {
    pub fn total(&self) -> usize {
        self.rebuilt.len() + self.skipped.len() + self.failed.len()
    }
}

impl<K> Default for RebuildReport<K> {
    fn default() -> Self {
        Self {
            rebuilt: Vec::new(),
            skipped: Vec::new(),
            failed: Vec::new(),
        }
    }
}

/// Rebuild a chart for every `(id, details)` profile.
pub fn rebuild_charts<E, K, I>(
    builder: &ChartBuilder<E>,
    profiles: I,
    geocoder: Option<&dyn Geocoder>,
) -> RebuildReport<K>
where
    E: Ephemeris,
    K: Display,
    I: IntoIterator<Item = (K, BirthDetails)>,
{
    let mut report = RebuildReport::default();
    for (id, details) in profiles {
        match builder.build_from_details(&details, geocoder) {
            Ok(chart) => report.rebuilt.push((id, chart)),
            Err(e) if e.kind() == ErrorKind::IncompleteBirthData => {
                info!(profile = %id, error = %e, "skipping profile");
                report.skipped.push(id);
            }
            Err(e) => {
                warn!(profile = %id, error = %e, "chart rebuild failed");
                report.failed.push((id, e));
            }
        }
    }
    info!(
        convention = %builder.convention().tag(),
        rebuilt = report.rebuilt.len(),
        skipped = report.skipped.len(),
        failed = report.failed.len(),
        "chart rebuild finished"
    );
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::details::BirthPlace;
    use chrono::{NaiveDate, NaiveTime};

    fn details(year: i32, lat: f64) -> BirthDetails {
        BirthDetails::new(
            NaiveDate::from_ymd_opt(year, 3, 3).unwrap(),
            NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
            3600,
            BirthPlace::Coordinates {
                latitude_deg: lat,
                longitude_deg: 10.0,
            },
        )
    }

    #[test]
    fn sorts_profiles_into_outcomes() {
        let profiles = vec![
            ("ok", details(1970, 45.0)),
            ("no-date", BirthDetails { date: None, ..details(1970, 45.0) }),
            ("polar", details(1970, 80.0)),
            ("too-early", details(1890, 45.0)),
            ("ok-2", details(2020, -33.0)),
        ];
        let report = rebuild_charts(&ChartBuilder::default(), profiles, None);
        assert_eq!(report.total(), 5);
        let rebuilt: Vec<_> = report.rebuilt.iter().map(|(k, _)| *k).collect();
        assert_eq!(rebuilt, vec!["ok", "ok-2"]);
        assert_eq!(report.skipped, vec!["no-date"]);
        let kinds: Vec<_> = report.failed.iter().map(|(k, e)| (*k, e.kind())).collect();
        assert_eq!(
            kinds,
            vec![
                ("polar", ErrorKind::AscendantUndefined),
                ("too-early", ErrorKind::OutOfRange)
            ]
        );
    }
}
