//! Validity window of an ephemeris provider.

use std::fmt::{Display, Formatter};

use jyotish_time::{Instant, calendar_to_jd};
use serde::{Deserialize, Serialize};

/// Inclusive range of calendar years (UTC) an ephemeris will answer for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidityWindow {
    pub start_year: i32,
    pub end_year: i32,
}

impl ValidityWindow {
    /// Years 1900 through 2100.
    pub const DEFAULT: ValidityWindow = ValidityWindow {
        start_year: 1900,
        end_year: 2100,
    };

    /// The analytic series are not used outside these years at all.
    pub const SUPPORTED: ValidityWindow = ValidityWindow {
        start_year: 1800,
        end_year: 2200,
    };

    /// Build a window; `None` when inverted or beyond [`Self::SUPPORTED`].
    pub fn new(start_year: i32, end_year: i32) -> Option<Self> {
        let window = Self {
            start_year,
            end_year,
        };
        let ok = start_year <= end_year
            && start_year >= Self::SUPPORTED.start_year
            && end_year <= Self::SUPPORTED.end_year;
        ok.then_some(window)
    }

    /// First Julian Date (UTC) inside the window.
    pub fn start_jd(&self) -> f64 {
        calendar_to_jd(self.start_year, 1, 1.0)
    }

    /// First Julian Date (UTC) after the window.
    pub fn end_jd(&self) -> f64 {
        calendar_to_jd(self.end_year + 1, 1, 1.0)
    }

    pub fn contains(&self, instant: &Instant) -> bool {
        let jd = instant.jd_utc();
        jd >= self.start_jd() && jd < self.end_jd()
    }
}

impl Default for ValidityWindow {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl Display for ValidityWindow {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..={}", self.start_year, self.end_year)
    }
}
