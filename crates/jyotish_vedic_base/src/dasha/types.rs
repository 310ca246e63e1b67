//! Core types for Vimshottari dasha periods.

use jyotish_time::{Instant, TimeError};
use serde::{Deserialize, Serialize};

use crate::graha::Graha;

/// Year length for dasha arithmetic (Julian year).
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Levels of the dasha hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum DashaLevel {
    Mahadasha = 0,
    Antardasha = 1,
    Pratyantardasha = 2,
}

/// All levels, outermost first.
pub const ALL_LEVELS: [DashaLevel; 3] = [
    DashaLevel::Mahadasha,
    DashaLevel::Antardasha,
    DashaLevel::Pratyantardasha,
];

impl DashaLevel {
    pub fn from_u8(v: u8) -> Option<Self> {
        ALL_LEVELS.get(v as usize).copied()
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Mahadasha => "Mahadasha",
            Self::Antardasha => "Antardasha",
            Self::Pratyantardasha => "Pratyantardasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => Some(Self::Antardasha),
            Self::Antardasha => Some(Self::Pratyantardasha),
            Self::Pratyantardasha => None,
        }
    }

    /// Enclosing level, if any.
    pub const fn parent_level(self) -> Option<Self> {
        match self {
            Self::Mahadasha => None,
            Self::Antardasha => Some(Self::Mahadasha),
            Self::Pratyantardasha => Some(Self::Antardasha),
        }
    }
}

/// A single dasha period, `[start_jd, end_jd)` in JD UTC.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashaPeriod {
    /// The graha ruling this period.
    pub lord: Graha,
    /// JD UTC, inclusive.
    pub start_jd: f64,
    /// JD UTC, exclusive.
    pub end_jd: f64,
    pub level: DashaLevel,
    /// 1-indexed position among siblings.
    pub order: u16,
    /// Index of the enclosing period in the level above; `None` for
    /// mahadashas. A lookup key, not an ownership edge.
    pub parent: Option<u32>,
}

impl DashaPeriod {
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    pub fn duration_years(&self) -> f64 {
        self.duration_days() / DAYS_PER_YEAR
    }

    /// Start-inclusive, end-exclusive containment.
    pub fn contains_jd(&self, jd: f64) -> bool {
        self.start_jd <= jd && jd < self.end_jd
    }

    pub fn start_instant(&self) -> Result<Instant, TimeError> {
        Instant::from_jd_utc(self.start_jd)
    }

    pub fn end_instant(&self) -> Result<Instant, TimeError> {
        Instant::from_jd_utc(self.end_jd)
    }
}
