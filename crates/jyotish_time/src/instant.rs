//! Civil instants with an explicit UTC offset.
//!
//! An [`Instant`] wraps `DateTime<FixedOffset>`, so a value without an
//! offset cannot exist. Ordering and equality compare the underlying UTC
//! moment; the offset is kept for display and serialization.

use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::delta_t::delta_t_seconds;
use crate::error::TimeError;
use crate::julian::{J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD};

/// A point in civil time with its UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Instant(DateTime<FixedOffset>);

impl Instant {
    /// Wrap an offset-aware timestamp.
    pub fn new(civil: DateTime<FixedOffset>) -> Self {
        Self(civil)
    }

    /// Build from a UTC timestamp (offset +00:00).
    pub fn from_utc(utc: DateTime<Utc>) -> Self {
        Self(utc.fixed_offset())
    }

    /// Build from a local calendar date, wall-clock time and UTC offset in seconds.
    pub fn from_civil(
        date: NaiveDate,
        time: NaiveTime,
        offset_seconds: i32,
    ) -> Result<Self, TimeError> {
        let offset =
            FixedOffset::east_opt(offset_seconds).ok_or(TimeError::InvalidOffset(offset_seconds))?;
        let local = NaiveDateTime::new(date, time);
        offset
            .from_local_datetime(&local)
            .single()
            .map(Self)
            .ok_or_else(|| TimeError::Parse {
                input: local.to_string(),
                reason: "ambiguous local time".to_string(),
            })
    }

    /// Parse an RFC 3339 timestamp. Text without an offset is rejected.
    pub fn parse(text: &str) -> Result<Self, TimeError> {
        let trimmed = text.trim();
        match DateTime::parse_from_rfc3339(trimmed) {
            Ok(dt) => Ok(Self(dt)),
            Err(e) => {
                if NaiveDateTime::from_str(trimmed).is_ok() {
                    Err(TimeError::MissingOffset(trimmed.to_string()))
                } else {
                    Err(TimeError::Parse {
                        input: trimmed.to_string(),
                        reason: e.to_string(),
                    })
                }
            }
        }
    }

    /// Build from a Julian Date in UTC, rounded to the millisecond, shown at +00:00.
    pub fn from_jd_utc(jd_utc: f64) -> Result<Self, TimeError> {
        if !jd_utc.is_finite() {
            return Err(TimeError::Unrepresentable(jd_utc));
        }
        let millis = ((jd_utc - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1000.0).round();
        if millis.abs() > i64::MAX as f64 {
            return Err(TimeError::Unrepresentable(jd_utc));
        }
        DateTime::from_timestamp_millis(millis as i64)
            .map(Self::from_utc)
            .ok_or(TimeError::Unrepresentable(jd_utc))
    }

    /// The civil timestamp as given.
    pub fn civil(&self) -> DateTime<FixedOffset> {
        self.0
    }

    /// The same moment in UTC.
    pub fn utc(&self) -> DateTime<Utc> {
        self.0.with_timezone(&Utc)
    }

    /// UTC offset in seconds east of Greenwich.
    pub fn offset_seconds(&self) -> i32 {
        self.0.offset().local_minus_utc()
    }

    /// Same moment expressed at another offset.
    pub fn with_offset(&self, offset: FixedOffset) -> Self {
        Self(self.0.with_timezone(&offset))
    }

    /// Julian Date on the UTC scale.
    pub fn jd_utc(&self) -> f64 {
        let utc = self.utc();
        let seconds = utc.timestamp() as f64 + utc.timestamp_subsec_nanos() as f64 * 1e-9;
        UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY
    }

    /// Julian Date on the TT scale (UTC + delta-T).
    pub fn jd_tt(&self) -> f64 {
        self.jd_utc() + delta_t_seconds(self.decimal_year()) / SECONDS_PER_DAY
    }

    /// Decimal year, e.g. 2024.5 for early July 2024.
    pub fn decimal_year(&self) -> f64 {
        2000.0 + (self.jd_utc() - J2000_JD) / 365.25
    }

    /// Calendar year in UTC.
    pub fn utc_year(&self) -> i32 {
        self.utc().year()
    }

    /// A new instant shifted by a (possibly fractional) number of days.
    pub fn add_days(&self, days: f64) -> Result<Self, TimeError> {
        let millis = (days * SECONDS_PER_DAY * 1000.0).round() as i64;
        let shifted = self
            .0
            .checked_add_signed(chrono::Duration::milliseconds(millis))
            .ok_or(TimeError::Unrepresentable(self.jd_utc() + days))?;
        Ok(Self(shifted))
    }
}

impl Display for Instant {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}

impl FromStr for Instant {
    type Err = TimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<DateTime<Utc>> for Instant {
    fn from(utc: DateTime<Utc>) -> Self {
        Self::from_utc(utc)
    }
}

impl From<DateTime<FixedOffset>> for Instant {
    fn from(civil: DateTime<FixedOffset>) -> Self {
        Self::new(civil)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_with_offset() {
        let t = Instant::parse("1990-05-15T14:30:00+05:30").unwrap();
        assert_eq!(t.offset_seconds(), 5 * 3600 + 1800);
        assert_eq!(t.utc().to_rfc3339(), "1990-05-15T09:00:00+00:00");
    }

    #[test]
    fn parse_rejects_naive() {
        let err = Instant::parse("1990-05-15T14:30:00").unwrap_err();
        assert!(matches!(err, TimeError::MissingOffset(_)), "{err:?}");
    }

    #[test]
    fn parse_rejects_garbage() {
        let err = Instant::parse("yesterday").unwrap_err();
        assert!(matches!(err, TimeError::Parse { .. }));
    }

    #[test]
    fn jd_of_j2000_noon() {
        let t = Instant::parse("2000-01-01T12:00:00Z").unwrap();
        assert!((t.jd_utc() - J2000_JD).abs() < 1e-9);
    }

    #[test]
    fn offset_does_not_change_jd() {
        let a = Instant::parse("2000-01-01T17:30:00+05:30").unwrap();
        let b = Instant::parse("2000-01-01T12:00:00Z").unwrap();
        assert_eq!(a, b);
        assert!((a.jd_utc() - b.jd_utc()).abs() < 1e-12);
    }

    #[test]
    fn jd_round_trip_millisecond() {
        let t = Instant::parse("2024-03-20T03:06:42.123Z").unwrap();
        let back = Instant::from_jd_utc(t.jd_utc()).unwrap();
        let diff = (back.utc() - t.utc()).num_milliseconds().abs();
        assert!(diff <= 1, "diff = {diff} ms");
    }

    #[test]
    fn from_civil_applies_offset() {
        let date = NaiveDate::from_ymd_opt(1985, 11, 2).unwrap();
        let time = NaiveTime::from_hms_opt(6, 45, 0).unwrap();
        let t = Instant::from_civil(date, time, -5 * 3600).unwrap();
        assert_eq!(t.utc().to_rfc3339(), "1985-11-02T11:45:00+00:00");
    }

    #[test]
    fn from_civil_rejects_bad_offset() {
        let date = NaiveDate::from_ymd_opt(1985, 11, 2).unwrap();
        let time = NaiveTime::from_hms_opt(6, 45, 0).unwrap();
        assert!(matches!(
            Instant::from_civil(date, time, 100_000),
            Err(TimeError::InvalidOffset(100_000))
        ));
    }

    #[test]
    fn tt_is_ahead_of_utc() {
        let t = Instant::parse("2020-06-01T00:00:00Z").unwrap();
        let lead_s = (t.jd_tt() - t.jd_utc()) * SECONDS_PER_DAY;
        assert!((lead_s - 70.0).abs() < 5.0, "TT - UTC = {lead_s}");
    }

    #[test]
    fn add_days_fractional() {
        let t = Instant::parse("2024-01-01T00:00:00Z").unwrap();
        let later = t.add_days(1.5).unwrap();
        assert_eq!(later.utc().to_rfc3339(), "2024-01-02T12:00:00+00:00");
    }

    #[test]
    fn serde_keeps_offset() {
        let t = Instant::parse("1990-05-15T14:30:00+05:30").unwrap();
        let json = serde_json::to_string(&t).unwrap();
        assert_eq!(json, "\"1990-05-15T14:30:00+05:30\"");
        let back: Instant = serde_json::from_str(&json).unwrap();
        assert_eq!(back.offset_seconds(), t.offset_seconds());
    }

    #[test]
    fn serde_rejects_naive() {
        let res: Result<Instant, _> = serde_json::from_str("\"1990-05-15T14:30:00\"");
        assert!(res.is_err());
    }
}
