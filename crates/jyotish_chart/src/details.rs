//! Raw birth details and their resolution.
//!
//! Every field is optional on the way in. Resolution either yields a
//! complete `(Instant, GeoCoordinate)` pair or fails with
//! [`ChartError::IncompleteBirthData`] naming every missing field, so the
//! chart builder never starts on partial data.

use chrono::{NaiveDate, NaiveTime};
use jyotish_time::Instant;
use jyotish_vedic_base::GeoCoordinate;
use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Where a birth took place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BirthPlace {
    Coordinates {
        latitude_deg: f64,
        longitude_deg: f64,
    },
    /// A place name that must be geocoded before use.
    Named(String),
}

/// Turns place names into coordinates.
///
/// Lookups happen outside this crate (a gazetteer, a web service); the
/// builder only sees the trait.
pub trait Geocoder: Send + Sync {
    fn locate(&self, place: &str) -> Option<GeoCoordinate>;
}

/// A birth-detail request as supplied by the caller.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BirthDetails {
    #[serde(default)]
    pub date: Option<NaiveDate>,
    #[serde(default)]
    pub time: Option<NaiveTime>,
    /// Offset from UTC in seconds, east positive.
    #[serde(default)]
    pub utc_offset_seconds: Option<i32>,
    #[serde(default)]
    pub place: Option<BirthPlace>,
}

impl BirthDetails {
    pub fn new(date: NaiveDate, time: NaiveTime, utc_offset_seconds: i32, place: BirthPlace) -> Self {
        Self {
            date: Some(date),
            time: Some(time),
            utc_offset_seconds: Some(utc_offset_seconds),
            place: Some(place),
        }
    }

    /// Names of the fields that are absent.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if self.date.is_none() {
            missing.push("date");
        }
        if self.time.is_none() {
            missing.push("time");
        }
        if self.utc_offset_seconds.is_none() {
            missing.push("utc_offset");
        }
        if self.place.is_none() {
            missing.push("location");
        }
        missing
    }

    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }

    /// The birth instant alone.
    pub fn instant(&self) -> Result<Instant, ChartError> {
        match (self.date, self.time, self.utc_offset_seconds) {
            (Some(date), Some(time), Some(offset)) => Ok(Instant::from_civil(date, time, offset)?),
            _ => {
                let missing = self
                    .missing_fields()
                    .into_iter()
                    .filter(|f| *f != "location")
                    .collect();
                Err(ChartError::missing(missing))
            }
        }
    }

    /// Resolve into an instant and a coordinate.
    ///
    /// A named place without a geocoder counts as missing coordinates.
    pub fn resolve(
        &self,
        geocoder: Option<&dyn Geocoder>,
    ) -> Result<(Instant, GeoCoordinate), ChartError> {
        let missing = self.missing_fields();
        if !missing.is_empty() {
            return Err(ChartError::missing(missing));
        }

        let location = match &self.place {
            Some(BirthPlace::Coordinates {
                latitude_deg,
                longitude_deg,
            }) => GeoCoordinate::new(*latitude_deg, *longitude_deg)?,
            Some(BirthPlace::Named(name)) => match geocoder {
                Some(g) => g
                    .locate(name)
                    .ok_or_else(|| ChartError::PlaceNotFound(name.clone()))?,
                None => return Err(ChartError::missing(vec!["coordinates"])),
            },
            None => return Err(ChartError::missing(vec!["location"])),
        };
        Ok((self.instant()?, location))
    }
}
