//! End-to-end chart construction through the public API.

use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{NaiveDate, NaiveTime};
use jyotish_chart::{
    BirthChart, BirthDetails, BirthPlace, ChartBuilder, ChartError, ErrorKind, build,
};
use jyotish_ephemeris::{
    AnalyticEphemeris, BodyPositions, Ephemeris, EphemerisError, ValidityWindow,
};
use jyotish_time::Instant;
use jyotish_vedic_base::{ChartConvention, GeoCoordinate, Graha};

/// Wraps the analytic ephemeris and counts queries.
struct CountingEphemeris {
    inner: AnalyticEphemeris,
    calls: AtomicUsize,
}

impl CountingEphemeris {
    fn new() -> Self {
        Self {
            inner: AnalyticEphemeris::default(),
            calls: AtomicUsize::new(0),
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl Ephemeris for CountingEphemeris {
    fn validity(&self) -> ValidityWindow {
        self.inner.validity()
    }

    fn positions(&self, instant: &Instant) -> Result<BodyPositions, EphemerisError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.positions(instant)
    }
}

fn mumbai() -> GeoCoordinate {
    GeoCoordinate::new(19.076, 72.8777).unwrap()
}

fn birth() -> Instant {
    Instant::parse("1984-07-09T03:25:00+05:30").unwrap()
}

#[test]
fn same_inputs_give_byte_identical_json() {
    let a = serde_json::to_string(&build(&birth(), &mumbai()).unwrap()).unwrap();
    let b = serde_json::to_string(&build(&birth(), &mumbai()).unwrap()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn offset_does_not_change_the_sky() {
    let local = birth();
    let utc = Instant::parse("1984-07-08T21:55:00Z").unwrap();
    let a = build(&local, &mumbai()).unwrap();
    let b = build(&utc, &mumbai()).unwrap();
    assert_eq!(a.planets(), b.planets());
    assert_eq!(a.houses(), b.houses());
}

#[test]
fn stored_chart_round_trips() {
    let chart = build(&birth(), &mumbai()).unwrap();
    let json = serde_json::to_string(&chart).unwrap();
    let back: BirthChart = serde_json::from_str(&json).unwrap();
    assert_eq!(back, chart);
    assert_eq!(serde_json::to_string(&back).unwrap(), json);
}

#[test]
fn tampered_chart_is_rejected() {
    let chart = build(&birth(), &mumbai()).unwrap();
    let mut value = serde_json::to_value(&chart).unwrap();
    value["houses"]["cusps"][3]["start_deg"] = serde_json::json!(1.0);
    assert!(serde_json::from_value::<BirthChart>(value).is_err());

    let mut value = serde_json::to_value(&chart).unwrap();
    value["planets"].as_object_mut().unwrap().remove("Shani");
    assert!(serde_json::from_value::<BirthChart>(value).is_err());
}

#[test]
fn incomplete_data_never_reaches_ephemeris() {
    let eph = CountingEphemeris::new();
    let builder = ChartBuilder::new(&eph, ChartConvention::PINNED);

    let err = builder.build_partial(Some(&birth()), None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::IncompleteBirthData);

    let details = BirthDetails {
        date: NaiveDate::from_ymd_opt(1984, 7, 9),
        time: None,
        utc_offset_seconds: Some(19_800),
        place: Some(BirthPlace::Named("Mumbai".into())),
    };
    let err = builder.build_from_details(&details, None).unwrap_err();
    assert_eq!(
        err,
        ChartError::IncompleteBirthData {
            missing: vec!["time"]
        }
    );
    assert_eq!(eph.calls(), 0);

    builder.build(&birth(), &mumbai()).unwrap();
    assert_eq!(eph.calls(), 1);
}

#[test]
fn details_and_direct_inputs_agree() {
    let details = BirthDetails::new(
        NaiveDate::from_ymd_opt(1984, 7, 9).unwrap(),
        NaiveTime::from_hms_opt(3, 25, 0).unwrap(),
        19_800,
        BirthPlace::Coordinates {
            latitude_deg: 19.076,
            longitude_deg: 72.8777,
        },
    );
    let builder = ChartBuilder::default();
    let from_details = builder.build_from_details(&details, None).unwrap();
    assert_eq!(from_details, builder.build(&birth(), &mumbai()).unwrap());
}

#[test]
fn summary_json_shape() {
    let summary = build(&birth(), &mumbai()).unwrap().summary();
    let value = serde_json::to_value(&summary).unwrap();
    let moon = &value["planets"]["Chandra"];
    for key in ["sign", "house", "nakshatra", "pada", "degree", "retrograde"] {
        assert!(moon.get(key).is_some(), "missing {key}");
    }
    assert_eq!(value["houses"].as_array().unwrap().len(), 12);
    assert_eq!(value["convention"], "v1/lahiri/whole-sign/mean");
    assert!(summary.planets.contains_key(&Graha::Ketu));
}

#[test]
fn window_edges() {
    let window = ValidityWindow::new(1950, 2000).unwrap();
    let builder = ChartBuilder::analytic(window, ChartConvention::PINNED);
    assert!(builder.build(&birth(), &mumbai()).is_ok());
    let late = Instant::parse("2001-01-01T00:00:00Z").unwrap();
    assert_eq!(
        builder.build(&late, &mumbai()).unwrap_err().kind(),
        ErrorKind::OutOfRange
    );
}

#[test]
fn out_of_window_birth_skips_ephemeris_and_ascendant() {
    let eph = CountingEphemeris::new();
    let builder = ChartBuilder::new(&eph, ChartConvention::PINNED);
    let early = Instant::parse("1899-12-31T23:00:00Z").unwrap();
    let arctic = GeoCoordinate::new(80.0, 20.0).unwrap();
    let err = builder.build(&early, &arctic).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
    assert_eq!(eph.calls(), 0);
}
