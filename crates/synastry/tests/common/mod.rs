#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, NaiveDateTime, TimeZone, Timelike, Utc};
use std::collections::{BTreeMap, HashMap};
use std::sync::Mutex;
use synastry::chart::{AngleReading, Angles, Chart, ChartInput, ChartPoint, Houses, PlanetEntry, PointReading};
use synastry::config::EngineConfig;
use synastry::ephemeris::{
    Body, Ephemeris, EphemerisError, FixedZoneResolver, GeoLocation, HouseFrame, ProviderError,
    RawPosition, StaticGeocoder, TimezoneResolver,
};
use synastry::western::HouseCusps;
use synastry::AstroEngine;

/// Equal houses from 100°; house 10 wraps through 0°.
pub const DEFAULT_CUSPS: [f64; 12] = [
    100.0, 130.0, 160.0, 190.0, 220.0, 250.0, 280.0, 310.0, 340.0, 10.0, 40.0, 70.0,
];
pub const DEFAULT_ASC: f64 = 100.0;
pub const DEFAULT_MC: f64 = 10.0;

/// Deterministic ephemeris returning canned values.
pub struct FakeEphemeris {
    cusps: Vec<f64>,
    points: Vec<f64>,
    house_error: Option<String>,
    bodies: HashMap<Body, Result<RawPosition, String>>,
    pub seen_flags: Mutex<Vec<i32>>,
    pub seen_jd: Mutex<Vec<f64>>,
    pub seen_house_system: Mutex<Option<char>>,
}

impl FakeEphemeris {
    pub fn new() -> Self {
        let bodies = Body::ALL
            .iter()
            .enumerate()
            .map(|(i, &body)| (body, Ok(raw(15.0 + 33.0 * i as f64, 1.0))))
            .collect();
        Self {
            cusps: DEFAULT_CUSPS.to_vec(),
            points: vec![DEFAULT_ASC, DEFAULT_MC, 0.0, 0.0],
            house_error: None,
            bodies,
            seen_flags: Mutex::new(Vec::new()),
            seen_jd: Mutex::new(Vec::new()),
            seen_house_system: Mutex::new(None),
        }
    }

    /// Every body and the ascendant at the same longitude.
    pub fn all_at(lon: f64) -> Self {
        let mut eph = Self::new();
        for body in Body::ALL {
            eph = eph.with_body(body, lon, 1.0);
        }
        eph.with_points(vec![lon, normalize_test(lon + 270.0)])
    }

    pub fn with_body(mut self, body: Body, lon: f64, speed: f64) -> Self {
        self.bodies.insert(body, Ok(raw(lon, speed)));
        self
    }

    pub fn with_raw_body(mut self, body: Body, out: Vec<f64>) -> Self {
        self.bodies.insert(body, Ok(RawPosition::new(out)));
        self
    }

    pub fn failing_body(mut self, body: Body, message: &str) -> Self {
        self.bodies.insert(body, Err(message.to_string()));
        self
    }

    pub fn with_cusps(mut self, cusps: Vec<f64>) -> Self {
        self.cusps = cusps;
        self
    }

    pub fn with_points(mut self, points: Vec<f64>) -> Self {
        self.points = points;
        self
    }

    pub fn failing_houses(mut self, message: &str) -> Self {
        self.house_error = Some(message.to_string());
        self
    }
}

impl Ephemeris for FakeEphemeris {
    fn houses(&self, jd_ut: f64, _location: &GeoLocation, house_system: char) -> Result<HouseFrame, EphemerisError> {
        self.seen_jd.lock().unwrap().push(jd_ut);
        *self.seen_house_system.lock().unwrap() = Some(house_system);
        if let Some(message) = &self.house_error {
            return Err(EphemerisError::HouseCalculationFailed {
                message: message.clone(),
            });
        }
        Ok(HouseFrame {
            cusps: self.cusps.clone(),
            points: self.points.clone(),
        })
    }

    fn position(&self, jd_ut: f64, body: Body, flags: i32) -> Result<RawPosition, EphemerisError> {
        self.seen_flags.lock().unwrap().push(flags);
        match self.bodies.get(&body) {
            Some(Ok(raw)) => Ok(raw.clone()),
            Some(Err(message)) => Err(EphemerisError::CalculationFailed {
                body,
                jd_ut,
                message: message.clone(),
            }),
            None => Ok(RawPosition::default()),
        }
    }
}

fn raw(lon: f64, speed: f64) -> RawPosition {
    RawPosition::new(vec![lon, 0.0, 1.0, speed, 0.0, 0.0])
}

fn normalize_test(lon: f64) -> f64 {
    lon.rem_euclid(360.0)
}

/// Geocoder whose backend is down.
pub struct DownGeocoder;

#[async_trait]
impl synastry::ephemeris::Geocoder for DownGeocoder {
    async fn resolve(&self, _place: &str) -> Result<Option<synastry::ephemeris::GeoPlace>, ProviderError> {
        Err(ProviderError::new("geocoding", "connection refused"))
    }
}

/// Timezone service whose backend is down.
pub struct DownTimezones;

#[async_trait]
impl TimezoneResolver for DownTimezones {
    async fn zone_for(&self, _location: &GeoLocation) -> Result<String, ProviderError> {
        Err(ProviderError::new("timezone", "timed out"))
    }

    fn to_utc(&self, _local: NaiveDateTime, _zone: &str) -> Option<DateTime<Utc>> {
        None
    }
}

/// UTC+1 zone that skips 02:00-02:59 local, like a spring-forward night.
pub struct GapZone;

#[async_trait]
impl TimezoneResolver for GapZone {
    async fn zone_for(&self, _location: &GeoLocation) -> Result<String, ProviderError> {
        Ok("Test/Gap".to_string())
    }

    fn to_utc(&self, local: NaiveDateTime, zone: &str) -> Option<DateTime<Utc>> {
        if zone != "Test/Gap" || local.hour() == 2 {
            return None;
        }
        Utc.from_local_datetime(&(local - chrono::Duration::hours(1))).single()
    }
}

pub type TestEngine = AstroEngine<FakeEphemeris, StaticGeocoder, FixedZoneResolver>;

pub fn gazetteer() -> StaticGeocoder {
    StaticGeocoder::new()
        .with_place("Null Island", GeoLocation { lat: 0.0, lon: 0.0 })
        .with_place("Greenwich", GeoLocation { lat: 51.48, lon: 0.0 })
}

pub fn engine(ephemeris: FakeEphemeris) -> TestEngine {
    AstroEngine::new(EngineConfig::default(), ephemeris, gazetteer(), FixedZoneResolver::utc())
}

/// A chart assembled directly from longitudes, bypassing the builder.
///
/// Bodies not listed are marked unavailable. The ascendant defaults to 200°.
pub fn chart_with(points: &[(ChartPoint, f64)]) -> Chart {
    let cusps = HouseCusps::new(DEFAULT_CUSPS);
    let mut planets: BTreeMap<Body, PlanetEntry> = Body::ALL
        .iter()
        .map(|&b| (b, PlanetEntry::Unavailable { error: "no_data".to_string() }))
        .collect();
    let mut ascendant = 200.0;
    for &(point, lon) in points {
        match point {
            ChartPoint::Body(body) => {
                planets.insert(body, PlanetEntry::Reading(PointReading::new(lon, 1.0, &cusps)));
            }
            ChartPoint::Ascendant => ascendant = lon,
            ChartPoint::Midheaven => {}
        }
    }

    Chart {
        input: ChartInput {
            date: "2000-01-01".to_string(),
            time: "12:00".to_string(),
            place: "coords".to_string(),
            latitude: 0.0,
            longitude: 0.0,
            timezone: "UTC".to_string(),
        },
        utc: Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap(),
        julian_day: 2451545.0,
        houses: Houses::new('P', &cusps),
        angles: Angles {
            ascendant: AngleReading::from_longitude(ascendant),
            midheaven: AngleReading::from_longitude(ascendant + 270.0),
        },
        planets,
    }
}

pub fn body(b: Body) -> ChartPoint {
    ChartPoint::Body(b)
}
