//! Natal chart construction.
//!
//! Pipeline: location -> timezone -> UTC instant -> Julian Day -> houses ->
//! bodies. Any stage before the bodies aborts the build; a single body that
//! fails is recorded inline and the chart is still returned.

use crate::chart::error::ChartError;
use crate::chart::types::{AngleReading, Angles, Chart, ChartInput, Houses, PlanetEntry, PointReading};
use crate::ephemeris::{
    house_system_name, Body, Ephemeris, EphemerisSettings, GeoLocation, GeoPlace, Geocoder,
    TimezoneResolver,
};
use crate::western::HouseCusps;
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, Timelike, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const COORDS_LABEL: &str = "coords";
const NO_DATA: &str = "no_data";

/// Birth data for one chart.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartRequest {
    /// Local civil date, `YYYY-MM-DD`
    pub date: String,
    /// Local civil time, `HH:mm` (24h), seconds optional
    pub time: String,
    #[serde(default)]
    pub place: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub house_system: Option<char>,
}

impl ChartRequest {
    pub fn at_coordinates(date: &str, time: &str, latitude: f64, longitude: f64) -> Self {
        Self {
            date: date.to_string(),
            time: time.to_string(),
            latitude: Some(latitude),
            longitude: Some(longitude),
            ..Default::default()
        }
    }

    pub fn at_place(date: &str, time: &str, place: &str) -> Self {
        Self {
            date: date.to_string(),
            time: time.to_string(),
            place: Some(place.to_string()),
            ..Default::default()
        }
    }

    pub fn with_house_system(mut self, code: char) -> Self {
        self.house_system = Some(code);
        self
    }
}

/// Builds charts against a set of collaborators and fixed settings.
///
/// Holds only shared references, so one builder can serve concurrent
/// requests.
pub struct ChartBuilder<'a> {
    ephemeris: &'a dyn Ephemeris,
    geocoder: &'a dyn Geocoder,
    timezones: &'a dyn TimezoneResolver,
    settings: &'a EphemerisSettings,
}

impl<'a> ChartBuilder<'a> {
    pub fn new(
        ephemeris: &'a dyn Ephemeris,
        geocoder: &'a dyn Geocoder,
        timezones: &'a dyn TimezoneResolver,
        settings: &'a EphemerisSettings,
    ) -> Self {
        Self {
            ephemeris,
            geocoder,
            timezones,
            settings,
        }
    }

    pub async fn build(&self, request: &ChartRequest) -> Result<Chart, ChartError> {
        let house_system = self.house_system(request)?;
        let place = self.resolve_location(request).await?;
        log::debug!(
            "Casting chart for {} ({}, {})",
            place.label,
            place.location.lat,
            place.location.lon
        );

        let zone = self
            .timezones
            .zone_for(&place.location)
            .await
            .map_err(ChartError::TimezoneUnresolved)?;
        let utc = self.resolve_instant(request, &zone)?;

        let input = ChartInput {
            date: request.date.clone(),
            time: request.time.clone(),
            place: place.label,
            latitude: place.location.lat,
            longitude: place.location.lon,
            timezone: zone,
        };
        self.cast(input, utc, place.location, house_system)
    }

    /// Houses, angles and bodies for an already-resolved instant and place.
    pub fn cast(
        &self,
        input: ChartInput,
        utc: DateTime<Utc>,
        location: GeoLocation,
        house_system: char,
    ) -> Result<Chart, ChartError> {
        let jd_ut = self
            .ephemeris
            .julian_day(utc.year(), utc.month(), utc.day(), fractional_hour(&utc));

        let frame = self
            .ephemeris
            .houses(jd_ut, &location, house_system)
            .map_err(|e| ChartError::HouseCalculationFailed {
                message: e.to_string(),
            })?;
        let cusps = HouseCusps::from_slice(&frame.cusps)
            .filter(|_| frame.cusps.iter().all(|c| c.is_finite()))
            .ok_or_else(|| ChartError::HouseCalculationFailed {
                message: format!("invalid_houses_result: expected 12 cusps, got {:?}", frame.cusps),
            })?;
        let (ascendant, midheaven) = match frame.points.as_slice() {
            [asc, mc, ..] if asc.is_finite() && mc.is_finite() => (*asc, *mc),
            other => {
                return Err(ChartError::HouseCalculationFailed {
                    message: format!("invalid_houses_result: expected ascendant and midheaven, got {:?}", other),
                })
            }
        };

        let planets: BTreeMap<Body, PlanetEntry> = Body::ALL
            .iter()
            .map(|&body| (body, self.read_body(jd_ut, body, &cusps)))
            .collect();

        Ok(Chart {
            input,
            utc,
            julian_day: jd_ut,
            houses: Houses::new(house_system, &cusps),
            angles: Angles {
                ascendant: AngleReading::from_longitude(ascendant),
                midheaven: AngleReading::from_longitude(midheaven),
            },
            planets,
        })
    }

    fn read_body(&self, jd_ut: f64, body: Body, cusps: &HouseCusps) -> PlanetEntry {
        let raw = match self.ephemeris.position(jd_ut, body, self.settings.ephemeris_flags) {
            Ok(raw) => raw,
            Err(e) => {
                log::warn!("{} unavailable: {}", body, e);
                return PlanetEntry::Unavailable {
                    error: e.to_string(),
                };
            }
        };

        let Some((lon, speed)) = raw
            .longitude_and_speed()
            .filter(|(lon, speed)| lon.is_finite() && speed.is_finite())
        else {
            log::warn!("{} unavailable: malformed provider result {:?}", body, raw.out);
            return PlanetEntry::Unavailable {
                error: NO_DATA.to_string(),
            };
        };

        let reading = PointReading::new(lon, speed, cusps);
        if reading.house.is_none() {
            log::warn!(
                "{} at {:.4} fell outside every house arc {:?}",
                body,
                reading.longitude,
                cusps.as_slice()
            );
        }
        PlanetEntry::Reading(reading)
    }

    fn house_system(&self, request: &ChartRequest) -> Result<char, ChartError> {
        let code = request
            .house_system
            .unwrap_or(self.settings.house_system)
            .to_ascii_uppercase();
        house_system_name(code)
            .map(|_| code)
            .ok_or_else(|| ChartError::InvalidInput(format!("Unknown house system: {}", code)))
    }

    async fn resolve_location(&self, request: &ChartRequest) -> Result<GeoPlace, ChartError> {
        if let (Some(lat), Some(lon)) = (request.latitude, request.longitude) {
            if !(-90.0..=90.0).contains(&lat) || !(-180.0..=180.0).contains(&lon) {
                return Err(ChartError::InvalidInput(format!(
                    "Coordinates out of range: ({}, {})",
                    lat, lon
                )));
            }
            return Ok(GeoPlace {
                location: GeoLocation { lat, lon },
                label: COORDS_LABEL.to_string(),
            });
        }

        let place = match request.place.as_deref().map(str::trim) {
            Some(place) if !place.is_empty() => place,
            _ => return Err(ChartError::LocationRequired),
        };

        match self.geocoder.resolve(place).await {
            Ok(Some(found)) => Ok(found),
            Ok(None) => Err(ChartError::LocationUnresolved {
                place: place.to_string(),
                message: "geocode_failed".to_string(),
            }),
            Err(e) => Err(ChartError::LocationUnresolved {
                place: place.to_string(),
                message: e.to_string(),
            }),
        }
    }

    fn resolve_instant(&self, request: &ChartRequest, zone: &str) -> Result<DateTime<Utc>, ChartError> {
        let invalid = |message: String| ChartError::InvalidDateTime {
            date: request.date.clone(),
            time: request.time.clone(),
            zone: zone.to_string(),
            message,
        };

        let local = parse_local(&request.date, &request.time).map_err(invalid)?;
        self.timezones
            .to_utc(local, zone)
            .ok_or_else(|| invalid("no such local time in zone".to_string()))
    }
}

/// Parse `YYYY-MM-DD` and `HH:mm[:ss]` into a naive local time.
pub fn parse_local(date: &str, time: &str) -> Result<NaiveDateTime, String> {
    let date = NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map_err(|e| format!("bad date: {}", e))?;
    let time = time.trim();
    let time = NaiveTime::parse_from_str(time, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time, "%H:%M:%S"))
        .map_err(|e| format!("bad time: {}", e))?;
    Ok(date.and_time(time))
}

fn fractional_hour(utc: &DateTime<Utc>) -> f64 {
    utc.hour() as f64 + utc.minute() as f64 / 60.0 + utc.second() as f64 / 3600.0
}
