//! Capabilities the chart builder needs from the outside world.
//!
//! Geocoding and timezone lookup are usually network-bound and therefore
//! async; ephemeris calls are CPU-bound library calls and stay synchronous.

use crate::ephemeris::types::{
    Body, EphemerisError, GeoLocation, GeoPlace, HouseFrame, ProviderError, RawPosition,
};
use async_trait::async_trait;
use chrono::{DateTime, FixedOffset, NaiveDateTime, Offset, TimeZone, Utc};
use std::collections::HashMap;

/// Raw positions and house cusps for a Julian Day (UT).
pub trait Ephemeris: Send + Sync {
    /// Julian Day (UT) for a Gregorian calendar date and fractional UTC hour.
    fn julian_day(&self, year: i32, month: u32, day: u32, hour: f64) -> f64 {
        gregorian_julian_day(year, month, day, hour)
    }

    fn houses(
        &self,
        jd_ut: f64,
        location: &GeoLocation,
        house_system: char,
    ) -> Result<HouseFrame, EphemerisError>;

    fn position(&self, jd_ut: f64, body: Body, flags: i32) -> Result<RawPosition, EphemerisError>;
}

/// Place text to coordinates.
#[async_trait]
pub trait Geocoder: Send + Sync {
    /// `Ok(None)` means the lookup worked but found nothing.
    async fn resolve(&self, place: &str) -> Result<Option<GeoPlace>, ProviderError>;
}

/// Coordinates to zone identifier, and local civil time to UTC in that zone.
#[async_trait]
pub trait TimezoneResolver: Send + Sync {
    async fn zone_for(&self, location: &GeoLocation) -> Result<String, ProviderError>;

    /// `None` when the local time does not exist (or is ambiguous) in `zone`,
    /// or the zone is unknown.
    fn to_utc(&self, local: NaiveDateTime, zone: &str) -> Option<DateTime<Utc>>;
}

/// Meeus' algorithm for the Gregorian calendar.
pub fn gregorian_julian_day(year: i32, month: u32, day: u32, hour: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let y = y as f64;
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m as f64 + 1.0)).floor() + day as f64 + b
        - 1524.5
        + hour / 24.0
}

/// Geocoder over a fixed gazetteer, matched case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct StaticGeocoder {
    places: HashMap<String, GeoPlace>,
}

impl StaticGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_place(mut self, name: &str, location: GeoLocation) -> Self {
        self.insert(name, location);
        self
    }

    pub fn insert(&mut self, name: &str, location: GeoLocation) {
        self.places.insert(
            name.trim().to_lowercase(),
            GeoPlace {
                location,
                label: name.trim().to_string(),
            },
        );
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}

impl<'a> FromIterator<(&'a str, GeoLocation)> for StaticGeocoder {
    fn from_iter<I: IntoIterator<Item = (&'a str, GeoLocation)>>(iter: I) -> Self {
        let mut geocoder = Self::new();
        for (name, location) in iter {
            geocoder.insert(name, location);
        }
        geocoder
    }
}

#[async_trait]
impl Geocoder for StaticGeocoder {
    async fn resolve(&self, place: &str) -> Result<Option<GeoPlace>, ProviderError> {
        Ok(self.places.get(&place.trim().to_lowercase()).cloned())
    }
}

/// Every location maps to one zone with a constant UTC offset.
#[derive(Debug, Clone)]
pub struct FixedZoneResolver {
    zone: String,
    offset: FixedOffset,
}

impl FixedZoneResolver {
    pub fn new(zone: impl Into<String>, offset: FixedOffset) -> Self {
        Self {
            zone: zone.into(),
            offset,
        }
    }

    pub fn utc() -> Self {
        Self::new("UTC", Utc.fix())
    }
}

#[async_trait]
impl TimezoneResolver for FixedZoneResolver {
    async fn zone_for(&self, _location: &GeoLocation) -> Result<String, ProviderError> {
        Ok(self.zone.clone())
    }

    fn to_utc(&self, local: NaiveDateTime, zone: &str) -> Option<DateTime<Utc>> {
        if zone != self.zone {
            return None;
        }
        self.offset
            .from_local_datetime(&local)
            .single()
            .map(|dt| dt.with_timezone(&Utc))
    }
}
