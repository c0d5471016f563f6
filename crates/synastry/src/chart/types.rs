use crate::ephemeris::Body;
use crate::western::{classify, normalize, HouseCusps, Sign, HOUSE_COUNT};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Sign placement of a point that has no house of its own (angles, cusps).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AngleReading {
    pub longitude: f64,
    pub sign: Sign,
    pub degree_in_sign: f64,
}

impl AngleReading {
    pub fn from_longitude(longitude: f64) -> Self {
        let longitude = normalize(longitude);
        let (sign, degree_in_sign) = classify(longitude);
        Self {
            longitude,
            sign,
            degree_in_sign,
        }
    }
}

/// A successfully computed body position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PointReading {
    pub longitude: f64,
    pub sign: Sign,
    pub degree_in_sign: f64,
    /// Degrees per day; negative while retrograde
    pub speed_longitude: f64,
    pub retrograde: bool,
    /// `None` when the cusp set could not place the point
    pub house: Option<u8>,
}

impl PointReading {
    pub fn new(longitude: f64, speed_longitude: f64, cusps: &HouseCusps) -> Self {
        let angle = AngleReading::from_longitude(longitude);
        Self {
            longitude: angle.longitude,
            sign: angle.sign,
            degree_in_sign: angle.degree_in_sign,
            speed_longitude,
            retrograde: speed_longitude < 0.0,
            house: cusps.house_of(angle.longitude),
        }
    }
}

/// Per-body slot in a chart: a reading, or the reason the provider
/// could not produce one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PlanetEntry {
    Reading(PointReading),
    Unavailable { error: String },
}

impl PlanetEntry {
    pub fn reading(&self) -> Option<&PointReading> {
        match self {
            PlanetEntry::Reading(reading) => Some(reading),
            PlanetEntry::Unavailable { .. } => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            PlanetEntry::Reading(_) => None,
            PlanetEntry::Unavailable { error } => Some(error),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Angles {
    pub ascendant: AngleReading,
    pub midheaven: AngleReading,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Houses {
    /// House system code, e.g. 'P'
    pub system: char,
    pub cusps: [AngleReading; HOUSE_COUNT],
}

impl Houses {
    pub fn new(system: char, cusps: &HouseCusps) -> Self {
        Self {
            system,
            cusps: cusps.as_array().map(AngleReading::from_longitude),
        }
    }
}

/// Echo of the resolved request: where and when the chart was cast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartInput {
    pub date: String,
    pub time: String,
    pub place: String,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
}

/// A fully computed natal chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chart {
    pub input: ChartInput,
    pub utc: DateTime<Utc>,
    pub julian_day: f64,
    pub houses: Houses,
    pub angles: Angles,
    pub planets: BTreeMap<Body, PlanetEntry>,
}

impl Chart {
    pub fn planet(&self, body: Body) -> Option<&PointReading> {
        self.planets.get(&body).and_then(PlanetEntry::reading)
    }

    /// Longitude of a named point, if the chart has one for it.
    pub fn longitude(&self, point: ChartPoint) -> Option<f64> {
        match point {
            ChartPoint::Body(body) => self.planet(body).map(|p| p.longitude),
            ChartPoint::Ascendant => Some(self.angles.ascendant.longitude),
            ChartPoint::Midheaven => Some(self.angles.midheaven.longitude),
        }
    }

    pub fn unavailable_bodies(&self) -> impl Iterator<Item = Body> + '_ {
        self.planets
            .iter()
            .filter(|(_, entry)| entry.reading().is_none())
            .map(|(body, _)| *body)
    }
}

/// Anything in a chart with a longitude that can take part in an aspect.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ChartPoint {
    Body(Body),
    Ascendant,
    Midheaven,
}

impl ChartPoint {
    pub fn name(self) -> &'static str {
        match self {
            ChartPoint::Body(body) => body.name(),
            ChartPoint::Ascendant => "Ascendant",
            ChartPoint::Midheaven => "Midheaven",
        }
    }
}

impl From<Body> for ChartPoint {
    fn from(body: Body) -> Self {
        ChartPoint::Body(body)
    }
}

impl fmt::Display for ChartPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ChartPoint {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Ascendant" => return Ok(ChartPoint::Ascendant),
            "Midheaven" => return Ok(ChartPoint::Midheaven),
            _ => {}
        }
        Body::ALL
            .iter()
            .find(|body| body.name() == s)
            .map(|&body| ChartPoint::Body(body))
            .ok_or_else(|| format!("Unknown chart point: {}", s))
    }
}

impl From<ChartPoint> for String {
    fn from(point: ChartPoint) -> Self {
        point.name().to_string()
    }
}

impl TryFrom<String> for ChartPoint {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}
