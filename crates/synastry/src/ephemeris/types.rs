use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

/// A geocoded place: coordinates plus a display label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeoPlace {
    #[serde(flatten)]
    pub location: GeoLocation,
    pub label: String,
}

/// The ten classical bodies, Sun through Pluto.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mercury,
    Venus,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
    Pluto,
}

impl Body {
    pub const ALL: [Body; 10] = [
        Body::Sun,
        Body::Moon,
        Body::Mercury,
        Body::Venus,
        Body::Mars,
        Body::Jupiter,
        Body::Saturn,
        Body::Uranus,
        Body::Neptune,
        Body::Pluto,
    ];

    /// Swiss Ephemeris planet number (SE_SUN = 0 .. SE_PLUTO = 9)
    pub fn swiss_id(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mercury => "Mercury",
            Body::Venus => "Venus",
            Body::Mars => "Mars",
            Body::Jupiter => "Jupiter",
            Body::Saturn => "Saturn",
            Body::Uranus => "Uranus",
            Body::Neptune => "Neptune",
            Body::Pluto => "Pluto",
        }
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw body output as returned by the provider:
/// `[longitude, latitude, distance, speed_longitude, ...]`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RawPosition {
    pub out: Vec<f64>,
}

impl RawPosition {
    pub fn new(out: Vec<f64>) -> Self {
        Self { out }
    }

    /// Longitude and longitude speed, if the result carries at least
    /// the four leading values.
    pub fn longitude_and_speed(&self) -> Option<(f64, f64)> {
        if self.out.len() < 4 {
            return None;
        }
        Some((self.out[0], self.out[3]))
    }
}

/// Raw house output: cusps for houses 1..12 in order, then the angle
/// points (ascendant first, midheaven second).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct HouseFrame {
    pub cusps: Vec<f64>,
    pub points: Vec<f64>,
}

/// House system mapping
pub const HOUSE_SYSTEMS: &[(&str, char)] = &[
    ("placidus", 'P'),
    ("whole_sign", 'W'),
    ("koch", 'K'),
    ("equal", 'E'),
    ("regiomontanus", 'R'),
    ("campanus", 'C'),
    ("alcabitius", 'A'),
    ("morinus", 'M'),
];

/// Name of a house system code, or `None` if the code is not supported.
pub fn house_system_name(code: char) -> Option<&'static str> {
    let code = code.to_ascii_uppercase();
    HOUSE_SYSTEMS
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(name, _)| *name)
}

// Swiss Ephemeris calculation flags
pub const FLG_SWIEPH: i32 = 2;
pub const FLG_MOSEPH: i32 = 4;
pub const FLG_SPEED: i32 = 256;

/// Moshier ephemeris with speeds: needs no data files on disk.
pub const DEFAULT_FLAGS: i32 = FLG_SPEED | FLG_MOSEPH;

pub const DEFAULT_HOUSE_SYSTEM: char = 'P';

/// Settings for ephemeris calculations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EphemerisSettings {
    /// House system code ("P" = Placidus)
    pub house_system: char,
    /// Flags passed to every body calculation
    pub ephemeris_flags: i32,
}

impl Default for EphemerisSettings {
    fn default() -> Self {
        Self {
            house_system: DEFAULT_HOUSE_SYSTEM,
            ephemeris_flags: DEFAULT_FLAGS,
        }
    }
}

/// Errors that can occur during ephemeris calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EphemerisError {
    #[error("Ephemeris file not found at path: {path}. {message}")]
    FileNotFound { path: String, message: String },
    #[error("Invalid house system: {system}. Valid systems: {valid:?}")]
    InvalidHouseSystem { system: char, valid: Vec<String> },
    #[error("Failed to calculate position for {body} at JD {jd_ut}: {message}")]
    CalculationFailed {
        body: Body,
        jd_ut: f64,
        message: String,
    },
    #[error("House calculation failed: {message}")]
    HouseCalculationFailed { message: String },
}

/// Failure reported by a geocoding or timezone collaborator
#[derive(Error, Debug, Clone, PartialEq)]
#[error("{service} lookup failed: {message}")]
pub struct ProviderError {
    pub service: &'static str,
    pub message: String,
}

impl ProviderError {
    pub fn new(service: &'static str, message: impl Into<String>) -> Self {
        Self {
            service,
            message: message.into(),
        }
    }
}
