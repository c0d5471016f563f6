//! Angle arithmetic on the ecliptic circle and zodiac sign classification.
//!
//! Every longitude that leaves this module is canonical: `0 <= lon < 360`.

use serde::{Deserialize, Serialize};
use std::fmt;

pub const FULL_CIRCLE: f64 = 360.0;
pub const SIGN_WIDTH: f64 = 30.0;

/// The twelve tropical signs, Aries starting at 0°.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// Sign for a 0-based index; indices wrap modulo 12.
    pub fn from_index(index: usize) -> Sign {
        Self::ALL[index % 12]
    }

    pub fn index(self) -> usize {
        self as usize
    }

    /// Longitude where this sign begins.
    pub fn start(self) -> f64 {
        self.index() as f64 * SIGN_WIDTH
    }

    pub fn name(self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Fold any real angle into `[0, 360)`.
///
/// `rem_euclid` can return exactly 360.0 for tiny negative inputs
/// (e.g. `-1e-15`), so that case is folded back to 0.
pub fn normalize(angle: f64) -> f64 {
    let v = angle.rem_euclid(FULL_CIRCLE);
    if v >= FULL_CIRCLE {
        0.0
    } else {
        v
    }
}

/// Shorter arc between two angles, in `[0, 180]`.
pub fn angular_separation(a: f64, b: f64) -> f64 {
    let d = (normalize(a) - normalize(b)).abs();
    if d > 180.0 {
        FULL_CIRCLE - d
    } else {
        d
    }
}

/// Sign and degree within that sign for a longitude.
pub fn classify(longitude: f64) -> (Sign, f64) {
    let lon = normalize(longitude);
    let index = (lon / SIGN_WIDTH).floor() as usize;
    (Sign::from_index(index), lon % SIGN_WIDTH)
}

/// Longitude projected into harmonic space: `normalize(lon * h)`.
pub fn harmonic_longitude(longitude: f64, harmonic: u32) -> f64 {
    normalize(longitude * harmonic as f64)
}
