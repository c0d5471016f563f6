//! House placement over a 12-cusp set.
//!
//! Cusp `i` opens house `i + 1`; the arc runs to cusp `(i + 1) % 12`. One of the
//! twelve arcs crosses 0° Aries, so containment is tested with a wrap-aware
//! interval check rather than a plain range.

use crate::western::zodiac::normalize;
use serde::{Deserialize, Serialize};

pub const HOUSE_COUNT: usize = 12;

/// Twelve normalized house cusps in house order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HouseCusps([f64; HOUSE_COUNT]);

impl HouseCusps {
    /// Build from raw provider values; each cusp is normalized.
    pub fn new(raw: [f64; HOUSE_COUNT]) -> Self {
        Self(raw.map(normalize))
    }

    /// Take the first 12 values of a slice, if there are that many.
    pub fn from_slice(raw: &[f64]) -> Option<Self> {
        let cusps: [f64; HOUSE_COUNT] = raw.get(..HOUSE_COUNT)?.try_into().ok()?;
        Some(Self::new(cusps))
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    pub fn as_array(&self) -> &[f64; HOUSE_COUNT] {
        &self.0
    }

    /// Cusp opening `house` (1-based).
    pub fn cusp(&self, house: u8) -> Option<f64> {
        let index = (house as usize).checked_sub(1)?;
        self.0.get(index).copied()
    }

    /// House (1..=12) containing `longitude`.
    ///
    /// Arcs are tried in house order and the first hit wins, which only
    /// matters for degenerate cusp sets. Returns `None` when no arc matches,
    /// which can only happen for a malformed set.
    pub fn house_of(&self, longitude: f64) -> Option<u8> {
        let lon = normalize(longitude);
        (0..HOUSE_COUNT)
            .find(|&i| arc_contains(self.0[i], self.0[(i + 1) % HOUSE_COUNT], lon))
            .map(|i| (i + 1) as u8)
    }
}

/// Half-open arc test `[start, end)` that understands wraparound at 0°.
fn arc_contains(start: f64, end: f64, lon: f64) -> bool {
    if start <= end {
        lon >= start && lon < end
    } else {
        lon >= start || lon < end
    }
}
