use crate::chart::ChartPoint;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The five classical (Ptolemaic) aspects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AspectKind {
    Conjunction,
    Opposition,
    Trine,
    Square,
    Sextile,
}

impl fmt::Display for AspectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            AspectKind::Conjunction => "Conjunction",
            AspectKind::Opposition => "Opposition",
            AspectKind::Trine => "Trine",
            AspectKind::Square => "Square",
            AspectKind::Sextile => "Sextile",
        };
        f.write_str(name)
    }
}

/// One row of the aspect scoring table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AspectDefinition {
    pub kind: AspectKind,
    /// Exact angle in degrees
    pub angle: f64,
    /// Maximum allowed deviation from `angle`
    pub orb: f64,
    pub weight: f64,
}

impl AspectDefinition {
    /// Strength for a separation, or `None` outside the orb.
    ///
    /// Falls linearly from `weight` at exact to 0 at the orb edge.
    pub fn strength(&self, separation: f64) -> Option<f64> {
        let deviation = (separation - self.angle).abs();
        if deviation > self.orb {
            return None;
        }
        Some((1.0 - deviation / self.orb) * self.weight)
    }
}

/// A cross-chart aspect between point A (first chart) and point B (second chart).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AspectMatch {
    pub point_a: ChartPoint,
    pub point_b: ChartPoint,
    pub aspect: AspectKind,
    pub exact_angle: f64,
    /// Deviation from the exact angle, in degrees
    pub orb: f64,
    /// 0..=1
    pub strength: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynastryReport {
    /// 0..=100
    pub score: u8,
    /// Pairs where both charts had the point; the score denominator
    pub evaluated_pairs: usize,
    /// Strongest matches first
    pub highlights: Vec<AspectMatch>,
}
