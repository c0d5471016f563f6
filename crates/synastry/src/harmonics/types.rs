use serde::{Deserialize, Serialize};

/// Hit counts for one harmonic multiplier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarmonicBreakdown {
    pub harmonic: u32,
    pub points_checked: usize,
    pub hits_within_orb: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HarmonicReport {
    /// 0.0..=10.0, one decimal
    pub score10: f64,
    pub breakdown: Vec<HarmonicBreakdown>,
    pub notes: Vec<String>,
}

/// Harmonic multipliers and orb used when the caller does not choose.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HarmonicSettings {
    pub harmonics: Vec<u32>,
    pub orb: f64,
}

impl Default for HarmonicSettings {
    fn default() -> Self {
        Self {
            harmonics: vec![7, 11, 17],
            orb: 3.0,
        }
    }
}
