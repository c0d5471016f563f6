//! Harmonic resonance between two charts.
//!
//! Each longitude is multiplied by the harmonic and folded back onto the
//! circle; same-point pairs that land close together in that space count as
//! resonant. The closer the pair, the larger the contribution.

use crate::chart::Chart;
use crate::ephemeris::Body;
use crate::harmonics::types::{HarmonicBreakdown, HarmonicReport, HarmonicSettings};
use crate::western::{angular_separation, harmonic_longitude};

/// Bodies compared Sun-Sun, Moon-Moon, and so on.
pub const RESONANCE_POINTS: [Body; 5] = [Body::Sun, Body::Moon, Body::Venus, Body::Mars, Body::Saturn];

/// Raw total is divided by this to land on the 0..10 scale.
///
/// Fixed regardless of how many harmonics or points are scored.
pub const SCORE_DIVISOR: f64 = 6.0;
pub const MAX_SCORE: f64 = 10.0;

pub const NOTES: &[&str] = &[
    "Scoring rewards close harmonic conjunctions of the same planet in both charts (Sun-Sun, Moon-Moon, etc.).",
    "Each hit contributes (orb - separation + 1), so exact harmonic conjunctions weigh more than marginal ones.",
    "The raw total is divided by a fixed constant and capped at 10; it does not scale with the number of harmonics requested.",
];

/// Score two charts across `harmonics` with the given orb in degrees.
///
/// Points missing from either chart are skipped.
pub fn score_harmonic(chart_a: &Chart, chart_b: &Chart, harmonics: &[u32], orb: f64) -> HarmonicReport {
    let mut raw = 0.0;
    let mut breakdown = Vec::with_capacity(harmonics.len());

    for &harmonic in harmonics {
        let mut entry = HarmonicBreakdown {
            harmonic,
            points_checked: 0,
            hits_within_orb: 0,
        };

        for body in RESONANCE_POINTS {
            let (Some(a), Some(b)) = (chart_a.planet(body), chart_b.planet(body)) else {
                continue;
            };
            entry.points_checked += 1;

            let separation = angular_separation(
                harmonic_longitude(a.longitude, harmonic),
                harmonic_longitude(b.longitude, harmonic),
            );
            if separation <= orb {
                entry.hits_within_orb += 1;
                raw += orb - separation + 1.0;
            }
        }

        breakdown.push(entry);
    }

    HarmonicReport {
        score10: bounded_score(raw),
        breakdown,
        notes: NOTES.iter().map(|n| n.to_string()).collect(),
    }
}

/// Same as [`score_harmonic`] with settings from configuration.
pub fn score_harmonic_with(chart_a: &Chart, chart_b: &Chart, settings: &HarmonicSettings) -> HarmonicReport {
    score_harmonic(chart_a, chart_b, &settings.harmonics, settings.orb)
}

fn bounded_score(raw: f64) -> f64 {
    one_decimal(raw / SCORE_DIVISOR).clamp(0.0, MAX_SCORE)
}

/// Round to one decimal from the exact stored value, so 0.85 (stored as
/// 0.8499...) becomes 0.8. Exact halves such as 1.25 round up.
fn one_decimal(value: f64) -> f64 {
    let exact_half = (value * 4.0).fract() == 0.0 && (value * 10.0).fract() == 0.5;
    if exact_half {
        return (value * 10.0).ceil() / 10.0;
    }
    format!("{:.1}", value).parse().unwrap_or(value)
}
