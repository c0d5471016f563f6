use crate::aspects::types::{AspectDefinition, AspectKind, AspectMatch, SynastryReport};
use crate::chart::{Chart, ChartPoint};
use crate::ephemeris::Body;
use crate::western::angular_separation;

/// Scoring policy v1: orbs and weights per aspect.
///
/// Row order is the tie-break order when two aspects score the same.
pub const ASPECT_TABLE: &[AspectDefinition] = &[
    AspectDefinition { kind: AspectKind::Conjunction, angle: 0.0, orb: 8.0, weight: 1.0 },
    AspectDefinition { kind: AspectKind::Opposition, angle: 180.0, orb: 8.0, weight: 0.9 },
    AspectDefinition { kind: AspectKind::Trine, angle: 120.0, orb: 7.0, weight: 0.9 },
    AspectDefinition { kind: AspectKind::Square, angle: 90.0, orb: 6.0, weight: 0.7 },
    AspectDefinition { kind: AspectKind::Sextile, angle: 60.0, orb: 5.0, weight: 0.6 },
];

/// Point pairs compared across charts (A's point first).
pub const FOCUS_PAIRS: &[(ChartPoint, ChartPoint)] = &[
    (ChartPoint::Body(Body::Sun), ChartPoint::Body(Body::Moon)),
    (ChartPoint::Body(Body::Moon), ChartPoint::Body(Body::Sun)),
    (ChartPoint::Body(Body::Venus), ChartPoint::Body(Body::Mars)),
    (ChartPoint::Body(Body::Mars), ChartPoint::Body(Body::Venus)),
    (ChartPoint::Body(Body::Moon), ChartPoint::Body(Body::Venus)),
    (ChartPoint::Body(Body::Venus), ChartPoint::Body(Body::Moon)),
    (ChartPoint::Body(Body::Sun), ChartPoint::Ascendant),
    (ChartPoint::Body(Body::Moon), ChartPoint::Ascendant),
];

pub const DEFAULT_HIGHLIGHT_LIMIT: usize = 12;

/// Cross-chart aspect scorer.
#[derive(Debug, Clone)]
pub struct SynastryMatcher {
    pairs: Vec<(ChartPoint, ChartPoint)>,
    highlight_limit: usize,
}

impl SynastryMatcher {
    pub fn new() -> Self {
        Self {
            pairs: FOCUS_PAIRS.to_vec(),
            highlight_limit: DEFAULT_HIGHLIGHT_LIMIT,
        }
    }

    pub fn with_pairs(mut self, pairs: Vec<(ChartPoint, ChartPoint)>) -> Self {
        self.pairs = pairs;
        self
    }

    pub fn with_highlight_limit(mut self, limit: usize) -> Self {
        self.highlight_limit = limit;
        self
    }

    pub fn score(&self, chart_a: &Chart, chart_b: &Chart) -> SynastryReport {
        let mut evaluated = 0usize;
        let mut total = 0.0;
        let mut matches = Vec::new();

        for &(point_a, point_b) in &self.pairs {
            let (Some(lon_a), Some(lon_b)) = (chart_a.longitude(point_a), chart_b.longitude(point_b)) else {
                continue;
            };
            evaluated += 1;

            let separation = angular_separation(lon_a, lon_b);
            if let Some((definition, strength)) = best_aspect(separation) {
                total += strength;
                matches.push(AspectMatch {
                    point_a,
                    point_b,
                    aspect: definition.kind,
                    exact_angle: definition.angle,
                    orb: (separation - definition.angle).abs(),
                    strength,
                });
            }
        }

        // Stable sort keeps pair order among equal strengths
        matches.sort_by(|a, b| b.strength.total_cmp(&a.strength));
        matches.truncate(self.highlight_limit);

        let score = if evaluated == 0 {
            0
        } else {
            (100.0 * total / evaluated as f64).round().clamp(0.0, 100.0) as u8
        };

        SynastryReport {
            score,
            evaluated_pairs: evaluated,
            highlights: matches,
        }
    }
}

impl Default for SynastryMatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Strongest aspect for a separation. Earlier table rows win ties.
pub fn best_aspect(separation: f64) -> Option<(&'static AspectDefinition, f64)> {
    let mut best: Option<(&'static AspectDefinition, f64)> = None;
    for definition in ASPECT_TABLE {
        if let Some(strength) = definition.strength(separation) {
            if best.map_or(true, |(_, s)| strength > s) {
                best = Some((definition, strength));
            }
        }
    }
    best
}

/// Score two charts with the default focus pairs and highlight cap.
pub fn score_synastry(chart_a: &Chart, chart_b: &Chart) -> SynastryReport {
    SynastryMatcher::new().score(chart_a, chart_b)
}
