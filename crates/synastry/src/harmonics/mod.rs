pub mod scorer;
pub mod types;

pub use scorer::{score_harmonic, score_harmonic_with, NOTES, RESONANCE_POINTS, SCORE_DIVISOR};
pub use types::{HarmonicBreakdown, HarmonicReport, HarmonicSettings};
