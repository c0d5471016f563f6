//! Natal chart normalization, house placement and compatibility scoring.
//!
//! Raw positions come from an [`ephemeris::Ephemeris`] implementation; the
//! crate classifies them into [`chart::Chart`]s and compares two charts by
//! cross-chart aspects ([`aspects`]) and harmonic resonance ([`harmonics`]).

pub mod aspects;
pub mod chart;
pub mod config;
pub mod engine;
pub mod ephemeris;
pub mod harmonics;
pub mod western;

pub use aspects::{score_synastry, AspectMatch, SynastryReport};
pub use chart::{Chart, ChartBuilder, ChartError, ChartRequest};
pub use config::EngineConfig;
pub use engine::{AstroEngine, ChartPair, ComparisonError, ComparisonRequest};
pub use harmonics::{score_harmonic, HarmonicBreakdown, HarmonicReport};

#[cfg(feature = "swiss-ephemeris")]
pub use ephemeris::SwissEphemerisAdapter;
