pub mod synastry;
pub mod types;

pub use synastry::{best_aspect, score_synastry, SynastryMatcher, ASPECT_TABLE, FOCUS_PAIRS};
pub use types::{AspectDefinition, AspectKind, AspectMatch, SynastryReport};
