pub mod builder;
pub mod error;
pub mod types;

pub use builder::{ChartBuilder, ChartRequest};
pub use error::{ChartError, ChartFailure};
pub use types::{
    AngleReading, Angles, Chart, ChartInput, ChartPoint, Houses, PlanetEntry, PointReading,
};
