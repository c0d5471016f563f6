use crate::ephemeris::ProviderError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Stage-level failures that abort a chart build.
///
/// Per-body failures are not represented here; they are recorded inline
/// as `PlanetEntry::Unavailable`.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChartError {
    #[error("Location required: provide a place or latitude/longitude")]
    LocationRequired,
    #[error("Could not resolve location {place:?}: {message}")]
    LocationUnresolved { place: String, message: String },
    #[error("Timezone resolution failed: {0}")]
    TimezoneUnresolved(#[source] ProviderError),
    #[error("Invalid date/time {date} {time} in {zone}: {message}")]
    InvalidDateTime {
        date: String,
        time: String,
        zone: String,
        message: String,
    },
    #[error("House calculation failed: {message}")]
    HouseCalculationFailed { message: String },
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ChartError {
    /// Name of the pipeline stage that failed.
    pub fn stage(&self) -> &'static str {
        match self {
            ChartError::LocationRequired | ChartError::LocationUnresolved { .. } => "location",
            ChartError::TimezoneUnresolved(_) => "timezone",
            ChartError::InvalidDateTime { .. } => "datetime",
            ChartError::HouseCalculationFailed { .. } => "houses",
            ChartError::InvalidInput(_) => "input",
        }
    }

    pub fn to_failure(&self) -> ChartFailure {
        ChartFailure {
            stage: self.stage().to_string(),
            message: self.to_string(),
        }
    }
}

/// Serializable form of a `ChartError` for the transport layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartFailure {
    pub stage: String,
    pub message: String,
}

impl From<&ChartError> for ChartFailure {
    fn from(err: &ChartError) -> Self {
        err.to_failure()
    }
}
