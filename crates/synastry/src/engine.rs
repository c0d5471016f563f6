//! Request-level entry points: build one chart, or build two and compare.

use crate::aspects::{SynastryMatcher, SynastryReport};
use crate::chart::{Chart, ChartBuilder, ChartError, ChartRequest};
use crate::config::EngineConfig;
use crate::ephemeris::{Ephemeris, Geocoder, TimezoneResolver};
use crate::harmonics::{score_harmonic, HarmonicReport};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Birth data for both people in a comparison, plus optional harmonic
/// overrides.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonRequest {
    #[serde(default)]
    pub person_a: Option<ChartRequest>,
    #[serde(default)]
    pub person_b: Option<ChartRequest>,
    #[serde(default)]
    pub harmonics: Option<Vec<u32>>,
    #[serde(default)]
    pub orb: Option<f64>,
}

/// Two charts that were built earlier and are being scored again.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartPair {
    #[serde(default)]
    pub chart_a: Option<Chart>,
    #[serde(default)]
    pub chart_b: Option<Chart>,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ComparisonError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Chart {side} failed at {}: {source}", .source.stage())]
    Chart {
        side: &'static str,
        #[source]
        source: ChartError,
    },
}

impl ComparisonError {
    pub fn stage(&self) -> &'static str {
        match self {
            ComparisonError::InvalidInput(_) => "input",
            ComparisonError::Chart { source, .. } => source.stage(),
        }
    }
}

/// Owns the read-only configuration and the collaborators.
pub struct AstroEngine<E, G, T> {
    config: EngineConfig,
    ephemeris: E,
    geocoder: G,
    timezones: T,
}

impl<E, G, T> AstroEngine<E, G, T>
where
    E: Ephemeris,
    G: Geocoder,
    T: TimezoneResolver,
{
    pub fn new(config: EngineConfig, ephemeris: E, geocoder: G, timezones: T) -> Self {
        Self {
            config,
            ephemeris,
            geocoder,
            timezones,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn builder(&self) -> ChartBuilder<'_> {
        ChartBuilder::new(&self.ephemeris, &self.geocoder, &self.timezones, &self.config.chart)
    }

    pub async fn build_chart(&self, request: &ChartRequest) -> Result<Chart, ChartError> {
        self.builder().build(request).await
    }

    /// Build both charts concurrently. Either side may fail on its own;
    /// person A's failure is reported first.
    pub async fn build_pair(&self, request: &ComparisonRequest) -> Result<(Chart, Chart), ComparisonError> {
        let person_a = require(request.person_a.as_ref(), "personA")?;
        let person_b = require(request.person_b.as_ref(), "personB")?;

        let builder = self.builder();
        let (chart_a, chart_b) = tokio::join!(builder.build(person_a), builder.build(person_b));
        let chart_a = chart_a.map_err(|source| ComparisonError::Chart { side: "A", source })?;
        let chart_b = chart_b.map_err(|source| ComparisonError::Chart { side: "B", source })?;
        Ok((chart_a, chart_b))
    }

    pub async fn synastry(&self, request: &ComparisonRequest) -> Result<SynastryReport, ComparisonError> {
        let (chart_a, chart_b) = self.build_pair(request).await?;
        Ok(self.score_synastry(&chart_a, &chart_b))
    }

    pub async fn harmonic(&self, request: &ComparisonRequest) -> Result<HarmonicReport, ComparisonError> {
        let (harmonics, orb) = self.harmonic_params(request)?;
        let (chart_a, chart_b) = self.build_pair(request).await?;
        Ok(score_harmonic(&chart_a, &chart_b, &harmonics, orb))
    }

    pub fn score_synastry(&self, chart_a: &Chart, chart_b: &Chart) -> SynastryReport {
        SynastryMatcher::new()
            .with_highlight_limit(self.config.synastry.highlight_limit)
            .score(chart_a, chart_b)
    }

    pub fn synastry_for_charts(&self, pair: &ChartPair) -> Result<SynastryReport, ComparisonError> {
        let chart_a = require(pair.chart_a.as_ref(), "chartA")?;
        let chart_b = require(pair.chart_b.as_ref(), "chartB")?;
        Ok(self.score_synastry(chart_a, chart_b))
    }

    pub fn harmonic_for_charts(
        &self,
        pair: &ChartPair,
        harmonics: Option<&[u32]>,
        orb: Option<f64>,
    ) -> Result<HarmonicReport, ComparisonError> {
        let chart_a = require(pair.chart_a.as_ref(), "chartA")?;
        let chart_b = require(pair.chart_b.as_ref(), "chartB")?;
        let request = ComparisonRequest {
            harmonics: harmonics.map(<[u32]>::to_vec),
            orb,
            ..Default::default()
        };
        let (harmonics, orb) = self.harmonic_params(&request)?;
        Ok(score_harmonic(chart_a, chart_b, &harmonics, orb))
    }

    fn harmonic_params(&self, request: &ComparisonRequest) -> Result<(Vec<u32>, f64), ComparisonError> {
        let harmonics = request
            .harmonics
            .clone()
            .unwrap_or_else(|| self.config.harmonic.harmonics.clone());
        let orb = request.orb.unwrap_or(self.config.harmonic.orb);

        if harmonics.is_empty() || harmonics.contains(&0) {
            return Err(ComparisonError::InvalidInput(format!(
                "harmonics must be a non-empty list of positive integers, got {:?}",
                harmonics
            )));
        }
        if !(orb.is_finite() && orb >= 0.0) {
            return Err(ComparisonError::InvalidInput(format!(
                "orb must be a non-negative number, got {}",
                orb
            )));
        }
        Ok((harmonics, orb))
    }
}

fn require<'r, R>(value: Option<&'r R>, field: &str) -> Result<&'r R, ComparisonError> {
    value.ok_or_else(|| ComparisonError::InvalidInput(format!("{} is required", field)))
}
