//! Engine configuration, read once at startup from TOML.
//!
//! ```toml
//! [chart]
//! house_system = "P"
//! ephemeris_flags = 260
//!
//! [synastry]
//! highlight_limit = 12
//!
//! [harmonic]
//! harmonics = [7, 11, 17]
//! orb = 3.0
//!
//! [places]
//! "London" = { lat = 51.5074, lon = -0.1278 }
//! ```
//!
//! Every section and key is optional.

use crate::aspects::synastry::DEFAULT_HIGHLIGHT_LIMIT;
use crate::ephemeris::{house_system_name, EphemerisSettings, GeoLocation, StaticGeocoder};
use crate::harmonics::HarmonicSettings;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SynastrySettings {
    pub highlight_limit: usize,
}

impl Default for SynastrySettings {
    fn default() -> Self {
        Self {
            highlight_limit: DEFAULT_HIGHLIGHT_LIMIT,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub chart: EphemerisSettings,
    pub synastry: SynastrySettings,
    pub harmonic: HarmonicSettings,
    /// Gazetteer for the static geocoder: name -> coordinates
    pub places: BTreeMap<String, GeoLocation>,
}

impl EngineConfig {
    pub fn from_toml_str(text: &str) -> anyhow::Result<Self> {
        let config: EngineConfig = toml::from_str(text)
            .map_err(|e| anyhow::anyhow!("Failed to parse engine config: {e}"))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Could not read engine config {}: {e}", path.display()))?;
        let config = Self::from_toml_str(&text)?;
        log::info!(
            "Loaded engine config from {} (house system {}, {} places)",
            path.display(),
            config.chart.house_system,
            config.places.len()
        );
        Ok(config)
    }

    pub fn validate(&self) -> anyhow::Result<()> {
        if house_system_name(self.chart.house_system).is_none() {
            anyhow::bail!("Unknown chart.house_system: {:?}", self.chart.house_system);
        }
        if self.harmonic.harmonics.is_empty() {
            anyhow::bail!("harmonic.harmonics must not be empty");
        }
        if self.harmonic.harmonics.contains(&0) {
            anyhow::bail!("harmonic.harmonics must be positive, got {:?}", self.harmonic.harmonics);
        }
        if !(self.harmonic.orb.is_finite() && self.harmonic.orb >= 0.0) {
            anyhow::bail!("harmonic.orb must be a non-negative number, got {}", self.harmonic.orb);
        }
        if self.synastry.highlight_limit == 0 {
            anyhow::bail!("synastry.highlight_limit must be at least 1");
        }
        for (name, loc) in &self.places {
            if !(-90.0..=90.0).contains(&loc.lat) || !(-180.0..=180.0).contains(&loc.lon) {
                anyhow::bail!("places.{name}: coordinates out of range ({}, {})", loc.lat, loc.lon);
            }
        }
        Ok(())
    }

    pub fn geocoder(&self) -> StaticGeocoder {
        self.places
            .iter()
            .map(|(name, loc)| (name.as_str(), *loc))
            .collect()
    }
}
