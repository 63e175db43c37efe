use crate::entry::{default_entries, Entry};
use crate::error::{Result, VisualizerError};
use crate::format::DEFAULT_DECIMALS;
use crate::transform::{Mode, Normalization};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Closed interval an interactive control is allowed to span.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
    pub step: f64,
}

impl SliderRange {
    pub const TEMPERATURE: Self = Self {
        min: 0.1,
        max: 5.0,
        step: 0.1,
    };
    pub const THRESHOLD: Self = Self {
        min: 0.01,
        max: 0.99,
        step: 0.01,
    };
    pub const LOGIT: Self = Self {
        min: -10.0,
        max: 10.0,
        step: 0.1,
    };

    #[must_use]
    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    #[must_use]
    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Any finite temperature is accepted; zero and negative values included.
pub fn check_temperature(temperature: f64) -> Result<f64> {
    if !temperature.is_finite() {
        return Err(VisualizerError::Config(format!(
            "temperature must be finite, got {temperature}"
        )));
    }
    Ok(temperature)
}

/// Thresholds must lie strictly inside (0, 1).
pub fn check_threshold(threshold: f64) -> Result<f64> {
    if !(threshold > 0.0 && threshold < 1.0) {
        return Err(VisualizerError::Config(format!(
            "threshold must lie in (0, 1), got {threshold}"
        )));
    }
    Ok(threshold)
}

/// Startup state, read from JSON. Every field is optional.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualizerConfig {
    pub temperature: f64,
    pub mode: Mode,
    pub threshold: f64,
    pub normalization: Normalization,
    pub decimals: usize,
    pub entries: Option<Vec<Entry>>,
}

impl Default for VisualizerConfig {
    fn default() -> Self {
        Self {
            temperature: 1.0,
            mode: Mode::Softmax,
            threshold: 0.5,
            normalization: Normalization::Literal,
            decimals: DEFAULT_DECIMALS,
            entries: None,
        }
    }
}

impl VisualizerConfig {
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn from_json(content: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Entries to start with, falling back to the defaults.
    #[must_use]
    pub fn entries_or_default(&self) -> Vec<Entry> {
        self.entries.clone().unwrap_or_else(default_entries)
    }

    fn validate(&self) -> Result<()> {
        check_temperature(self.temperature)?;
        check_threshold(self.threshold)?;
        if self.decimals > 20 {
            return Err(VisualizerError::Config(format!(
                "decimals must be at most 20, got {}",
                self.decimals
            )));
        }
        Ok(())
    }
}
