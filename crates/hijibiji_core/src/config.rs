//! Generator configuration management.
//!
//! Handles loading showcase defaults from TOML files with environment
//! variable override support. Every field has a default, so an empty file
//! (or no file at all) yields the stock demonstration settings.

use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::rng::DemoRng;
use crate::types::GeneratorError;
use crate::validation;

/// Environment variable overriding [`GeneratorConfig::seed`].
pub const ENV_SEED: &str = "HIJIBIJI_SEED";
/// Environment variable overriding [`GeneratorConfig::colormap`].
pub const ENV_COLORMAP: &str = "HIJIBIJI_COLORMAP";
/// Environment variable overriding [`ToneSettings::sample_rate_hz`].
pub const ENV_SAMPLE_RATE: &str = "HIJIBIJI_SAMPLE_RATE";

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration file error: {0}")]
    Io(String),

    #[error("Configuration parse error: {0}")]
    Parse(String),

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error(transparent)]
    Invalid(#[from] GeneratorError),
}

/// Default tone parameters for the audio showcase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneSettings {
    /// Length of each tone in seconds
    pub duration_secs: f64,
    /// Number of tones per sequence
    pub num_tones: i64,
    /// Lowest carrier frequency
    pub min_freq_hz: f64,
    /// Highest carrier frequency
    pub max_freq_hz: f64,
    /// Samples per second
    pub sample_rate_hz: u32,
}

impl Default for ToneSettings {
    fn default() -> Self {
        Self {
            duration_secs: 0.3,
            num_tones: 5,
            min_freq_hz: 200.0,
            max_freq_hz: 2000.0,
            sample_rate_hz: 42_000,
        }
    }
}

/// Showcase configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Seed for the random source; `None` seeds from entropy
    pub seed: Option<u64>,
    /// Colormap passed through to the visualisation sink
    pub colormap: String,
    /// Advisory delay between animation frames
    pub frame_interval_ms: u64,
    /// Size range for the dot-cloud variant
    pub dot_size_range: [f64; 2],
    /// Audio showcase defaults
    pub tone: ToneSettings,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: None,
            colormap: "viridis".to_string(),
            frame_interval_ms: 100,
            dot_size_range: [50.0, 500.0],
            tone: ToneSettings::default(),
        }
    }
}

impl GeneratorConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load from `path` if it exists, otherwise defaults, then apply
    /// environment overrides and validate.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            Self::load(path)?
        } else {
            tracing::debug!(path = %path.display(), "config file not found, using defaults");
            Self::default()
        };
        config.apply_env_overrides()?;
        config.validate()?;
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary key lookup.
    ///
    /// Recognised keys are [`ENV_SEED`], [`ENV_COLORMAP`] and
    /// [`ENV_SAMPLE_RATE`].
    pub fn apply_overrides_from<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(seed) = lookup(ENV_SEED) {
            self.seed = Some(parse_value(ENV_SEED, &seed)?);
        }
        if let Some(colormap) = lookup(ENV_COLORMAP) {
            self.colormap = colormap;
        }
        if let Some(rate) = lookup(ENV_SAMPLE_RATE) {
            self.tone.sample_rate_hz = parse_value(ENV_SAMPLE_RATE, &rate)?;
        }
        Ok(())
    }

    /// Validate the configured defaults with the generator checks.
    ///
    /// # Errors
    ///
    /// - `InvalidSampleRate` if the tone sample rate is below 40000 Hz
    /// - `InvalidParameter` for non-positive durations, frequencies or counts
    ///   and for a zero frame interval
    /// - `InvalidRange` for a non-finite dot size range
    pub fn validate(&self) -> Result<(), ConfigError> {
        validation::sample_rate(self.tone.sample_rate_hz)?;
        validation::positive("duration", self.tone.duration_secs)?;
        validation::count("num_tones", self.tone.num_tones)?;
        let min = validation::positive("min_freq", self.tone.min_freq_hz)?;
        let max = validation::positive("max_freq", self.tone.max_freq_hz)?;
        if min > max {
            return Err(GeneratorError::invalid_parameter(
                "min_freq",
                format!("must not exceed max_freq ({} > {})", min, max),
            )
            .into());
        }
        validation::range("dot_size_range", &self.dot_size_range)?;
        if self.frame_interval_ms == 0 {
            return Err(GeneratorError::invalid_parameter(
                "frame_interval_ms",
                "must be positive",
            )
            .into());
        }
        Ok(())
    }

    /// Build the random source described by this configuration.
    pub fn rng(&self) -> DemoRng {
        match self.seed {
            Some(seed) => DemoRng::from_seed(seed),
            None => DemoRng::from_entropy(),
        }
    }
}

fn parse_value<T: FromStr>(key: &'static str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::InvalidValue {
        key,
        value: value.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults_match_showcase() {
        let config = GeneratorConfig::default();
        assert_eq!(config.seed, None);
        assert_eq!(config.colormap, "viridis");
        assert_eq!(config.frame_interval_ms, 100);
        assert_eq!(config.tone.sample_rate_hz, 42_000);
        assert_eq!(config.tone.num_tones, 5);
        assert_eq!(config.dot_size_range, [50.0, 500.0]);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config = GeneratorConfig::from_toml_str(
            r#"
            seed = 7
            colormap = "gray"

            [tone]
            num_tones = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.seed, Some(7));
        assert_eq!(config.colormap, "gray");
        assert_eq!(config.tone.num_tones, 3);
        assert_eq!(config.tone.duration_secs, 0.3);
        assert_eq!(config.rng().seed(), 7);
    }

    #[test]
    fn test_parse_error() {
        let result = GeneratorConfig::from_toml_str("seed = \"not a number\"");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_SEED, "99"),
            (ENV_COLORMAP, "magma"),
            (ENV_SAMPLE_RATE, "48000"),
        ]
        .into_iter()
        .collect();

        let mut config = GeneratorConfig::default();
        config
            .apply_overrides_from(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.seed, Some(99));
        assert_eq!(config.colormap, "magma");
        assert_eq!(config.tone.sample_rate_hz, 48_000);
    }

    #[test]
    fn test_override_invalid_value() {
        let mut config = GeneratorConfig::default();
        let result = config.apply_overrides_from(|key| {
            (key == ENV_SEED).then(|| "minus one".to_string())
        });
        assert!(matches!(
            result,
            Err(ConfigError::InvalidValue { key: ENV_SEED, .. })
        ));
    }

    #[test]
    fn test_validate_rejects_low_sample_rate() {
        let mut config = GeneratorConfig::default();
        config.tone.sample_rate_hz = 30_000;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid(GeneratorError::InvalidSampleRate { .. }))
        ));
    }

    #[test]
    fn test_validate_rejects_inverted_frequencies() {
        let mut config = GeneratorConfig::default();
        config.tone.min_freq_hz = 3000.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Invalid(GeneratorError::InvalidParameter {
                name: "min_freq",
                ..
            }))
        ));
    }

    #[test]
    fn test_load_missing_file_uses_defaults() {
        let path = Path::new("definitely/not/here/hijibiji.toml");
        let config = GeneratorConfig::load_or_default(path).unwrap();
        assert_eq!(config.frame_interval_ms, 100);
    }
}
