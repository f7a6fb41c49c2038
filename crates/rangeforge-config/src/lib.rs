//! Configuration system for RangeForge.
//!
//! Load algorithm tuning from TOML or YAML to adjust how the in-place
//! algorithms behave without code changes. Every setting has a default, so
//! an empty document is a valid configuration.
//!
//! # Examples
//!
//! Load configuration from a TOML string:
//!
//! ```
//! use rangeforge_config::{AlgorithmConfig, PivotStrategy};
//!
//! let config = AlgorithmConfig::from_toml_str(r#"
//!     [sort]
//!     small_sort_threshold = 8
//!     pivot = "random"
//!     seed = 7
//! "#).unwrap();
//!
//! assert_eq!(config.sort.small_sort_threshold, 8);
//! assert_eq!(config.sort.pivot, PivotStrategy::Random);
//! assert_eq!(config.sort.seed, Some(7));
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use rangeforge_config::AlgorithmConfig;
//!
//! let config = AlgorithmConfig::load("rangeforge.toml").unwrap_or_default();
//! // Proceeds with defaults if file doesn't exist
//! ```

use std::path::Path;

use rangeforge_core::RangeForgeError;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration error
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

impl From<ConfigError> for RangeForgeError {
    fn from(err: ConfigError) -> Self {
        RangeForgeError::InvalidConfig(err.to_string())
    }
}

/// Largest accepted `small_sort_threshold`.
pub const MAX_SMALL_SORT_THRESHOLD: usize = 1024;

/// Main algorithm configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct AlgorithmConfig {
    /// Sort tuning.
    #[serde(default)]
    pub sort: SortConfig,
}

impl AlgorithmConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads and validates configuration from a file.
    ///
    /// Files ending in `.yaml` or `.yml` are parsed as YAML, anything else
    /// as TOML.
    ///
    /// # Errors
    ///
    /// Returns error if the file doesn't exist, fails to parse, or fails
    /// [`validate`](Self::validate).
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let is_yaml = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml"));

        let config = if is_yaml {
            Self::from_yaml_file(path)?
        } else {
            Self::from_toml_file(path)?
        };
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(s)?)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(s)?)
    }

    /// Sets the range length below which sort switches to selection sort.
    pub fn with_small_sort_threshold(mut self, threshold: usize) -> Self {
        self.sort.small_sort_threshold = threshold;
        self
    }

    /// Sets the pivot strategy.
    pub fn with_pivot(mut self, pivot: PivotStrategy) -> Self {
        self.sort.pivot = pivot;
        self
    }

    /// Sets the seed used by [`PivotStrategy::Random`].
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.sort.seed = Some(seed);
        self
    }

    /// Checks that every setting is within its accepted range.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] naming the offending setting.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.sort.validate()
    }
}

/// Sort tuning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SortConfig {
    /// Ranges shorter than this are finished with selection sort.
    #[serde(default = "default_small_sort_threshold")]
    pub small_sort_threshold: usize,

    /// How the partition pivot is chosen.
    #[serde(default)]
    pub pivot: PivotStrategy,

    /// Seed for [`PivotStrategy::Random`]; a fixed seed makes runs
    /// reproducible.
    #[serde(default)]
    pub seed: Option<u64>,
}

fn default_small_sort_threshold() -> usize {
    16
}

impl Default for SortConfig {
    fn default() -> Self {
        Self {
            small_sort_threshold: default_small_sort_threshold(),
            pivot: PivotStrategy::default(),
            seed: None,
        }
    }
}

impl SortConfig {
    /// Checks that every setting is within its accepted range.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.small_sort_threshold == 0 || self.small_sort_threshold > MAX_SMALL_SORT_THRESHOLD
        {
            return Err(ConfigError::Invalid(format!(
                "sort.small_sort_threshold must be between 1 and {}, got {}",
                MAX_SMALL_SORT_THRESHOLD, self.small_sort_threshold
            )));
        }
        if self.seed.is_some() && self.pivot != PivotStrategy::Random {
            return Err(ConfigError::Invalid(
                "sort.seed is only used with the random pivot strategy".to_string(),
            ));
        }
        Ok(())
    }
}

/// Pivot selection for the partitioning step of sort.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PivotStrategy {
    /// First element of the range.
    First,

    /// Element at the middle offset of the range.
    #[default]
    Middle,

    /// Element at a pseudo-random offset.
    Random,
}

#[cfg(test)]
mod tests;
