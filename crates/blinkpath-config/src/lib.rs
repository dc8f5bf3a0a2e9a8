//! Configuration system for blinkpath.
//!
//! Load solver configuration from TOML or YAML to control the time horizon
//! and post-solve checks without code changes.
//!
//! # Examples
//!
//! Load configuration from TOML string:
//!
//! ```
//! use blinkpath_config::SolverConfig;
//!
//! let config = SolverConfig::from_toml_str(r#"
//!     verify_solution = false
//!
//!     [horizon]
//!     multiplier = 4
//! "#).unwrap();
//!
//! assert_eq!(config.horizon_for(5).unwrap().steps(), 20);
//! assert!(!config.verify_solution);
//! ```
//!
//! Use default config when file is missing:
//!
//! ```
//! use blinkpath_config::SolverConfig;
//!
//! let config = SolverConfig::load("blinkpath.toml").unwrap_or_default();
//! assert_eq!(config.horizon_for(3).unwrap().steps(), 9);
//! ```

use std::path::Path;

use blinkpath_core::grid::DEFAULT_HORIZON_MULTIPLIER;
use blinkpath_core::{BlinkPathError, Horizon, OccupancyGrid};
use serde::{Deserialize, Serialize};
use thiserror::Error;

#[cfg(test)]
mod tests;

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

impl From<ConfigError> for BlinkPathError {
    fn from(err: ConfigError) -> Self {
        BlinkPathError::Config(err.to_string())
    }
}

/// Main solver configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct SolverConfig {
    /// Time horizon configuration.
    #[serde(default)]
    pub horizon: HorizonConfig,

    /// Re-check the solved grid against every constraint.
    #[serde(default = "default_true")]
    pub verify_solution: bool,

    /// Log the solved grid row by row.
    #[serde(default)]
    pub render_grid: bool,
}

fn default_true() -> bool {
    true
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            horizon: HorizonConfig::default(),
            verify_solution: true,
            render_grid: false,
        }
    }
}

impl SolverConfig {
    /// Creates a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns error if file doesn't exist, contains invalid TOML, or
    /// holds out-of-range values.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        Self::from_toml_file(path)
    }

    /// Loads configuration from a TOML file.
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parses configuration from a TOML string.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a YAML file.
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&contents)
    }

    /// Parses configuration from a YAML string.
    pub fn from_yaml_str(s: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Sets the horizon multiplier.
    pub fn with_horizon_multiplier(mut self, multiplier: usize) -> Self {
        self.horizon.multiplier = multiplier;
        self
    }

    /// Fixes the horizon to an absolute number of steps.
    pub fn with_fixed_horizon(mut self, steps: usize) -> Self {
        self.horizon.fixed = Some(steps);
        self
    }

    pub fn with_verify_solution(mut self, verify: bool) -> Self {
        self.verify_solution = verify;
        self
    }

    pub fn with_render_grid(mut self, render: bool) -> Self {
        self.render_grid = render;
        self
    }

    /// Rejects out-of-range values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.horizon.validate()
    }

    /// Horizon for a level of `length` positions.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] when the horizon or the resulting
    /// grid size overflows `usize`.
    pub fn horizon_for(&self, length: usize) -> Result<Horizon, ConfigError> {
        self.horizon.resolve(length)
    }
}

/// Time horizon configuration.
///
/// Infeasibility is only meaningful up to the resolved horizon: a level
/// reported unreachable may still be solvable with more steps.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub struct HorizonConfig {
    /// Steps per level position.
    #[serde(default = "default_multiplier")]
    pub multiplier: usize,

    /// Absolute number of steps, overriding the multiplier.
    #[serde(default)]
    pub fixed: Option<usize>,
}

fn default_multiplier() -> usize {
    DEFAULT_HORIZON_MULTIPLIER
}

impl Default for HorizonConfig {
    fn default() -> Self {
        Self {
            multiplier: DEFAULT_HORIZON_MULTIPLIER,
            fixed: None,
        }
    }
}

impl HorizonConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.multiplier == 0 {
            return Err(ConfigError::Invalid(
                "horizon multiplier must be at least 1".to_string(),
            ));
        }
        if self.fixed == Some(0) {
            return Err(ConfigError::Invalid(
                "fixed horizon must be at least 1 step".to_string(),
            ));
        }
        Ok(())
    }

    pub fn resolve(&self, length: usize) -> Result<Horizon, ConfigError> {
        let horizon = match self.fixed {
            Some(steps) => Horizon::new(steps),
            None => Horizon::checked_scaled(length, self.multiplier).ok_or_else(|| {
                ConfigError::Invalid(format!(
                    "horizon multiplier {} overflows for a level of {} positions",
                    self.multiplier, length
                ))
            })?,
        };
        if OccupancyGrid::checked_var_count(horizon, length).is_none() {
            return Err(ConfigError::Invalid(format!(
                "horizon of {} steps is too large for a level of {} positions",
                horizon.steps(),
                length
            )));
        }
        Ok(horizon)
    }
}
