//! JSON configuration for enclosing ball computations

use crate::{EnclosingError, Result};
use math_euclidean::{DEFAULT_EPSILON, Precision};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Encloser settings. Every field has a default, so `{}` is a valid
/// configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EncloserConfig {
    /// Absolute tolerance shared by containment and degeneracy checks, must be > 0
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
    /// Seed for the point shuffle; a fresh seed is drawn per call when unset
    #[serde(default)]
    pub seed: Option<u64>,
    /// Maximum number of pivoting steps before giving up
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Point count from which the farthest point search runs in parallel
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

fn default_epsilon() -> f64 {
    DEFAULT_EPSILON
}

fn default_max_iterations() -> usize {
    10_000
}

fn default_parallel_threshold() -> usize {
    4096
}

impl Default for EncloserConfig {
    fn default() -> Self {
        Self {
            epsilon: default_epsilon(),
            seed: None,
            max_iterations: default_max_iterations(),
            parallel_threshold: default_parallel_threshold(),
        }
    }
}

impl EncloserConfig {
    /// Check the configuration and build its precision context.
    pub fn precision(&self) -> Result<Precision> {
        Ok(Precision::new(self.epsilon)?)
    }

    pub fn validate(&self) -> Result<()> {
        self.precision()?;
        if self.max_iterations == 0 {
            return Err(EnclosingError::InvalidConfig(
                "max_iterations must be > 0".to_string(),
            ));
        }
        if self.parallel_threshold == 0 {
            return Err(EnclosingError::InvalidConfig(
                "parallel_threshold must be > 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Parse and validate a JSON configuration string
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: EncloserConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }

    /// Save the configuration as pretty printed JSON
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }
}

/// Fluent builder for [`EncloserConfig`].
///
/// # Example
///
/// ```rust
/// use math_enclosing::EncloserConfigBuilder;
///
/// let config = EncloserConfigBuilder::new()
///     .epsilon(1e-8)
///     .seed(42)
///     .build()
///     .expect("invalid config");
/// assert_eq!(config.seed, Some(42));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EncloserConfigBuilder {
    cfg: EncloserConfig,
}

impl EncloserConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }
    /// Sets the absolute comparison tolerance.
    pub fn epsilon(mut self, v: f64) -> Self {
        self.cfg.epsilon = v;
        self
    }
    /// Sets the shuffle seed for reproducible runs.
    pub fn seed(mut self, v: u64) -> Self {
        self.cfg.seed = Some(v);
        self
    }
    pub fn max_iterations(mut self, v: usize) -> Self {
        self.cfg.max_iterations = v;
        self
    }
    pub fn parallel_threshold(mut self, v: usize) -> Self {
        self.cfg.parallel_threshold = v;
        self
    }
    /// Validates and returns the configuration.
    pub fn build(self) -> Result<EncloserConfig> {
        self.cfg.validate()?;
        Ok(self.cfg)
    }
}
