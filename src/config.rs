//! Simulation configuration.
//!
//! Controls which disciplines run, the Round-Robin quantum, and how the
//! results are presented. Can be built in code or deserialized from JSON;
//! missing fields take their defaults.
//!
//! ```
//! use u_cpusched::config::SimulationConfig;
//! use u_cpusched::models::Algorithm;
//!
//! let config: SimulationConfig =
//!     serde_json::from_str(r#"{ "algorithms": ["fcfs", "rr"], "quantum": 2 }"#).unwrap();
//! assert_eq!(config.algorithms, vec![Algorithm::Fcfs, Algorithm::RoundRobin]);
//! assert_eq!(config.quantum.get(), 2);
//! assert!(!config.merge_segments);
//! ```

use std::num::NonZeroU32;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::models::Algorithm;

/// Settings for one simulation session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Disciplines to run, in output order.
    pub algorithms: Vec<Algorithm>,
    /// Round-Robin time quantum.
    pub quantum: NonZeroU32,
    /// Join back-to-back segments of the same task in reports and charts.
    pub merge_segments: bool,
    /// Seed for display colors. `None` = random per session.
    pub color_seed: Option<u64>,
    /// Chart columns per time unit.
    pub chart_scale: usize,
}

/// Errors reading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config selects no algorithms")]
    NoAlgorithms,
    #[error("chart scale must be at least 1")]
    ZeroScale,
}

impl SimulationConfig {
    /// Default configuration: all five disciplines, quantum 1.
    pub fn new() -> Self {
        Self {
            algorithms: Algorithm::ALL.to_vec(),
            quantum: NonZeroU32::MIN,
            merge_segments: false,
            color_seed: None,
            chart_scale: 4,
        }
    }

    /// Loads a JSON configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;
        config.validate()?;
        Ok(config)
    }

    /// Rejects configurations that cannot produce output.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.algorithms.is_empty() {
            return Err(ConfigError::NoAlgorithms);
        }
        if self.chart_scale == 0 {
            return Err(ConfigError::ZeroScale);
        }
        Ok(())
    }

    /// Sets the disciplines to run.
    pub fn with_algorithms(mut self, algorithms: impl IntoIterator<Item = Algorithm>) -> Self {
        self.algorithms = algorithms.into_iter().collect();
        self
    }

    /// Sets the Round-Robin quantum.
    pub fn with_quantum(mut self, quantum: NonZeroU32) -> Self {
        self.quantum = quantum;
        self
    }

    /// Enables or disables segment merging.
    pub fn with_merge_segments(mut self, merge: bool) -> Self {
        self.merge_segments = merge;
        self
    }

    /// Fixes the color seed for reproducible output.
    pub fn with_color_seed(mut self, seed: u64) -> Self {
        self.color_seed = Some(seed);
        self
    }

    /// Sets chart columns per time unit.
    pub fn with_chart_scale(mut self, scale: usize) -> Self {
        self.chart_scale = scale;
        self
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new()
    }
}
