use crate::rank::{EPSILON, MAX_ITERS};
use serde::{Deserialize, Serialize};

/// Power-iteration settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Absolute per-entry tolerance for the equilibrium check.
    #[serde(default = "default_epsilon")]
    pub epsilon: f64,
    /// Write ranks onto nodes even when the iteration cap is hit.
    #[serde(default)]
    pub commit_on_cap: bool,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_iterations: default_max_iterations(),
            epsilon: default_epsilon(),
            commit_on_cap: false,
        }
    }
}

impl EngineConfig {
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    #[must_use]
    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    #[must_use]
    pub fn with_commit_on_cap(mut self, commit_on_cap: bool) -> Self {
        self.commit_on_cap = commit_on_cap;
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    /// Digits after the decimal point in console output.
    #[serde(default = "default_precision")]
    pub precision: usize,
    #[serde(default = "default_true")]
    pub show_links: bool,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            precision: default_precision(),
            show_links: true,
        }
    }
}

const fn default_true() -> bool { true }
const fn default_max_iterations() -> usize { MAX_ITERS }
const fn default_epsilon() -> f64 { EPSILON }
const fn default_precision() -> usize { 6 }

/// Contents of `pagerank.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub engine: EngineConfig,
    #[serde(default)]
    pub report: ReportConfig,
}
