// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::types::{Config, EngineConfig, ReportConfig};
use crate::error::{RankError, Result};
use std::path::Path;

pub const CONFIG_FILE: &str = "pagerank.toml";

/// Widest precision that still prints meaningful `f64` digits.
const MAX_PRECISION: usize = 17;

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads `pagerank.toml` from the current directory, falling back to
    /// defaults when it does not exist.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        io::load_from_dir(Path::new("."))
    }

    /// Loads an explicit config file.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed, or fails validation.
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_file(path)
    }

    /// Parses TOML text.
    ///
    /// # Errors
    /// Returns error on malformed TOML or invalid values.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validates configuration.
    ///
    /// # Errors
    /// Returns `InvalidArgument` for a negative or non-finite epsilon, or an
    /// unprintable precision.
    pub fn validate(&self) -> Result<()> {
        let eps = self.engine.epsilon;
        if !eps.is_finite() || eps < 0.0 {
            return Err(RankError::invalid(format!(
                "engine.epsilon must be a finite non-negative number, got {eps}"
            )));
        }
        if self.report.precision > MAX_PRECISION {
            return Err(RankError::invalid(format!(
                "report.precision must be at most {MAX_PRECISION}, got {}",
                self.report.precision
            )));
        }
        Ok(())
    }
}
