// src/config/mod.rs
pub mod io;
pub mod types;

pub use self::io::{CONFIG_FILE, DEFAULT_TOML};
pub use self::types::{LinkRankToml, RankConfig, RankOverrides};

use crate::error::{RankError, Result};
use crate::graph::rank::params::{check_damping, check_samples, check_tolerance};
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct Config {
    pub rank: RankConfig,
}

impl Config {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a new config and loads `linkrank.toml` from the working directory.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(Path::new("."))
    }

    /// Creates a new config and loads `linkrank.toml` from `dir`.
    ///
    /// # Errors
    /// Returns error if the file exists but cannot be read or parsed.
    pub fn load_from(dir: &Path) -> Result<Self> {
        let mut config = Self::new();
        io::load_toml_config(&mut config, dir)?;
        Ok(config)
    }

    /// # Errors
    /// Returns `Config` if `content` is not valid `linkrank.toml`.
    pub fn parse_toml(&mut self, content: &str) -> Result<()> {
        io::parse_toml(self, content)
    }

    /// Applies command-line values on top of the loaded ones.
    pub fn apply(&mut self, overrides: RankOverrides) {
        let rank = &mut self.rank;
        if let Some(d) = overrides.damping {
            rank.damping = d;
        }
        if let Some(n) = overrides.samples {
            rank.samples = n;
        }
        if let Some(t) = overrides.tolerance {
            rank.tolerance = t;
        }
        if let Some(m) = overrides.max_iterations {
            rank.max_iterations = m;
        }
        if overrides.seed.is_some() {
            rank.seed = overrides.seed;
        }
    }

    /// Validates estimator parameters.
    ///
    /// # Errors
    /// Returns the matching `RankError` for the first out-of-range value.
    pub fn validate(&self) -> Result<()> {
        check_damping(self.rank.damping)?;
        check_samples(self.rank.samples)?;
        check_tolerance(self.rank.tolerance)?;
        if self.rank.max_iterations == 0 {
            return Err(RankError::Config(
                "max_iterations must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Writes the default `linkrank.toml` into the working directory.
    ///
    /// # Errors
    /// Returns error if the file write fails.
    pub fn init() -> Result<bool> {
        io::write_default(Path::new("."))
    }
}
