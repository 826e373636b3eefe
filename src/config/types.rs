use serde::{Deserialize, Serialize};

use crate::graph::rank::params::{
    DEFAULT_DAMPING, DEFAULT_MAX_ITERATIONS, DEFAULT_SAMPLES, DEFAULT_TOLERANCE,
};

/// Estimator parameters from the `[rank]` table of `linkrank.toml`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankConfig {
    #[serde(default = "default_damping")]
    pub damping: f64,
    #[serde(default = "default_samples")]
    pub samples: usize,
    #[serde(default = "default_tolerance")]
    pub tolerance: f64,
    #[serde(default = "default_max_iterations")]
    pub max_iterations: usize,
    /// Fixed seed for the random surfer. Unset means a fresh seed per run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for RankConfig {
    fn default() -> Self {
        Self {
            damping: default_damping(),
            samples: default_samples(),
            tolerance: default_tolerance(),
            max_iterations: default_max_iterations(),
            seed: None,
        }
    }
}

const fn default_damping() -> f64 { DEFAULT_DAMPING }
const fn default_samples() -> usize { DEFAULT_SAMPLES }
const fn default_tolerance() -> f64 { DEFAULT_TOLERANCE }
const fn default_max_iterations() -> usize { DEFAULT_MAX_ITERATIONS }

/// Command-line values that take precedence over the file.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RankOverrides {
    pub damping: Option<f64>,
    pub samples: Option<usize>,
    pub tolerance: Option<f64>,
    pub max_iterations: Option<usize>,
    pub seed: Option<u64>,
}

/// On-disk layout of `linkrank.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LinkRankToml {
    #[serde(default)]
    pub rank: RankConfig,
}
