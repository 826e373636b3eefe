// src/config/io.rs
use std::fs;
use std::path::Path;

use tracing::debug;

use super::types::LinkRankToml;
use super::Config;
use crate::error::{RankError, Result};

pub const CONFIG_FILE: &str = "linkrank.toml";

pub const DEFAULT_TOML: &str = r"# linkrank.toml
[rank]
damping = 0.85
samples = 10000
tolerance = 0.001
max_iterations = 10000
# seed = 42
";

/// Loads `linkrank.toml` from `dir` into `config`. A missing file is not an error.
pub fn load_toml_config(config: &mut Config, dir: &Path) -> Result<()> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(());
    }
    let content = fs::read_to_string(&path).map_err(|source| RankError::Io {
        source,
        path: path.clone(),
    })?;
    parse_toml(config, &content)?;
    debug!(path = %path.display(), "loaded config");
    Ok(())
}

pub fn parse_toml(config: &mut Config, content: &str) -> Result<()> {
    let parsed: LinkRankToml =
        toml::from_str(content).map_err(|e| RankError::Config(e.to_string()))?;
    config.rank = parsed.rank;
    Ok(())
}

/// Writes the default config into `dir`. Returns `false` if one already exists.
pub fn write_default(dir: &Path) -> Result<bool> {
    let path = dir.join(CONFIG_FILE);
    if path.exists() {
        return Ok(false);
    }
    fs::write(&path, DEFAULT_TOML).map_err(|source| RankError::Io { source, path })?;
    Ok(true)
}
