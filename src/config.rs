//! Configuration for the Bayline CLI
//!
//! Optional `bayline.toml` next to the working directory supplies defaults;
//! CLI flags always win. Missing file means built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::BaylineResult;

/// Config file name looked up in the working directory
pub const CONFIG_FILE: &str = "bayline.toml";

/// Replication defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReplicateConfig {
    #[serde(default = "default_dx")]
    pub dx: f64,
    #[serde(default = "default_dy")]
    pub dy: f64,
    /// Keep original counterpart names on now-external links
    #[serde(default = "default_true")]
    pub keep_external_names: bool,
}

fn default_dx() -> f64 {
    80.0
}

fn default_dy() -> f64 {
    60.0
}

fn default_true() -> bool {
    true
}

impl Default for ReplicateConfig {
    fn default() -> Self {
        Self {
            dx: default_dx(),
            dy: default_dy(),
            keep_external_names: true,
        }
    }
}

/// Top-level CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Default project document used when `--project` is not given
    #[serde(default)]
    pub project: Option<PathBuf>,

    #[serde(default)]
    pub replicate: ReplicateConfig,
}

impl Config {
    /// Load from `bayline.toml` under the given directory, or defaults
    pub fn load(dir: &Path) -> BaylineResult<Self> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path)?;
        Ok(toml::from_str(&raw)?)
    }
}
