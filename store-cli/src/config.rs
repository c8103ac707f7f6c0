//! Configuration for the storefront binary

use anyhow::Context;
use rewards::RewardSchedule;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Binary configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Path of the startup snapshot (JSON)
    pub snapshot_path: PathBuf,

    /// Loyalty schedule applied by the reward engine
    pub reward: RewardSchedule,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from("./data.json"),
            reward: RewardSchedule::default(),
        }
    }
}

impl Config {
    /// Load from file
    pub fn from_file(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Resolve from the environment, falling back to defaults
    ///
    /// `STORE_CONFIG` names a TOML file to load; `STORE_SNAPSHOT` overrides
    /// the snapshot path either way.
    pub fn load() -> anyhow::Result<Self> {
        let mut config = match std::env::var("STORE_CONFIG") {
            Ok(path) => Self::from_file(path)?,
            Err(_) => Self::default(),
        };

        if let Ok(path) = std::env::var("STORE_SNAPSHOT") {
            config.snapshot_path = PathBuf::from(path);
        }

        Ok(config)
    }
}
