pub mod config;
pub mod info;
pub mod roc;
pub mod selftest;
pub mod threshold;

use std::path::Path;

use anyhow::{Context, Result};
use retina_core::config::EngineConfig;

/// Load an engine config from TOML, or the defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<EngineConfig> {
    match path {
        Some(path) => {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            toml::from_str(&contents).context("Invalid engine config")
        }
        None => Ok(EngineConfig::default()),
    }
}
