//! TOML configuration loader.
//!
//! Reads the file and maps it onto [`AppConfig`]. No validation and no
//! defaults happen here; empty values are passed through as read.

use std::path::Path;

use anyhow::Context;
use nf_core::config::AppConfig;

pub fn load_config(config_path: &Path) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}
