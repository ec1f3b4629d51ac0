//! TOML configuration file loading.
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Load a TOML file into `T`, or `T`'s empty-document value when the file
/// does not exist.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config<T: DeserializeOwned>(path: &Path) -> Result<T> {
    if !path.exists() {
        // Missing files deserialize like an empty document.
        return toml::from_str("").context("Failed to create empty config");
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;

    toml::from_str(&content)
        .with_context(|| format!("Failed to parse TOML config: {}", path.display()))
}
