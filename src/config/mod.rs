#[cfg(feature = "cli")]
pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};
pub use toml_config::ScoringConfig;

use crate::utils::error::Result;
use serde::de::DeserializeOwned;
use std::path::Path;

/// Reads a JSON input file (form data, tips, results, standings, calendar).
pub fn load_json<T: DeserializeOwned, P: AsRef<Path>>(path: P) -> Result<T> {
    let content = std::fs::read_to_string(&path)?;
    tracing::debug!("Loaded {} bytes from {}", content.len(), path.as_ref().display());
    Ok(serde_json::from_str(&content)?)
}
