//! Configuration loading and validation

mod schema;

pub use schema::*;

use anyhow::{Context, Result};
use std::path::Path;
use tracing::debug;

/// Load a scene from a YAML file
pub fn load_config(path: &Path) -> Result<SceneConfig> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let config = parse_config(&contents)?;
    debug!(path = %path.display(), wave = ?config.wave, "loaded scene");
    Ok(config)
}

/// Parse and validate a scene from YAML text
pub fn parse_config(yaml: &str) -> Result<SceneConfig> {
    let config: SceneConfig = serde_yaml::from_str(yaml)?;
    config.validate()?;
    Ok(config)
}
