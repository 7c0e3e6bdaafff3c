use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use nestidx_config::NestidxConfig;

pub const CONFIG_FILE_NAME: &str = "nestidx.json";

/// Load config from a specific path.
pub fn load_config_from_path(path: impl AsRef<Path>) -> Result<NestidxConfig> {
    let path = path.as_ref();
    if !path.exists() {
        anyhow::bail!("{} not found at: {}", CONFIG_FILE_NAME, path.display());
    }

    let content =
        fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let config: NestidxConfig =
        serde_json::from_str(&content).with_context(|| format!("parse {}", path.display()))?;
    Ok(config)
}

/// Load config from project root, with fallback to defaults.
pub fn load_config_or_default(project_root: Option<PathBuf>) -> Result<NestidxConfig> {
    let config_path = match project_root {
        Some(root) => root.join(CONFIG_FILE_NAME),
        None => PathBuf::from(CONFIG_FILE_NAME),
    };

    if config_path.exists() {
        load_config_from_path(config_path)
    } else {
        Ok(NestidxConfig::default())
    }
}
