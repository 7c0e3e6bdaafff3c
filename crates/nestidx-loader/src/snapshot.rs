use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use nestidx_config::FileFormat;
use nestidx_core::EntityDef;

fn format_of(path: &Path) -> Result<FileFormat> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .and_then(FileFormat::from_extension)
        .with_context(|| {
            format!(
                "unsupported snapshot extension (expected json, yaml or yml): {}",
                path.display()
            )
        })
}

/// Load a schema snapshot. The format follows the file extension.
pub fn load_snapshot(path: impl AsRef<Path>) -> Result<Vec<EntityDef>> {
    let path = path.as_ref();
    let format = format_of(path)?;
    let content = fs::read_to_string(path)
        .with_context(|| format!("read snapshot file: {}", path.display()))?;

    let entities: Vec<EntityDef> = if format.is_yaml() {
        serde_yaml::from_str(&content)
            .with_context(|| format!("parse YAML snapshot: {}", path.display()))?
    } else {
        serde_json::from_str(&content)
            .with_context(|| format!("parse JSON snapshot: {}", path.display()))?
    };
    Ok(entities)
}

/// Load a snapshot, treating a missing file as the empty schema.
pub fn load_snapshot_or_empty(path: impl AsRef<Path>) -> Result<Option<Vec<EntityDef>>> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(None);
    }
    load_snapshot(path).map(Some)
}

/// Write a schema snapshot in the given format, creating parent directories.
pub fn save_snapshot(
    path: impl AsRef<Path>,
    entities: &[EntityDef],
    format: FileFormat,
) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("create snapshot directory: {}", parent.display()))?;
    }

    let text = if format.is_yaml() {
        serde_yaml::to_string(entities).context("serialize snapshot to YAML")?
    } else {
        serde_json::to_string_pretty(entities).context("serialize snapshot to JSON")?
    };
    fs::write(path, text).with_context(|| format!("write snapshot file: {}", path.display()))?;
    Ok(())
}
