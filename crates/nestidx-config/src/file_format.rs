#[cfg(feature = "cli")]
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Supported file formats for schema snapshots.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "lowercase")]
pub enum FileFormat {
    #[default]
    Json,
    Yaml,
    Yml,
}

impl FileFormat {
    /// File extension, without the leading dot.
    pub fn extension(self) -> &'static str {
        match self {
            FileFormat::Json => "json",
            FileFormat::Yaml => "yaml",
            FileFormat::Yml => "yml",
        }
    }

    /// Format matching a file extension, case-insensitively.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(FileFormat::Json),
            "yaml" => Some(FileFormat::Yaml),
            "yml" => Some(FileFormat::Yml),
            _ => None,
        }
    }

    pub fn is_yaml(self) -> bool {
        matches!(self, FileFormat::Yaml | FileFormat::Yml)
    }
}
