use serde::{Deserialize, Serialize};

use crate::file_format::FileFormat;
use crate::provider::ProviderKind;

/// Top-level nestidx configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "camelCase")]
pub struct NestidxConfig {
    /// Provider whose index options are validated. `None` skips validation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider: Option<ProviderKind>,
    #[serde(default)]
    pub snapshot_format: FileFormat,
}

impl NestidxConfig {
    pub fn provider(&self) -> Option<ProviderKind> {
        self.provider
    }

    /// Preferred file format for saved snapshots.
    pub fn snapshot_format(&self) -> FileFormat {
        self.snapshot_format
    }
}
