#[cfg(feature = "cli")]
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Database provider whose index option vocabulary is enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(ValueEnum))]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    Postgres,
}
