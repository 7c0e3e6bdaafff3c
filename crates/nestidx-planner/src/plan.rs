use nestidx_core::{EntityDef, MigrationOperation};

use crate::diff::append_index_operations;
use crate::error::PlannerError;
use crate::provider::{ProviderVocabulary, validate_provider_options};

/// Full index pipeline: append index operations to `base_operations`, then check
/// them against the provider vocabulary when one is selected.
pub fn plan_migration(
    source: Option<&[EntityDef]>,
    target: Option<&[EntityDef]>,
    base_operations: Vec<MigrationOperation>,
    provider: Option<&ProviderVocabulary>,
) -> Result<Vec<MigrationOperation>, PlannerError> {
    let operations = append_index_operations(source, target, base_operations)?;
    if let Some(vocabulary) = provider {
        validate_provider_options(&operations, vocabulary)?;
    }
    Ok(operations)
}
