//! Provider option vocabularies and the validation pass that checks index
//! operations against them.

pub mod postgres;

pub use postgres::{POSTGRES, PostgresIndexExt};

use nestidx_core::MigrationOperation;

use crate::error::PlannerError;

/// The option keys a database provider understands on index operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProviderVocabulary {
    /// Display name used in error messages.
    pub provider: &'static str,
    /// Key prefix owned by this provider, e.g. `Npgsql:`.
    pub namespace: &'static str,
    /// Fully-qualified keys this provider accepts.
    pub supported: &'static [&'static str],
}

impl ProviderVocabulary {
    /// True when the key belongs to this provider's namespace.
    pub fn owns(&self, key: &str) -> bool {
        key.starts_with(self.namespace)
    }

    pub fn recognizes(&self, key: &str) -> bool {
        self.supported.contains(&key)
    }
}

/// Reject index operations that carry options in the provider's namespace it does
/// not recognize. Keys outside the namespace are left alone.
pub fn validate_provider_options(
    operations: &[MigrationOperation],
    vocabulary: &ProviderVocabulary,
) -> Result<(), PlannerError> {
    for operation in operations {
        let MigrationOperation::CreateIndex { name, options, .. } = operation else {
            continue;
        };
        if let Some(key) = options
            .keys()
            .find(|key| vocabulary.owns(key) && !vocabulary.recognizes(key))
        {
            return Err(PlannerError::UnrecognizedProviderOption {
                provider: vocabulary.provider.to_string(),
                key: key.clone(),
                index: name.clone(),
                supported: vocabulary.supported.join(", "),
            });
        }
    }
    Ok(())
}
