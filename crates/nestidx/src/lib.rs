//! Index migrations for properties nested inside value-object structures.
//!
//! Declare single-column markers on nested properties and composite indexes over
//! dotted property paths, then diff two schema snapshots into `CreateIndex` and
//! `DropIndex` operations.

use std::path::{Path, PathBuf};

use tracing::debug;

pub use nestidx_config::{FileFormat, NestidxConfig, ProviderKind};
pub use nestidx_core::{
    ComplexPropertyDef, DeclarationError, EntityDef, IndexDeclaration, IndexDeclarationBuilder,
    IndexDescriptor, MigrationOperation, PropertyDef, PropertyIndex, ProviderOptions,
    StructuralType, WithProviderOptions, property_paths,
};
pub use nestidx_loader::{
    load_config_from_path, load_config_or_default, load_snapshot, load_snapshot_or_empty,
    save_snapshot,
};
pub use nestidx_naming::build_index_name;
pub use nestidx_planner::{
    POSTGRES, PlannerError, PostgresIndexExt, ProviderVocabulary, append_index_operations,
    extract_descriptors, plan_migration, reconcile, table_operations,
    validate_provider_options,
};

/// Option vocabulary enforced for a configured provider.
pub fn vocabulary_for(provider: ProviderKind) -> &'static ProviderVocabulary {
    match provider {
        ProviderKind::Postgres => &POSTGRES,
    }
}

/// Diff two in-memory snapshots: table operations first, then index operations,
/// validated against the configured provider.
pub fn diff_snapshots(
    config: &NestidxConfig,
    source: Option<&[EntityDef]>,
    target: Option<&[EntityDef]>,
) -> Result<Vec<MigrationOperation>, PlannerError> {
    let base = table_operations(source, target);
    let vocabulary = config.provider().map(vocabulary_for);
    plan_migration(source, target, base, vocabulary)
}

/// Diff two snapshot files. A missing source file is the empty schema.
pub fn diff_snapshot_files(
    config: &NestidxConfig,
    source: impl AsRef<Path>,
    target: impl AsRef<Path>,
) -> anyhow::Result<Vec<MigrationOperation>> {
    let source = load_snapshot_or_empty(source)?;
    let target = load_snapshot(target)?;

    let operations = diff_snapshots(config, source.as_deref(), Some(&target))?;
    debug!(operations = operations.len(), "diffed snapshot files");
    Ok(operations)
}

/// Save a snapshot in the configured snapshot format. The extension of `path` is
/// set to match the format, and the written path is returned.
pub fn save_configured_snapshot(
    config: &NestidxConfig,
    path: impl AsRef<Path>,
    entities: &[EntityDef],
) -> anyhow::Result<PathBuf> {
    let format = config.snapshot_format();
    let path = path.as_ref().with_extension(format.extension());
    save_snapshot(&path, entities, format)?;
    Ok(path)
}
