use std::collections::{BTreeMap, BTreeSet};

use nestidx_core::{
    EntityDef, IndexDescriptor, ProviderOptions, SchemaName, StructuralType, TableName,
};
use nestidx_naming::build_index_name;
use tracing::debug;

use crate::error::PlannerError;
use crate::resolve::resolve_column;

/// Every index a snapshot requires, with the provider options declared for each.
///
/// Options ride along for decorating create operations; they never take part in
/// descriptor equality.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExtractedIndexes {
    descriptors: BTreeSet<IndexDescriptor>,
    options: BTreeMap<IndexDescriptor, ProviderOptions>,
}

impl ExtractedIndexes {
    pub fn descriptors(&self) -> &BTreeSet<IndexDescriptor> {
        &self.descriptors
    }

    pub fn options_for(&self, descriptor: &IndexDescriptor) -> Option<&ProviderOptions> {
        self.options.get(descriptor)
    }

    pub fn contains(&self, descriptor: &IndexDescriptor) -> bool {
        self.descriptors.contains(descriptor)
    }

    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Record a descriptor. Options of equal descriptors are merged by key, so the
    /// result does not depend on the order entities are scanned in. The same key
    /// with two different values is a conflict.
    fn insert(
        &mut self,
        descriptor: IndexDescriptor,
        options: &ProviderOptions,
    ) -> Result<(), PlannerError> {
        if !options.is_empty() {
            let merged = self.options.entry(descriptor.clone()).or_default();
            for (key, value) in options {
                match merged.get(key) {
                    Some(existing) if existing != value => {
                        return Err(PlannerError::ConflictingProviderOption {
                            index: descriptor.name.clone(),
                            key: key.clone(),
                        });
                    }
                    Some(_) => {}
                    None => {
                        merged.insert(key.clone(), value.clone());
                    }
                }
            }
        }
        self.descriptors.insert(descriptor);
        Ok(())
    }
}

/// Extract the complete set of index descriptors implied by a snapshot.
///
/// `None` is the empty schema. Entities without a table are skipped. Fails when
/// a composite declaration is not a valid composite shape or names a path that
/// does not resolve on its entity, and when equal indexes carry conflicting
/// provider options.
pub fn extract_descriptors(model: Option<&[EntityDef]>) -> Result<ExtractedIndexes, PlannerError> {
    let mut result = ExtractedIndexes::default();
    let Some(entities) = model else {
        return Ok(result);
    };

    for entity in entities {
        let Some(table) = entity.table.as_ref() else {
            continue;
        };
        let schema = entity.schema.as_ref();

        let mut parents = Vec::new();
        scan_single_column_indexes(entity, &mut parents, table, schema, &mut result)?;
        scan_composite_indexes(entity, table, schema, &mut result)?;
    }

    debug!(
        entities = entities.len(),
        descriptors = result.len(),
        "extracted index descriptors"
    );
    Ok(result)
}

/// Depth-first scan of declared properties, then nested complex properties, for
/// single-column index markers.
fn scan_single_column_indexes<'a>(
    structure: &'a dyn StructuralType,
    parents: &mut Vec<&'a str>,
    table: &TableName,
    schema: Option<&SchemaName>,
    result: &mut ExtractedIndexes,
) -> Result<(), PlannerError> {
    for property in structure.properties() {
        let Some(marker) = property.index.as_ref() else {
            continue;
        };

        let column = property.column_name(parents.as_slice());
        let name = marker
            .name
            .clone()
            .unwrap_or_else(|| build_index_name(table, std::slice::from_ref(&column)));

        result.insert(
            IndexDescriptor {
                table: table.clone(),
                schema: schema.cloned(),
                columns: vec![column],
                name,
                unique: marker.unique,
                filter: marker.filter.clone(),
            },
            &marker.options,
        )?;
    }

    for complex in structure.complex_properties() {
        parents.push(complex.name.as_str());
        let scanned = scan_single_column_indexes(complex, parents, table, schema, result);
        parents.pop();
        scanned?;
    }
    Ok(())
}

fn scan_composite_indexes(
    entity: &EntityDef,
    table: &TableName,
    schema: Option<&SchemaName>,
    result: &mut ExtractedIndexes,
) -> Result<(), PlannerError> {
    for declaration in entity.composite_index_declarations() {
        declaration
            .validate()
            .map_err(|source| PlannerError::InvalidDeclaration {
                entity: entity.name.clone(),
                source,
            })?;

        let columns = declaration
            .paths
            .iter()
            .map(|path| {
                resolve_column(entity, path).ok_or_else(|| PlannerError::UnresolvablePath {
                    entity: entity.name.clone(),
                    path: path.clone(),
                    declared: declaration.paths.join(", "),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let name = declaration
            .name
            .clone()
            .unwrap_or_else(|| build_index_name(table, &columns));

        result.insert(
            IndexDescriptor {
                table: table.clone(),
                schema: schema.cloned(),
                columns,
                name,
                unique: declaration.unique,
                filter: declaration.filter.clone(),
            },
            &declaration.options,
        )?;
    }
    Ok(())
}
