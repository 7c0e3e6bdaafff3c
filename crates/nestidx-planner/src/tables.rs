use std::collections::BTreeSet;

use nestidx_core::{EntityDef, MigrationOperation};

use crate::reconcile::TableKey;

fn mapped_tables(model: Option<&[EntityDef]>) -> BTreeSet<TableKey> {
    model
        .unwrap_or_default()
        .iter()
        .filter_map(|entity| {
            entity
                .table
                .as_ref()
                .map(|table| (table.clone(), entity.schema.clone()))
        })
        .collect()
}

/// Table-level operations between two snapshots.
///
/// Emits `DropTable` for tables only present in `source`, then `CreateTable` for
/// tables only present in `target`. Columns are not compared.
pub fn table_operations(
    source: Option<&[EntityDef]>,
    target: Option<&[EntityDef]>,
) -> Vec<MigrationOperation> {
    let from = mapped_tables(source);
    let to = mapped_tables(target);

    let drops = from
        .difference(&to)
        .map(|(table, schema)| MigrationOperation::DropTable {
            table: table.clone(),
            schema: schema.clone(),
        });
    let creates = to
        .difference(&from)
        .map(|(table, schema)| MigrationOperation::CreateTable {
            table: table.clone(),
            schema: schema.clone(),
        });

    drops.chain(creates).collect()
}
