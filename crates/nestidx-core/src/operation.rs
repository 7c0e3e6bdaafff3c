use serde::{Deserialize, Serialize};

use crate::index::{IndexDescriptor, ProviderOptions};
use crate::schema::{ColumnName, IndexName, SchemaName, TableName};

/// A generic migration operation. Table and column operations come from the base
/// differ; index operations are appended by the reconciliation pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum MigrationOperation {
    CreateTable {
        table: TableName,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        schema: Option<SchemaName>,
    },
    DropTable {
        table: TableName,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        schema: Option<SchemaName>,
    },
    RenameTable {
        from: TableName,
        to: TableName,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        schema: Option<SchemaName>,
    },
    AddColumn {
        table: TableName,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        schema: Option<SchemaName>,
        column: ColumnName,
    },
    DropColumn {
        table: TableName,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        schema: Option<SchemaName>,
        column: ColumnName,
    },
    RenameColumn {
        table: TableName,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        schema: Option<SchemaName>,
        from: ColumnName,
        to: ColumnName,
    },
    CreateIndex {
        table: TableName,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        schema: Option<SchemaName>,
        name: IndexName,
        columns: Vec<ColumnName>,
        #[serde(default)]
        unique: bool,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        filter: Option<String>,
        /// Provider-specific options, checked by provider validation passes.
        #[serde(default, skip_serializing_if = "ProviderOptions::is_empty")]
        options: ProviderOptions,
    },
    DropIndex {
        table: TableName,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        schema: Option<SchemaName>,
        name: IndexName,
    },
}

impl MigrationOperation {
    pub fn create_index(descriptor: &IndexDescriptor, options: ProviderOptions) -> Self {
        MigrationOperation::CreateIndex {
            table: descriptor.table.clone(),
            schema: descriptor.schema.clone(),
            name: descriptor.name.clone(),
            columns: descriptor.columns.clone(),
            unique: descriptor.unique,
            filter: descriptor.filter.clone(),
            options,
        }
    }

    pub fn drop_index(descriptor: &IndexDescriptor) -> Self {
        MigrationOperation::DropIndex {
            table: descriptor.table.clone(),
            schema: descriptor.schema.clone(),
            name: descriptor.name.clone(),
        }
    }

    /// The `(table, schema)` this operation drops, if it is a table drop.
    pub fn dropped_table(&self) -> Option<(&str, Option<&str>)> {
        match self {
            MigrationOperation::DropTable { table, schema } => {
                Some((table.as_str(), schema.as_deref()))
            }
            _ => None,
        }
    }
}
