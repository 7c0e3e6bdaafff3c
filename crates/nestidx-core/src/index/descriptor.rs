use crate::schema::names::{ColumnName, IndexName, SchemaName, TableName};

/// A fully resolved index: physical table, ordered physical columns, name,
/// uniqueness, and filter.
///
/// Descriptors are plain values built fresh for every diff. Equality, hashing,
/// and ordering are sensitive to column order, so `[a, b]` and `[b, a]` are
/// different indexes.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct IndexDescriptor {
    pub table: TableName,
    pub schema: Option<SchemaName>,
    pub columns: Vec<ColumnName>,
    pub name: IndexName,
    pub unique: bool,
    pub filter: Option<String>,
}

impl IndexDescriptor {
    /// Returns true when the descriptor belongs to the given table.
    pub fn is_on_table(&self, table: &str, schema: Option<&str>) -> bool {
        self.table == table && self.schema.as_deref() == schema
    }
}
