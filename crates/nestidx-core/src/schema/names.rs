pub type TableName = String;
pub type SchemaName = String;
pub type ColumnName = String;
pub type IndexName = String;
pub type PropertyName = String;
