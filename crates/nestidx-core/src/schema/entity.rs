use serde::{Deserialize, Serialize};

use crate::index::{DeclarationError, IndexDeclaration, decode, encode, try_decode};
use crate::schema::{
    StructuralType,
    complex::ComplexPropertyDef,
    names::{SchemaName, TableName},
    property::PropertyDef,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct EntityDef {
    pub name: String,
    /// Physical table. Entities without one are not mapped and own no indexes.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub table: Option<TableName>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schema: Option<SchemaName>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<PropertyDef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub complex_properties: Vec<ComplexPropertyDef>,
    /// Encoded list of composite index declarations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub composite_indexes: Option<String>,
}

impl EntityDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            table: None,
            schema: None,
            properties: Vec::new(),
            complex_properties: Vec::new(),
            composite_indexes: None,
        }
    }

    pub fn with_table(mut self, table: impl Into<TableName>) -> Self {
        self.table = Some(table.into());
        self
    }

    pub fn with_schema(mut self, schema: impl Into<SchemaName>) -> Self {
        self.schema = Some(schema.into());
        self
    }

    pub fn with_property(mut self, property: PropertyDef) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_complex_property(mut self, complex: ComplexPropertyDef) -> Self {
        self.complex_properties.push(complex);
        self
    }

    /// Decode the composite index annotation. A missing, empty, or undecodable
    /// annotation yields no declarations.
    pub fn composite_index_declarations(&self) -> Vec<IndexDeclaration> {
        self.composite_indexes
            .as_deref()
            .map(decode)
            .unwrap_or_default()
    }

    /// Declare a composite index on this entity.
    ///
    /// A previous declaration over the same ordered paths is replaced. Invalid
    /// declarations and an undecodable existing annotation are rejected without
    /// touching the annotation.
    pub fn declare_composite_index(
        &mut self,
        declaration: IndexDeclaration,
    ) -> Result<(), DeclarationError> {
        declaration.validate()?;

        let mut existing = match self.composite_indexes.as_deref() {
            Some(text) => try_decode(text)?,
            None => Vec::new(),
        };
        existing.retain(|d| d.paths != declaration.paths);
        existing.push(declaration);

        self.composite_indexes = Some(encode(&existing)?);
        Ok(())
    }

    /// Builder-style variant of [`EntityDef::declare_composite_index`].
    pub fn with_composite_index(
        mut self,
        declaration: IndexDeclaration,
    ) -> Result<Self, DeclarationError> {
        self.declare_composite_index(declaration)?;
        Ok(self)
    }
}

impl StructuralType for EntityDef {
    fn properties(&self) -> &[PropertyDef] {
        &self.properties
    }

    fn complex_properties(&self) -> &[ComplexPropertyDef] {
        &self.complex_properties
    }
}
