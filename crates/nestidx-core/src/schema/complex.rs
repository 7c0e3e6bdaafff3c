use serde::{Deserialize, Serialize};

use crate::schema::{StructuralType, names::PropertyName, property::PropertyDef};

/// A value-object structure embedded in its owner's table. Its properties are
/// additional columns of that table, and it may embed further structures.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct ComplexPropertyDef {
    pub name: PropertyName,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub properties: Vec<PropertyDef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub complex_properties: Vec<ComplexPropertyDef>,
}

impl ComplexPropertyDef {
    pub fn new(name: impl Into<PropertyName>) -> Self {
        Self {
            name: name.into(),
            properties: Vec::new(),
            complex_properties: Vec::new(),
        }
    }

    pub fn with_property(mut self, property: PropertyDef) -> Self {
        self.properties.push(property);
        self
    }

    pub fn with_complex_property(mut self, complex: ComplexPropertyDef) -> Self {
        self.complex_properties.push(complex);
        self
    }
}

impl StructuralType for ComplexPropertyDef {
    fn properties(&self) -> &[PropertyDef] {
        &self.properties
    }

    fn complex_properties(&self) -> &[ComplexPropertyDef] {
        &self.complex_properties
    }
}
