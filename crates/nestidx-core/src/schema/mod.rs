pub mod complex;
pub mod entity;
pub mod names;
pub mod property;

pub use complex::ComplexPropertyDef;
pub use entity::EntityDef;
pub use names::{ColumnName, IndexName, PropertyName, SchemaName, TableName};
pub use property::{PropertyDef, PropertyIndex};

/// A structure that owns properties and nested complex properties: either an
/// entity or a complex property embedded in one.
///
/// Only declared members are visible; there is no base-type lookup.
pub trait StructuralType {
    fn properties(&self) -> &[PropertyDef];

    fn complex_properties(&self) -> &[ComplexPropertyDef];

    fn find_property(&self, name: &str) -> Option<&PropertyDef> {
        self.properties().iter().find(|p| p.name == name)
    }

    fn find_complex_property(&self, name: &str) -> Option<&ComplexPropertyDef> {
        self.complex_properties().iter().find(|c| c.name == name)
    }
}
