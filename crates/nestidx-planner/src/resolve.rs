use nestidx_core::{ColumnName, EntityDef, StructuralType};
use nestidx_naming::split_path;

/// Resolve a dotted property path against an entity to the physical column it
/// maps to.
///
/// Every segment but the last must name a complex property of the structure
/// reached so far, and the last must name a property. Returns `None` as soon as
/// a segment does not resolve.
pub fn resolve_column(entity: &EntityDef, path: &str) -> Option<ColumnName> {
    let segments = split_path(path);
    let (leaf, parents) = segments.split_last()?;

    let mut current: &dyn StructuralType = entity;
    for segment in parents {
        current = current.find_complex_property(segment)? as &dyn StructuralType;
    }

    current
        .find_property(leaf)
        .map(|property| property.column_name(parents))
}
