pub mod index;
pub mod operation;
pub mod schema;

pub use index::{
    DeclarationError, IndexDeclaration, IndexDeclarationBuilder, IndexDescriptor,
    ProviderOptions, WithProviderOptions, decode, encode, try_decode,
};
pub use operation::MigrationOperation;
pub use schema::{
    ColumnName, ComplexPropertyDef, EntityDef, IndexName, PropertyDef, PropertyIndex,
    PropertyName, SchemaName, StructuralType, TableName,
};

/// Build an ordered list of dotted property paths from field-access syntax.
///
/// Each comma-separated item is a chain of identifiers joined by `.`, exactly as
/// the properties would be reached from the entity:
///
/// ```
/// use nestidx_core::property_paths;
///
/// let paths = property_paths!(LastName, EmailAddress.Value, Address.ZipCode.Value);
/// assert_eq!(paths, vec!["LastName", "EmailAddress.Value", "Address.ZipCode.Value"]);
/// ```
#[macro_export]
macro_rules! property_paths {
    ($($head:ident $(. $tail:ident)*),+ $(,)?) => {
        ::std::vec![$([stringify!($head) $(, stringify!($tail))*].join(".")),+]
    };
}
