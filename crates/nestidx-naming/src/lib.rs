//! Naming conventions and helpers for nestidx.
//!
//! This crate provides consistent naming functions for synthesized index names,
//! dotted property paths, and the default column names of properties nested in
//! complex (value-object) structures. It has no dependencies and can be used by
//! any other nestidx crate.

// ============================================================================
// Property Paths
// ============================================================================

/// Separator between the segments of a dotted property path.
pub const PATH_SEPARATOR: char = '.';

/// Separator between the segments of a conventional nested column name.
pub const COLUMN_SEPARATOR: char = '_';

/// Split a dotted property path into its segments.
///
/// The path is not validated: empty segments are returned as empty strings so
/// that callers can reject them.
///
/// # Examples
/// ```
/// use nestidx_naming::split_path;
///
/// assert_eq!(split_path("Address.ZipCode.Value"), vec!["Address", "ZipCode", "Value"]);
/// assert_eq!(split_path("Name"), vec!["Name"]);
/// assert_eq!(split_path("Address..Value"), vec!["Address", "", "Value"]);
/// ```
pub fn split_path(path: &str) -> Vec<&str> {
    path.split(PATH_SEPARATOR).collect()
}

/// Returns true when every segment of the path is non-empty.
///
/// # Examples
/// ```
/// use nestidx_naming::is_valid_path;
///
/// assert!(is_valid_path("Address.ZipCode.Value"));
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("Address."));
/// assert!(!is_valid_path(".Value"));
/// ```
pub fn is_valid_path(path: &str) -> bool {
    split_path(path).iter().all(|segment| !segment.is_empty())
}

// ============================================================================
// Column Naming
// ============================================================================

/// Default physical column name for a property reached through a chain of
/// complex properties. The chain and the leaf name are joined with `_`.
///
/// # Examples
/// ```
/// use nestidx_naming::default_column_name;
///
/// assert_eq!(default_column_name(&["Name"]), "Name");
/// assert_eq!(default_column_name(&["Address", "ZipCode", "Value"]), "Address_ZipCode_Value");
/// ```
pub fn default_column_name<S: AsRef<str>>(segments: &[S]) -> String {
    join_with(segments, COLUMN_SEPARATOR)
}

fn join_with<S: AsRef<str>>(segments: &[S], separator: char) -> String {
    let mut result = String::new();
    for (i, segment) in segments.iter().enumerate() {
        if i > 0 {
            result.push(separator);
        }
        result.push_str(segment.as_ref());
    }
    result
}

// ============================================================================
// Index Naming
// ============================================================================

/// Generate an index name from the table name and the ordered column list.
/// Format: IX_{table}_{col1}_{col2}...
///
/// A single-column index therefore gets `IX_{table}_{column}`.
pub fn build_index_name<S: AsRef<str>>(table: &str, columns: &[S]) -> String {
    format!("IX_{}_{}", table, join_with(columns, COLUMN_SEPARATOR))
}
