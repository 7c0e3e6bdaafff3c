use serde::{Deserialize, Serialize};

use crate::index::{ProviderOptions, WithProviderOptions, deserialize_options};
use crate::schema::names::{ColumnName, IndexName, PropertyName};

/// A scalar property mapped to one physical column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct PropertyDef {
    pub name: PropertyName,
    /// Explicit column name. When absent the conventional nested name is used.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub column: Option<ColumnName>,
    /// Single-column index marker.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub index: Option<PropertyIndex>,
}

impl PropertyDef {
    pub fn new(name: impl Into<PropertyName>) -> Self {
        Self {
            name: name.into(),
            column: None,
            index: None,
        }
    }

    pub fn with_column(mut self, column: impl Into<ColumnName>) -> Self {
        self.column = Some(column.into());
        self
    }

    pub fn with_index(mut self, index: PropertyIndex) -> Self {
        self.index = Some(index);
        self
    }

    /// Physical column name of this property when reached through `parents`,
    /// the names of the enclosing complex properties from the entity down.
    pub fn column_name<S: AsRef<str>>(&self, parents: &[S]) -> ColumnName {
        if let Some(column) = &self.column {
            return column.clone();
        }
        let mut segments: Vec<&str> = parents.iter().map(|s| s.as_ref()).collect();
        segments.push(&self.name);
        nestidx_naming::default_column_name(&segments)
    }
}

/// Single-column index marker attached to a property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
#[serde(rename_all = "snake_case")]
pub struct PropertyIndex {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub unique: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<IndexName>,
    #[serde(
        default,
        deserialize_with = "deserialize_options",
        skip_serializing_if = "ProviderOptions::is_empty"
    )]
    #[cfg_attr(feature = "schema", schemars(with = "ProviderOptions"))]
    pub options: ProviderOptions,
}

impl PropertyIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn unique(mut self, unique: bool) -> Self {
        self.unique = unique;
        self
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn name(mut self, name: impl Into<IndexName>) -> Self {
        self.name = Some(name.into());
        self
    }
}

impl WithProviderOptions for PropertyIndex {
    fn with_option(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case::top_level(PropertyDef::new("Name"), &[], "Name")]
    #[case::nested(PropertyDef::new("Value"), &["EmailAddress"], "EmailAddress_Value")]
    #[case::deeply_nested(PropertyDef::new("Value"), &["Address", "ZipCode"], "Address_ZipCode_Value")]
    #[case::explicit(
        PropertyDef::new("Value").with_column("email_address"),
        &["EmailAddress"],
        "email_address"
    )]
    fn column_name_resolution(
        #[case] property: PropertyDef,
        #[case] parents: &[&str],
        #[case] expected: &str,
    ) {
        assert_eq!(property.column_name(parents), expected);
    }

    #[test]
    fn marker_builder_sets_fields() {
        let marker = PropertyIndex::new()
            .unique(true)
            .filter("deleted_at IS NULL")
            .name("IX_custom")
            .with_option("Npgsql:IndexMethod", "gin");

        assert!(marker.unique);
        assert_eq!(marker.filter.as_deref(), Some("deleted_at IS NULL"));
        assert_eq!(marker.name.as_deref(), Some("IX_custom"));
        assert_eq!(
            marker.options.get("Npgsql:IndexMethod"),
            Some(&serde_json::json!("gin"))
        );
    }

    #[test]
    fn default_marker_serializes_to_empty_object() {
        let json = serde_json::to_string(&PropertyIndex::new()).unwrap();
        assert_eq!(json, "{}");
    }

    #[test]
    fn property_without_marker_omits_optional_fields() {
        let json = serde_json::to_string(&PropertyDef::new("Name")).unwrap();
        assert_eq!(json, r#"{"name":"Name"}"#);
    }
}
