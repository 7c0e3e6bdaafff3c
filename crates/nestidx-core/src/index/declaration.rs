use std::collections::BTreeMap;
use std::ops::Not;

use serde::{Deserialize, Deserializer, Serialize};

use crate::index::error::DeclarationError;
use crate::schema::names::IndexName;

/// Provider-specific options attached to an index, passed through verbatim.
/// An empty map means "no options".
pub type ProviderOptions = BTreeMap<String, serde_json::Value>;

/// Persisted intent for one composite (multi-column) index.
///
/// Equality compares paths in order, uniqueness, filter, name, and the option
/// map by key. Absent and empty option maps are the same value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(schemars::JsonSchema))]
pub struct IndexDeclaration {
    /// Dotted property paths in physical column order.
    pub paths: Vec<String>,
    #[serde(default, skip_serializing_if = "Not::not")]
    pub unique: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<IndexName>,
    #[serde(
        rename = "props",
        default,
        deserialize_with = "deserialize_options",
        skip_serializing_if = "ProviderOptions::is_empty"
    )]
    #[cfg_attr(feature = "schema", schemars(with = "ProviderOptions"))]
    pub options: ProviderOptions,
}

impl IndexDeclaration {
    pub fn builder<I, S>(paths: I) -> IndexDeclarationBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        IndexDeclarationBuilder {
            paths: paths.into_iter().map(Into::into).collect(),
            unique: false,
            filter: None,
            name: None,
            options: ProviderOptions::new(),
        }
    }

    /// Check the composite shape: at least two paths, each with non-empty segments.
    pub fn validate(&self) -> Result<(), DeclarationError> {
        if self.paths.len() < 2 {
            return Err(DeclarationError::TooFewPaths(self.paths.len()));
        }
        if let Some(path) = self
            .paths
            .iter()
            .find(|p| !nestidx_naming::is_valid_path(p))
        {
            return Err(DeclarationError::InvalidPath(path.clone()));
        }
        Ok(())
    }
}

/// Builder for [`IndexDeclaration`]; `build` enforces the composite shape.
#[derive(Debug, Clone)]
pub struct IndexDeclarationBuilder {
    paths: Vec<String>,
    unique: bool,
    filter: Option<String>,
    name: Option<IndexName>,
    options: ProviderOptions,
}

impl IndexDeclarationBuilder {
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

    pub fn build(self) -> Result<IndexDeclaration, DeclarationError> {
        let declaration = IndexDeclaration {
            paths: self.paths,
            unique: self.unique,
            filter: self.filter,
            name: self.name,
            options: self.options,
        };
        declaration.validate()?;
        Ok(declaration)
    }
}

/// Index configuration that accepts provider-specific options. Provider
/// vocabularies build their helpers on top of this.
pub trait WithProviderOptions: Sized {
    fn with_option(self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self;
}

impl WithProviderOptions for IndexDeclarationBuilder {
    fn with_option(
        mut self,
        key: impl Into<String>,
        value: impl Into<serde_json::Value>,
    ) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }
}

/// Accepts a missing, `null`, or object-valued option map.
pub(crate) fn deserialize_options<'de, D>(deserializer: D) -> Result<ProviderOptions, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<ProviderOptions>::deserialize(deserializer).map(Option::unwrap_or_default)
}
