use nestidx_core::WithProviderOptions;

use super::ProviderVocabulary;

pub const INDEX_METHOD: &str = "Npgsql:IndexMethod";
pub const INDEX_OPERATORS: &str = "Npgsql:IndexOperators";
pub const INDEX_INCLUDE: &str = "Npgsql:IndexInclude";
pub const INDEX_SORT_ORDER: &str = "Npgsql:IndexSortOrder";
pub const INDEX_NULL_SORT_ORDER: &str = "Npgsql:IndexNullSortOrder";
pub const CREATED_CONCURRENTLY: &str = "Npgsql:CreatedConcurrently";
pub const NULLS_DISTINCT: &str = "Npgsql:NullsDistinct";

/// Index options understood by the PostgreSQL provider.
pub const POSTGRES: ProviderVocabulary = ProviderVocabulary {
    provider: "PostgreSQL",
    namespace: "Npgsql:",
    supported: &[
        INDEX_METHOD,
        INDEX_OPERATORS,
        INDEX_INCLUDE,
        INDEX_SORT_ORDER,
        INDEX_NULL_SORT_ORDER,
        CREATED_CONCURRENTLY,
        NULLS_DISTINCT,
    ],
};

/// PostgreSQL index options for composite declarations and property markers.
pub trait PostgresIndexExt: WithProviderOptions {
    fn use_gin(self) -> Self {
        self.with_option(INDEX_METHOD, "gin")
    }

    fn use_gist(self) -> Self {
        self.with_option(INDEX_METHOD, "gist")
    }

    fn use_brin(self) -> Self {
        self.with_option(INDEX_METHOD, "brin")
    }

    fn use_hash(self) -> Self {
        self.with_option(INDEX_METHOD, "hash")
    }

    fn use_sp_gist(self) -> Self {
        self.with_option(INDEX_METHOD, "spgist")
    }

    /// Operator classes, one per indexed column.
    fn operators<I, S>(self, operators: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_option(INDEX_OPERATORS, strings(operators))
    }

    /// Non-key columns stored in the index (`INCLUDE`).
    fn include_properties<I, S>(self, properties: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.with_option(INDEX_INCLUDE, strings(properties))
    }

    fn created_concurrently(self, concurrent: bool) -> Self {
        self.with_option(CREATED_CONCURRENTLY, concurrent)
    }

    fn nulls_distinct(self, distinct: bool) -> Self {
        self.with_option(NULLS_DISTINCT, distinct)
    }
}

impl<T: WithProviderOptions> PostgresIndexExt for T {}

fn strings<I, S>(values: I) -> Vec<serde_json::Value>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values
        .into_iter()
        .map(|value| serde_json::Value::String(value.into()))
        .collect()
}
