pub mod diff;
pub mod error;
pub mod extract;
pub mod plan;
pub mod provider;
pub mod reconcile;
pub mod resolve;
pub mod tables;

pub use diff::{append_index_operations, dropped_tables};
pub use error::PlannerError;
pub use extract::{ExtractedIndexes, extract_descriptors};
pub use plan::plan_migration;
pub use provider::{POSTGRES, PostgresIndexExt, ProviderVocabulary, validate_provider_options};
pub use reconcile::{IndexChanges, TableKey, reconcile};
pub use resolve::resolve_column;
pub use tables::table_operations;
