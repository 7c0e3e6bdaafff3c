use nestidx_core::DeclarationError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error(
        "could not resolve property path '{path}' for composite index on entity '{entity}' (declared paths: {declared})"
    )]
    UnresolvablePath {
        entity: String,
        path: String,
        declared: String,
    },
    #[error("invalid composite index declaration on entity '{entity}': {source}")]
    InvalidDeclaration {
        entity: String,
        source: DeclarationError,
    },
    #[error(
        "conflicting values for provider option '{key}' on index '{index}' declared more than once"
    )]
    ConflictingProviderOption { index: String, key: String },
    #[error(
        "unrecognized {provider} index option '{key}' on index '{index}'. Supported options: {supported}."
    )]
    UnrecognizedProviderOption {
        provider: String,
        key: String,
        index: String,
        supported: String,
    },
}
