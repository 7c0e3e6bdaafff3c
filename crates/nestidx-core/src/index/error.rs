use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeclarationError {
    #[error(
        "composite index requires at least two properties, got {0}; use a single-property index instead"
    )]
    TooFewPaths(usize),
    #[error("invalid property path '{0}': segments must be non-empty")]
    InvalidPath(String),
    #[error("failed to encode index declarations: {0}")]
    Encode(#[from] serde_json::Error),
    #[error("existing composite index annotation cannot be decoded: {0}")]
    Malformed(#[source] serde_json::Error),
}
