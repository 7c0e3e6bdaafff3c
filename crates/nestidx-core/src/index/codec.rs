//! Compact text form of a declaration list, stored in the single composite
//! index annotation of an entity.
//!
//! Absent values (`filter`, `name`, empty options, non-unique) are omitted, so a
//! declaration that never set a field and one that set it to empty encode the
//! same way.

use tracing::warn;

use crate::index::{declaration::IndexDeclaration, error::DeclarationError};

pub fn encode(declarations: &[IndexDeclaration]) -> Result<String, DeclarationError> {
    Ok(serde_json::to_string(declarations)?)
}

/// Decode an annotation value. Empty, `null`, or unparseable text yields an empty
/// list.
pub fn decode(text: &str) -> Vec<IndexDeclaration> {
    try_decode(text).unwrap_or_else(|error| {
        warn!(%error, "ignoring undecodable composite index annotation");
        Vec::new()
    })
}

/// Strict variant of [`decode`]: empty and `null` text are still an empty list,
/// but unparseable text is an error.
pub fn try_decode(text: &str) -> Result<Vec<IndexDeclaration>, DeclarationError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(Vec::new());
    }

    serde_json::from_str::<Option<Vec<IndexDeclaration>>>(text)
        .map(Option::unwrap_or_default)
        .map_err(DeclarationError::Malformed)
}
