//! String-literal rendering.
//!
//! Names coming out of a grammar are arbitrary text (`"\""`, `"\n"`, `"::"`),
//! so every one of them is emitted as a quoted literal. JSON string syntax is a
//! subset of TypeScript's, which lets `serde_json` do the escaping.

use crate::error::{Error, Result};

/// Renders `name` as a double-quoted string literal.
///
/// # Errors
/// Returns `Error::Literal` if the serializer rejects the input.
pub fn render_literal(name: &str) -> Result<String> {
    serde_json::to_string(name).map_err(|source| Error::Literal {
        name: name.to_string(),
        source,
    })
}
