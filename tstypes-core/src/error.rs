//! Error types for tstypes core operations.

use thiserror::Error;

/// Core error type for tstypes operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A name could not be rendered as a string literal.
    #[error("cannot render '{name}' as a string literal: {source}")]
    Literal {
        /// The name being rendered.
        name: String,
        /// Underlying serializer error.
        #[source]
        source: serde_json::Error,
    },
}

/// Result type alias for tstypes core operations.
pub type Result<T> = std::result::Result<T, Error>;
