//! Error types for grammar loading and table lookups.

use std::path::PathBuf;
use thiserror::Error;
use tstypes_core::Category;

/// Error raised when a grammar table cannot resolve an id.
#[derive(Debug, Error)]
pub enum LookupError {
    /// The id is outside the range the grammar can address.
    #[error("{category} id {id} out of range (table size {count})")]
    IdOutOfRange {
        /// Table the lookup was made against.
        category: Category,
        /// Requested id.
        id: usize,
        /// Number of ids in the table.
        count: usize,
    },

    /// Rendering the resolved name failed.
    #[error(transparent)]
    Core(#[from] tstypes_core::Error),
}

/// Error raised while loading a grammar artifact.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The grammar file could not be read.
    #[error("cannot read grammar '{}': {source}", path.display())]
    Io {
        /// Path of the grammar file.
        path: PathBuf,
        /// Underlying IO error.
        #[source]
        source: std::io::Error,
    },

    /// The module exports no language and its path yields no name either.
    #[error("cannot derive a grammar name from '{}'", path.display())]
    InvalidPath {
        /// Offending path.
        path: PathBuf,
    },

    /// The WebAssembly module could not be instantiated as a grammar.
    #[error("cannot load grammar '{name}': {message}")]
    Wasm {
        /// Grammar symbol name.
        name: String,
        /// Error reported by the WebAssembly engine or store.
        message: String,
    },

    /// The background loading task failed.
    #[error("grammar loading task failed: {0}")]
    Join(#[from] tokio::task::JoinError),
}

impl LookupError {
    /// Creates an out-of-range error.
    pub fn out_of_range(category: Category, id: usize, count: usize) -> Self {
        Self::IdOutOfRange {
            category,
            id,
            count,
        }
    }
}

impl LoadError {
    /// Creates a WebAssembly error for grammar `name`.
    pub fn wasm(name: impl Into<String>, message: impl std::fmt::Display) -> Self {
        Self::Wasm {
            name: name.into(),
            message: message.to_string(),
        }
    }
}
