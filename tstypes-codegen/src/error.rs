//! Error types for code generation.

use std::path::PathBuf;
use thiserror::Error;

/// Error raised while resolving a run configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// No grammar path was supplied.
    #[error("no grammar path given")]
    MissingGrammarPath,

    /// No declaration prefix could be resolved.
    #[error("invalid lang name: none given and none inferable from '{}'", path.display())]
    UnresolvedLanguage {
        /// Grammar path inference was attempted on.
        path: PathBuf,
    },
}

/// Error type for code generation operations.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// Run configuration error.
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Grammar loading error.
    #[error("load error: {0}")]
    Load(#[from] tstypes_grammar::LoadError),

    /// Grammar table lookup error.
    #[error("lookup error: {0}")]
    Lookup(#[from] tstypes_grammar::LookupError),

    /// IO error while writing output.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Loading requires a build with WebAssembly support.
    #[error("grammar loading is not available: built without the `wasm` feature")]
    LoaderUnavailable,
}
