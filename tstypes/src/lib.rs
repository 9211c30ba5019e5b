//! # tstypes
//!
//! TypeScript declarations for the vocabulary of tree-sitter grammars.
//!
//! Given a compiled grammar, tstypes collects the node-kind and field-name
//! tables, deduplicates them, and emits string-literal type unions, enum
//! namespaces, sets and ordinal maps for both.
//!
//! ## Quick Start
//!
//! ```ignore
//! use tstypes::prelude::*;
//!
//! let config = RunConfig::builder()
//!     .grammar_path("tree-sitter-fish.wasm")
//!     .generate("Type,Set")
//!     .build()?;
//!
//! run(&config).await?;
//! ```
//!
//! ## Crate Organization
//!
//! - [`core`] - Literal rendering, symbol tables, declaration names
//! - [`grammar`] - Grammar tables and `.wasm` loading
//! - [`codegen`] - Declaration emission and run orchestration
//! - [`cli`] - Command-line surface of `tree-sitter-types-builder`

pub mod cli;
pub mod prelude;

/// Literal rendering, symbol tables and declaration names.
pub mod core {
    pub use tstypes_core::*;
}

/// Grammar tables and loading.
pub mod grammar {
    pub use tstypes_grammar::*;
}

/// Declaration emission and run orchestration.
pub mod codegen {
    pub use tstypes_codegen::*;
}

// Re-export commonly used items at the crate root
pub use tstypes_codegen::{
    CodegenError, ConfigError, Generator, OutputSink, Representation, RunConfig, Selection, run,
};
pub use tstypes_core::{Category, SymbolTable};
pub use tstypes_grammar::{GrammarTables, StaticGrammar};
