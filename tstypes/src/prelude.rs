//! Prelude module for convenient imports.
//!
//! ```ignore
//! use tstypes::prelude::*;
//! ```

// Core types
pub use tstypes_core::{Category, DeclarationNames, SymbolTable, render_literal};

// Grammar access
pub use tstypes_grammar::{GrammarTables, LoadError, LookupError, StaticGrammar};
#[cfg(feature = "wasm")]
pub use tstypes_grammar::{LoadedGrammar, load_grammar};

// Generation
pub use tstypes_codegen::{
    CodegenError, ConfigError, DeclarationEmitter, Generator, OutputSink, Representation,
    RunConfig, RunConfigBuilder, Selection, generate_from_grammar, run,
};
#[cfg(feature = "wasm")]
pub use tstypes_codegen::generate_from_file;
