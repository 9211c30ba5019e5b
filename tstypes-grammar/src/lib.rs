//! # tstypes Grammar
//!
//! Access to the vocabulary of a compiled tree-sitter grammar.
//!
//! This crate provides:
//! - The [`GrammarTables`] view over node-kind and field-name tables
//! - An in-memory [`StaticGrammar`] and an implementation for
//!   `tree_sitter::Language`
//! - Asynchronous loading of `.wasm` grammar modules (feature `wasm`)
//! - Language-name inference from grammar file names

pub mod error;
pub mod lang_name;
#[cfg(feature = "wasm")]
pub mod loader;
pub mod tables;

pub use error::{LoadError, LookupError};
pub use lang_name::{grammar_symbol_name, infer_language_name, resolve_language_name};
#[cfg(feature = "wasm")]
pub use loader::{LoadedGrammar, load_grammar};
pub use tables::{GrammarTables, StaticGrammar};
