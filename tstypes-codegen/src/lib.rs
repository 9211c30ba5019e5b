//! # tstypes Codegen
//!
//! TypeScript declarations from a tree-sitter grammar's vocabulary.
//!
//! This crate provides:
//! - Type unions, enum namespaces, sets and ordinal maps per category
//! - Representation selection
//! - Run configuration and output sinks
//! - End-to-end runs from a `.wasm` grammar (feature `wasm`)

pub mod config;
pub mod emitter;
pub mod error;
pub mod generator;
pub mod options;

pub use config::{OutputSink, RunConfig, RunConfigBuilder};
pub use emitter::DeclarationEmitter;
pub use error::{CodegenError, ConfigError};
pub use generator::{Generator, HEADER, build_symbol_table, run};
pub use options::{Representation, Selection};

use tstypes_grammar::GrammarTables;

/// Generates declarations for an in-memory grammar.
///
/// # Arguments
/// * `grammar` - Grammar tables, e.g. a `tree_sitter::Language`
/// * `prefix` - Declaration name prefix
/// * `selection` - Representations to emit
///
/// # Errors
/// Returns `CodegenError` if a table lookup fails.
pub fn generate_from_grammar<G>(
    grammar: &G,
    prefix: &str,
    selection: Selection,
) -> Result<String, CodegenError>
where
    G: GrammarTables + ?Sized,
{
    Ok(Generator::new(prefix, selection).generate(grammar)?)
}

/// Generates declarations from a `.wasm` grammar file.
///
/// # Arguments
/// * `path` - Path to the compiled grammar
/// * `prefix` - Declaration name prefix
/// * `selection` - Representations to emit
///
/// # Errors
/// Returns `CodegenError` if loading or a table lookup fails.
#[cfg(feature = "wasm")]
pub async fn generate_from_file(
    path: &std::path::Path,
    prefix: &str,
    selection: Selection,
) -> Result<String, CodegenError> {
    let grammar = tstypes_grammar::load_grammar(path).await?;
    generate_from_grammar(&grammar, prefix, selection)
}
