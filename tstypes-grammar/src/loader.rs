//! Loading of compiled `.wasm` grammars.
//!
//! The file is read asynchronously, then the module is compiled and
//! instantiated through a tree-sitter WebAssembly store on the blocking pool.
//! The resulting language is independent of the store that produced it, so
//! the store is dropped once loading finishes.

use crate::error::{LoadError, LookupError};
use crate::lang_name::grammar_symbol_name;
use crate::tables::GrammarTables;
use std::path::{Path, PathBuf};
use tree_sitter::wasmtime::{Engine, Module};
use tree_sitter::{Language, WasmStore};

const EXPORT_PREFIX: &str = "tree_sitter_";
const SCANNER_MARKER: &str = "external_scanner";

/// A grammar loaded from a WebAssembly module.
#[derive(Debug, Clone)]
pub struct LoadedGrammar {
    name: String,
    path: PathBuf,
    language: Language,
}

impl LoadedGrammar {
    /// Returns the name the module exports its language under.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the path the grammar was loaded from.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the loaded language.
    #[must_use]
    pub fn language(&self) -> &Language {
        &self.language
    }
}

impl GrammarTables for LoadedGrammar {
    fn node_kind_count(&self) -> usize {
        GrammarTables::node_kind_count(&self.language)
    }

    fn node_kind_for_id(&self, id: usize) -> Result<Option<&str>, LookupError> {
        GrammarTables::node_kind_for_id(&self.language, id)
    }

    fn field_count(&self) -> usize {
        GrammarTables::field_count(&self.language)
    }

    fn field_name_for_id(&self, id: usize) -> Result<Option<&str>, LookupError> {
        GrammarTables::field_name_for_id(&self.language, id)
    }
}

/// Loads a compiled grammar from a `.wasm` file.
///
/// The language is looked up under the module's own `tree_sitter_<name>`
/// export, so the file may be named freely. The file name is only consulted
/// when the module has no such export.
///
/// # Arguments
/// * `path` - Path to the grammar module, e.g. `tree-sitter-fish.wasm`
///
/// # Errors
/// Returns `LoadError` if the file cannot be read, no language name can be
/// found, or the module is not a loadable grammar.
pub async fn load_grammar(path: impl AsRef<Path>) -> Result<LoadedGrammar, LoadError> {
    let path = path.as_ref().to_path_buf();

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|source| LoadError::Io {
            path: path.clone(),
            source,
        })?;
    tracing::debug!("read {} bytes from {}", bytes.len(), path.display());

    let (name, language) = {
        let path = path.clone();
        tokio::task::spawn_blocking(move || instantiate(&path, &bytes)).await??
    };
    tracing::info!(
        "loaded grammar '{}' from {}: {} node kinds, {} fields",
        name,
        path.display(),
        language.node_kind_count(),
        language.field_count()
    );

    Ok(LoadedGrammar {
        name,
        path,
        language,
    })
}

/// Compiles and instantiates a grammar module in a fresh store.
fn instantiate(path: &Path, bytes: &[u8]) -> Result<(String, Language), LoadError> {
    let engine = Engine::default();
    let name = resolve_export_name(&engine, path, bytes)?;
    let mut store = WasmStore::new(&engine).map_err(|e| LoadError::wasm(&name, e))?;
    let language = store
        .load_language(&name, bytes)
        .map_err(|e| LoadError::wasm(&name, e))?;
    Ok((name, language))
}

/// Determines the name the module exports its language under.
fn resolve_export_name(engine: &Engine, path: &Path, bytes: &[u8]) -> Result<String, LoadError> {
    let fallback = || grammar_symbol_name(path);
    let module = Module::new(engine, bytes).map_err(|e| {
        LoadError::wasm(fallback().unwrap_or_else(|| path.display().to_string()), e)
    })?;

    if let Some(name) = exported_language_name(&module) {
        return Ok(name);
    }
    tracing::warn!(
        "no {}* export in {}, falling back to the file name",
        EXPORT_PREFIX,
        path.display()
    );
    fallback().ok_or_else(|| LoadError::InvalidPath {
        path: path.to_path_buf(),
    })
}

/// Finds the language export of a grammar module.
///
/// Returns the text after `tree_sitter_` of the first export that is not
/// part of an external scanner.
fn exported_language_name(module: &Module) -> Option<String> {
    module.exports().find_map(|export| {
        let name = export.name().strip_prefix(EXPORT_PREFIX)?;
        (!name.is_empty() && !name.contains(SCANNER_MARKER)).then(|| name.to_string())
    })
}
