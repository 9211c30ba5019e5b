//! Language names derived from grammar file names.
//!
//! Compiled grammars are conventionally named `tree-sitter-<lang>.wasm`.

use std::path::Path;
use tstypes_core::format_language_name;

const WASM_SUFFIX: &str = ".wasm";
const GRAMMAR_PREFIX: &str = "tree-sitter-";

/// Infers the declaration prefix from a grammar path.
///
/// Only file names ending in `.wasm` qualify. The last `-`-separated segment
/// of the remaining name is formatted with [`format_language_name`], so
/// `tree-sitter-fish.wasm` gives `Fish`.
#[must_use]
pub fn infer_language_name(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    let Some(stem) = file_name.strip_suffix(WASM_SUFFIX) else {
        tracing::warn!("'{}' is not a .wasm file name", file_name);
        return None;
    };
    let lang = stem.rsplit('-').next().unwrap_or(stem);
    let name = format_language_name(lang);
    (!name.is_empty()).then_some(name)
}

/// Resolves the declaration prefix for a run.
///
/// A non-empty `explicit` name wins and is formatted; otherwise the name is
/// inferred from `path`.
#[must_use]
pub fn resolve_language_name(explicit: Option<&str>, path: &Path) -> Option<String> {
    match explicit.filter(|name| !name.is_empty()) {
        Some(name) => Some(format_language_name(name)),
        None => infer_language_name(path),
    }
}

/// Returns the name under which a grammar module exports its language.
///
/// This is the text after the last `tree-sitter-` in the file stem with `-`
/// mapped to `_`, e.g. `tree-sitter-c-sharp.wasm` exports `c_sharp`.
#[must_use]
pub fn grammar_symbol_name(path: &Path) -> Option<String> {
    let file_name = path.file_name()?.to_str()?;
    let stem = file_name.strip_suffix(WASM_SUFFIX).unwrap_or(file_name);
    let name = stem
        .rsplit_once(GRAMMAR_PREFIX)
        .map_or(stem, |(_, name)| name)
        .replace('-', "_");
    (!name.is_empty()).then_some(name)
}
