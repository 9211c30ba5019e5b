//! Ordered, deduplicated symbol tables.
//!
//! A symbol table is collected from one of a grammar's enumerable tables by
//! scanning ids `0..size` in order. Each name is rendered as a literal and kept
//! only on its first occurrence, so the table preserves first-seen order and
//! never holds two identical literals.

use crate::error::Error;
use crate::literal::render_literal;
use std::collections::HashMap;

/// Text substituted for a node kind id the grammar has no name for.
pub const NODE_KIND_FALLBACK: &str = "";

/// Text substituted for a field id the grammar has no name for.
pub const FIELD_NAME_FALLBACK: &str = "null";

/// Ordered sequence of distinct string literals.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SymbolTable {
    literals: Vec<String>,
    positions: HashMap<String, usize>,
}

impl SymbolTable {
    /// Creates an empty symbol table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a symbol table by scanning ids `0..size`.
    ///
    /// # Arguments
    /// * `size` - Number of ids in the grammar table
    /// * `lookup` - Resolves an id to its name, `None` when the id is unnamed
    /// * `fallback` - Text used for unnamed ids
    ///
    /// # Errors
    /// The first error returned by `lookup`, or a literal rendering error,
    /// aborts the build and is returned as is.
    pub fn build<S, E, F>(size: usize, mut lookup: F, fallback: &str) -> Result<Self, E>
    where
        S: AsRef<str>,
        E: From<Error>,
        F: FnMut(usize) -> Result<Option<S>, E>,
    {
        let mut table = Self::new();
        let mut dropped = 0usize;

        for id in 0..size {
            let name = lookup(id)?;
            let name = name.as_ref().map_or(fallback, |name| name.as_ref());
            let literal = render_literal(name)?;
            if table.push(literal) {
                continue;
            }
            dropped += 1;
            tracing::trace!("dropping duplicate name {:?} at id {}", name, id);
        }

        tracing::debug!(
            "built symbol table: scanned {} ids, kept {}, dropped {}",
            size,
            table.len(),
            dropped
        );
        Ok(table)
    }

    /// Builds a symbol table from names that are already known.
    ///
    /// # Errors
    /// Returns `Error::Literal` if a name cannot be rendered.
    pub fn from_names<I, S>(names: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<S> = names.into_iter().collect();
        Self::build(
            names.len(),
            |id| Ok::<_, Error>(names.get(id).map(|name| name.as_ref())),
            "",
        )
    }

    /// Appends `literal` unless an identical one is already present.
    ///
    /// Returns true if the literal was added.
    fn push(&mut self, literal: String) -> bool {
        if self.positions.contains_key(&literal) {
            return false;
        }
        self.positions.insert(literal.clone(), self.literals.len());
        self.literals.push(literal);
        true
    }

    /// Returns the number of distinct literals.
    #[must_use]
    pub fn len(&self) -> usize {
        self.literals.len()
    }

    /// Returns true if the table holds no literals.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Returns the literals in table order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.literals
    }

    /// Iterates over the literals in table order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.literals.iter()
    }

    /// Returns the zero-based ordinal of a rendered literal.
    #[must_use]
    pub fn position(&self, literal: &str) -> Option<usize> {
        self.positions.get(literal).copied()
    }

    /// Returns true if the rendered literal is in the table.
    #[must_use]
    pub fn contains(&self, literal: &str) -> bool {
        self.positions.contains_key(literal)
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
