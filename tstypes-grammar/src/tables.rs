//! Enumerable vocabulary tables of a grammar.

use crate::error::LookupError;
use tstypes_core::Category;

/// Read access to the node-kind and field-name tables of a grammar.
///
/// Ids range over `0..count`. A lookup returns `Ok(None)` for an id that
/// exists but carries no name.
pub trait GrammarTables {
    /// Number of ids in the node-kind table.
    fn node_kind_count(&self) -> usize;

    /// Resolves a node-kind id to its name.
    ///
    /// # Errors
    /// Returns `LookupError` if the id cannot be resolved.
    fn node_kind_for_id(&self, id: usize) -> Result<Option<&str>, LookupError>;

    /// Number of ids in the field-name table.
    fn field_count(&self) -> usize;

    /// Resolves a field id to its name.
    ///
    /// # Errors
    /// Returns `LookupError` if the id cannot be resolved.
    fn field_name_for_id(&self, id: usize) -> Result<Option<&str>, LookupError>;

    /// Returns the table size for `category`.
    fn count(&self, category: Category) -> usize {
        match category {
            Category::Node => self.node_kind_count(),
            Category::FieldName => self.field_count(),
        }
    }

    /// Resolves an id in the table for `category`.
    ///
    /// # Errors
    /// Returns `LookupError` if the id cannot be resolved.
    fn name_for_id(&self, category: Category, id: usize) -> Result<Option<&str>, LookupError> {
        match category {
            Category::Node => self.node_kind_for_id(id),
            Category::FieldName => self.field_name_for_id(id),
        }
    }
}

impl GrammarTables for tree_sitter::Language {
    fn node_kind_count(&self) -> usize {
        tree_sitter::Language::node_kind_count(self)
    }

    fn node_kind_for_id(&self, id: usize) -> Result<Option<&str>, LookupError> {
        let raw = u16::try_from(id).map_err(|_| {
            LookupError::out_of_range(Category::Node, id, GrammarTables::node_kind_count(self))
        })?;
        Ok(tree_sitter::Language::node_kind_for_id(self, raw))
    }

    fn field_count(&self) -> usize {
        tree_sitter::Language::field_count(self)
    }

    fn field_name_for_id(&self, id: usize) -> Result<Option<&str>, LookupError> {
        let raw = u16::try_from(id).map_err(|_| {
            LookupError::out_of_range(Category::FieldName, id, GrammarTables::field_count(self))
        })?;
        Ok(tree_sitter::Language::field_name_for_id(self, raw))
    }
}

/// Grammar tables held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticGrammar {
    node_kinds: Vec<Option<String>>,
    fields: Vec<Option<String>>,
}

impl StaticGrammar {
    /// Creates tables from per-id entries, `None` marking an unnamed id.
    #[must_use]
    pub fn new<N, F, S>(node_kinds: N, fields: F) -> Self
    where
        N: IntoIterator<Item = Option<S>>,
        F: IntoIterator<Item = Option<S>>,
        S: Into<String>,
    {
        Self {
            node_kinds: node_kinds.into_iter().map(|n| n.map(Into::into)).collect(),
            fields: fields.into_iter().map(|n| n.map(Into::into)).collect(),
        }
    }

    /// Creates tables in which every id is named.
    #[must_use]
    pub fn named(node_kinds: &[&str], fields: &[&str]) -> Self {
        Self::new(
            node_kinds.iter().copied().map(Some),
            fields.iter().copied().map(Some),
        )
    }

    fn lookup(
        table: &[Option<String>],
        category: Category,
        id: usize,
    ) -> Result<Option<&str>, LookupError> {
        table
            .get(id)
            .map(Option::as_deref)
            .ok_or_else(|| LookupError::out_of_range(category, id, table.len()))
    }
}

impl GrammarTables for StaticGrammar {
    fn node_kind_count(&self) -> usize {
        self.node_kinds.len()
    }

    fn node_kind_for_id(&self, id: usize) -> Result<Option<&str>, LookupError> {
        Self::lookup(&self.node_kinds, Category::Node, id)
    }

    fn field_count(&self) -> usize {
        self.fields.len()
    }

    fn field_name_for_id(&self, id: usize) -> Result<Option<&str>, LookupError> {
        Self::lookup(&self.fields, Category::FieldName, id)
    }
}
