//! Declaration naming.

use crate::symbols::{FIELD_NAME_FALLBACK, NODE_KIND_FALLBACK};
use std::fmt;

/// Vocabulary category a symbol table was collected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Node kinds (`nodeTypeCount` / `nodeTypeForId`).
    Node,
    /// Field names (`fieldCount` / `fieldNameForId`).
    FieldName,
}

impl Category {
    /// Both categories in emission order.
    pub const ALL: [Self; 2] = [Self::Node, Self::FieldName];

    /// Returns the name fragment used in declaration names.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Node => "Node",
            Self::FieldName => "FieldName",
        }
    }

    /// Returns the text substituted for unnamed ids of this category.
    ///
    /// Node kinds fall back to the empty string and field names to `"null"`.
    #[must_use]
    pub const fn fallback(&self) -> &'static str {
        match self {
            Self::Node => NODE_KIND_FALLBACK,
            Self::FieldName => FIELD_NAME_FALLBACK,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifiers of the declarations emitted for one category.
///
/// The type union and the enum namespace share `type_name`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationNames {
    /// Name of the type union.
    pub type_name: String,
    /// Name of the enum namespace, identical to `type_name`.
    pub enum_name: String,
    /// Name of the set constant.
    pub set_name: String,
    /// Name of the map constant.
    pub map_name: String,
}

impl DeclarationNames {
    /// Derives the declaration names for `category` under `prefix`.
    #[must_use]
    pub fn new(prefix: &str, category: Category) -> Self {
        let type_name = format!("{}{}Type", prefix, category.as_str());
        Self {
            enum_name: type_name.clone(),
            set_name: format!("{}Set", type_name),
            map_name: format!("{}Map", type_name),
            type_name,
        }
    }
}

/// Formats a language name as a declaration prefix.
///
/// The first character is upper-cased and the rest lower-cased, so `fish`,
/// `FISH` and `Fish` all give `Fish`.
#[must_use]
pub fn format_language_name(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.flat_map(char::to_lowercase))
            .collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_names() {
        let names = DeclarationNames::new("Fish", Category::Node);
        assert_eq!(names.type_name, "FishNodeType");
        assert_eq!(names.enum_name, "FishNodeType");
        assert_eq!(names.set_name, "FishNodeTypeSet");
        assert_eq!(names.map_name, "FishNodeTypeMap");
    }

    #[test]
    fn test_field_names() {
        let names = DeclarationNames::new("Rust", Category::FieldName);
        assert_eq!(names.type_name, "RustFieldNameType");
        assert_eq!(names.set_name, "RustFieldNameTypeSet");
        assert_eq!(names.map_name, "RustFieldNameTypeMap");
    }

    #[test]
    fn test_enum_shares_type_name() {
        for category in Category::ALL {
            let names = DeclarationNames::new("X", category);
            assert_eq!(names.type_name, names.enum_name);
        }
    }

    #[test]
    fn test_empty_prefix() {
        let names = DeclarationNames::new("", Category::Node);
        assert_eq!(names.type_name, "NodeType");
    }

    #[test]
    fn test_category_fallbacks() {
        assert_eq!(Category::Node.fallback(), "");
        assert_eq!(Category::FieldName.fallback(), "null");
    }

    #[test]
    fn test_category_display() {
        assert_eq!(Category::Node.to_string(), "Node");
        assert_eq!(Category::FieldName.to_string(), "FieldName");
    }

    #[test]
    fn test_format_language_name() {
        assert_eq!(format_language_name("fish"), "Fish");
        assert_eq!(format_language_name("FISH"), "Fish");
        assert_eq!(format_language_name("typeScript"), "Typescript");
        assert_eq!(format_language_name("c_sharp"), "C_sharp");
        assert_eq!(format_language_name(""), "");
    }
}
