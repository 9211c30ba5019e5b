//! TypeScript declaration emission.
//!
//! Each selected representation of a symbol table becomes one entry in the
//! output buffer. Entries are joined with newlines by the generator.

use crate::options::{Representation, Selection};
use tstypes_core::{Category, DeclarationNames, SymbolTable};

/// Emitter for the declarations of one run.
#[derive(Debug, Clone, Copy)]
pub struct DeclarationEmitter<'a> {
    prefix: &'a str,
    selection: Selection,
}

impl<'a> DeclarationEmitter<'a> {
    /// Creates a new declaration emitter.
    #[must_use]
    pub fn new(prefix: &'a str, selection: Selection) -> Self {
        Self { prefix, selection }
    }

    /// Appends the selected declarations for `symbols` to `buffer`.
    ///
    /// Representations are emitted in the order Type, Enum, Set, Map. An
    /// empty symbol table contributes nothing.
    pub fn emit(&self, category: Category, symbols: &SymbolTable, buffer: &mut Vec<String>) {
        if symbols.is_empty() {
            tracing::debug!("{} table is empty, nothing to emit", category);
            return;
        }

        let names = DeclarationNames::new(self.prefix, category);
        for repr in self.selection.enabled() {
            buffer.push(self.render(repr, &names, symbols));
        }
    }

    /// Renders a single representation.
    #[must_use]
    pub fn render(
        &self,
        repr: Representation,
        names: &DeclarationNames,
        symbols: &SymbolTable,
    ) -> String {
        match repr {
            Representation::Type => generate_type(names, symbols),
            Representation::Enum => generate_enum(names, symbols, self.element_type(names)),
            Representation::Set => generate_set(names, symbols, self.element_type(names)),
            Representation::Map => generate_map(names, symbols, self.element_type(names)),
        }
    }

    /// Type the set, map and enum helpers are parameterized with.
    ///
    /// Without the type union there is no named literal type to refer to, so
    /// the helpers fall back to `string`.
    fn element_type<'n>(&self, names: &'n DeclarationNames) -> &'n str {
        if self.selection.is_enabled(Representation::Type) {
            &names.type_name
        } else {
            "string"
        }
    }
}

/// Generates the string-literal type union.
fn generate_type(names: &DeclarationNames, symbols: &SymbolTable) -> String {
    let alternatives: Vec<&str> = symbols.iter().map(String::as_str).collect();
    format!(
        "export type {} =\n\t{}",
        names.type_name,
        alternatives.join(" |\n\t")
    )
}

/// Generates the enum namespace sharing the type union's name.
fn generate_enum(names: &DeclarationNames, symbols: &SymbolTable, element: &str) -> String {
    let mut output = String::new();
    let members: Vec<String> = symbols
        .iter()
        .enumerate()
        .map(|(ordinal, literal)| format!("\t{} = {}", literal, ordinal))
        .collect();

    output.push_str(&format!("export namespace {} {{\n", names.enum_name));

    output.push_str("  export enum Keys {\n");
    output.push_str(&members.join(",\n"));
    output.push_str("\n  }\n");

    output.push_str(&format!("  export function getKeys(): {}[] {{\n", element));
    output.push_str(&format!(
        "\treturn Object.keys(Keys).filter(k => typeof Keys[k as keyof typeof Keys] === 'number') as {}[]\n",
        element
    ));
    output.push_str("  }\n");

    output.push_str(&format!(
        "  export function hasKeys(...keys: {}[]): boolean {{\n",
        element
    ));
    output.push_str("\tconst allKeys = getKeys()\n");
    output.push_str("\treturn keys.every(k => allKeys.includes(k))\n");
    output.push_str("  }\n");

    output.push('}');
    output
}

/// Generates the `Set` constant.
fn generate_set(names: &DeclarationNames, symbols: &SymbolTable, element: &str) -> String {
    let items: Vec<&str> = symbols.iter().map(String::as_str).collect();
    format!(
        "export const {} = new Set<{}>([ {} ])",
        names.set_name,
        element,
        items.join(", ")
    )
}

/// Generates the literal-to-ordinal `Map` constant.
fn generate_map(names: &DeclarationNames, symbols: &SymbolTable, element: &str) -> String {
    let pairs: Vec<String> = symbols
        .iter()
        .enumerate()
        .map(|(ordinal, literal)| format!("[{}, {}]", literal, ordinal))
        .collect();
    format!(
        "export const {} = new Map<{}, number>([ {} ])",
        names.map_name,
        element,
        pairs.join(", ")
    )
}
