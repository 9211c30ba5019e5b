//! Generation of the complete declaration file.

use crate::config::RunConfig;
use crate::emitter::DeclarationEmitter;
use crate::error::CodegenError;
use crate::options::Selection;
use tstypes_core::{Category, SymbolTable};
use tstypes_grammar::{GrammarTables, LookupError};

/// Comment block every generated file starts with.
pub const HEADER: [&str; 4] = [
    "/**",
    " * AUTO GENERATED FILE",
    " *     tree-sitter-types-builder",
    " */",
];

/// Generator for the declarations of one grammar.
#[derive(Debug, Clone)]
pub struct Generator {
    prefix: String,
    selection: Selection,
}

impl Generator {
    /// Creates a new generator.
    #[must_use]
    pub fn new(prefix: impl Into<String>, selection: Selection) -> Self {
        Self {
            prefix: prefix.into(),
            selection,
        }
    }

    /// Creates a generator from a run configuration.
    #[must_use]
    pub fn from_config(config: &RunConfig) -> Self {
        Self::new(config.prefix(), config.selection())
    }

    /// Returns the declaration name prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the selected representations.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }

    /// Generates the declarations for a grammar.
    ///
    /// # Errors
    /// Returns `LookupError` if any table lookup fails; nothing is produced
    /// in that case.
    pub fn generate<G>(&self, grammar: &G) -> Result<String, LookupError>
    where
        G: GrammarTables + ?Sized,
    {
        let nodes = build_symbol_table(grammar, Category::Node)?;
        let fields = build_symbol_table(grammar, Category::FieldName)?;
        Ok(self.generate_tables(&nodes, &fields))
    }

    /// Generates the declarations for already collected symbol tables.
    #[must_use]
    pub fn generate_tables(&self, nodes: &SymbolTable, fields: &SymbolTable) -> String {
        let mut buffer: Vec<String> = HEADER.iter().map(|line| line.to_string()).collect();
        let emitter = DeclarationEmitter::new(&self.prefix, self.selection);

        emitter.emit(Category::Node, nodes, &mut buffer);
        emitter.emit(Category::FieldName, fields, &mut buffer);

        tracing::debug!(
            "generated {} declarations with prefix '{}' ({})",
            buffer.len() - HEADER.len(),
            self.prefix,
            self.selection
        );
        buffer.join("\n")
    }
}

/// Collects the symbol table for one category of a grammar.
///
/// # Errors
/// Returns `LookupError` if a lookup fails.
pub fn build_symbol_table<G>(grammar: &G, category: Category) -> Result<SymbolTable, LookupError>
where
    G: GrammarTables + ?Sized,
{
    SymbolTable::build(
        grammar.count(category),
        |id| grammar.name_for_id(category, id),
        category.fallback(),
    )
}

/// Executes a configured run: load, generate, then write to the sink.
///
/// The sink is written exactly once, and only if every step succeeded.
///
/// # Errors
/// Returns `CodegenError` if loading, a lookup, or writing fails.
#[cfg(feature = "wasm")]
pub async fn run(config: &RunConfig) -> Result<(), CodegenError> {
    tracing::info!(
        "generating {} declarations for {}",
        config.prefix(),
        config.grammar_path().display()
    );
    let grammar = tstypes_grammar::load_grammar(config.grammar_path()).await?;
    let output = Generator::from_config(config).generate(&grammar)?;
    config.sink().write(&output)?;
    Ok(())
}

/// Executes a configured run.
///
/// # Errors
/// Always returns `CodegenError::LoaderUnavailable`; loading grammars needs
/// the `wasm` feature.
#[cfg(not(feature = "wasm"))]
pub async fn run(config: &RunConfig) -> Result<(), CodegenError> {
    tracing::error!(
        "cannot load {}: built without the `wasm` feature",
        config.grammar_path().display()
    );
    Err(CodegenError::LoaderUnavailable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::Representation;
    use tstypes_grammar::StaticGrammar;

    fn fish_grammar() -> StaticGrammar {
        StaticGrammar::new(
            [Some("end"), Some("if"), Some("if"), Some("else"), None],
            [None, Some("name"), Some("body")],
        )
    }

    struct FailingGrammar;

    impl GrammarTables for FailingGrammar {
        fn node_kind_count(&self) -> usize {
            3
        }

        fn node_kind_for_id(&self, id: usize) -> Result<Option<&str>, LookupError> {
            if id == 1 {
                Err(LookupError::out_of_range(Category::Node, id, 0))
            } else {
                Ok(Some("kind"))
            }
        }

        fn field_count(&self) -> usize {
            0
        }

        fn field_name_for_id(&self, _id: usize) -> Result<Option<&str>, LookupError> {
            Ok(None)
        }
    }

    #[test]
    fn test_header_lines() {
        let output = Generator::new("Fish", Selection::none()).generate(&fish_grammar()).unwrap();
        assert_eq!(
            output,
            "/**\n * AUTO GENERATED FILE\n *     tree-sitter-types-builder\n */"
        );
    }

    #[test]
    fn test_duplicate_node_kinds_scenario() {
        let grammar = StaticGrammar::named(&["if", "if", "else"], &[]);
        let nodes = build_symbol_table(&grammar, Category::Node).unwrap();
        assert_eq!(nodes.as_slice(), ["\"if\"", "\"else\""]);
    }

    #[test]
    fn test_absent_field_name_scenario() {
        let grammar = StaticGrammar::new(Vec::<Option<&str>>::new(), [Some("name"), Some("body"), None]);
        let fields = build_symbol_table(&grammar, Category::FieldName).unwrap();
        assert_eq!(fields.as_slice(), ["\"name\"", "\"body\"", "\"null\""]);
        assert_eq!(fields.position("\"null\""), Some(2));
    }

    #[test]
    fn test_absent_node_kind_is_empty_literal() {
        let nodes = build_symbol_table(&fish_grammar(), Category::Node).unwrap();
        assert_eq!(
            nodes.as_slice(),
            ["\"end\"", "\"if\"", "\"else\"", "\"\""]
        );
    }

    #[test]
    fn test_type_and_set_selection_scenario() {
        let generator = Generator::new("Fish", Selection::parse_list("Type,Set"));
        let output = generator.generate(&fish_grammar()).unwrap();

        assert!(output.contains("export type FishNodeType ="));
        assert!(output.contains("export type FishFieldNameType ="));
        assert!(output.contains("export const FishNodeTypeSet = new Set<FishNodeType>"));
        assert!(output.contains("export const FishFieldNameTypeSet = new Set<FishFieldNameType>"));
        assert!(!output.contains("export namespace"));
        assert!(!output.contains("new Map"));
    }

    #[test]
    fn test_default_selection_scenario() {
        let output = Generator::new("Fish", Selection::default())
            .generate(&fish_grammar())
            .unwrap();

        for category in ["Node", "FieldName"] {
            assert!(output.contains(&format!("export type Fish{}Type =", category)));
            assert!(output.contains(&format!("export namespace Fish{}Type {{", category)));
            assert!(output.contains(&format!("export const Fish{}TypeSet", category)));
            assert!(!output.contains(&format!("export const Fish{}TypeMap", category)));
        }
    }

    #[test]
    fn test_node_declarations_precede_field_declarations() {
        let output = Generator::new("Fish", Selection::all())
            .generate(&fish_grammar())
            .unwrap();
        let last_node = output.find("export const FishNodeTypeMap").unwrap();
        let first_field = output.find("export type FishFieldNameType").unwrap();
        assert!(last_node < first_field);
    }

    #[test]
    fn test_full_output() {
        let grammar = StaticGrammar::new([Some("if"), Some("else")], [None, Some("name")]);
        let selection = Selection::none()
            .with(Representation::Type)
            .with(Representation::Map);
        let output = Generator::new("Fish", selection).generate(&grammar).unwrap();

        let expected = [
            "/**",
            " * AUTO GENERATED FILE",
            " *     tree-sitter-types-builder",
            " */",
            "export type FishNodeType =\n\t\"if\" |\n\t\"else\"",
            "export const FishNodeTypeMap = new Map<FishNodeType, number>([ [\"if\", 0], [\"else\", 1] ])",
            "export type FishFieldNameType =\n\t\"null\" |\n\t\"name\"",
            "export const FishFieldNameTypeMap = new Map<FishFieldNameType, number>([ [\"null\", 0], [\"name\", 1] ])",
        ]
        .join("\n");
        assert_eq!(output, expected);
    }

    #[test]
    fn test_empty_tables_produce_header_only() {
        let output = Generator::new("Fish", Selection::all())
            .generate(&StaticGrammar::default())
            .unwrap();
        assert_eq!(output, HEADER.join("\n"));
    }

    #[test]
    fn test_generate_is_deterministic() {
        let generator = Generator::new("Fish", Selection::all());
        let first = generator.generate(&fish_grammar()).unwrap();
        let second = generator.generate(&fish_grammar()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_lookup_failure_aborts_generation() {
        let result = Generator::new("Fish", Selection::default()).generate(&FailingGrammar);
        assert!(matches!(result, Err(LookupError::IdOutOfRange { id: 1, .. })));
    }

    #[test]
    fn test_generate_for_tree_sitter_language() {
        let java = tree_sitter::Language::new(tree_sitter_java::LANGUAGE);

        let nodes = build_symbol_table(&java, Category::Node).unwrap();
        let fields = build_symbol_table(&java, Category::FieldName).unwrap();
        assert!(nodes.contains("\"method_declaration\""));
        assert_eq!(fields.position("\"null\""), Some(0));

        let output = Generator::new("Java", Selection::all()).generate(&java).unwrap();
        assert!(output.starts_with(&HEADER.join("\n")));
        assert!(output.contains("export type JavaNodeType =\n\t"));
        assert!(output.contains("export type JavaFieldNameType =\n\t\"null\" |"));
        assert!(output.contains("export const JavaFieldNameTypeMap = new Map<JavaFieldNameType, number>([ [\"null\", 0],"));
    }

    #[test]
    fn test_from_config() {
        let config = RunConfig::builder()
            .grammar_path("tree-sitter-fish.wasm")
            .generate("Enum")
            .build()
            .unwrap();
        let generator = Generator::from_config(&config);
        assert_eq!(generator.prefix(), "Fish");
        assert_eq!(generator.selection(), Selection::parse_list("Enum"));
    }

    #[cfg(feature = "wasm")]
    #[tokio::test]
    async fn test_run_load_failure_writes_nothing() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let output = dir.path().join("types.ts");
        let config = RunConfig::builder()
            .grammar_path(dir.path().join("tree-sitter-absent.wasm"))
            .output(&output)
            .build()
            .unwrap();

        let err = run(&config).await.unwrap_err();
        assert!(matches!(err, CodegenError::Load(_)));
        assert!(!output.exists());
    }
}
