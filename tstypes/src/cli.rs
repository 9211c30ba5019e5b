//! Command-line surface of `tree-sitter-types-builder`.

use clap::Parser;
use std::path::PathBuf;
use tstypes_codegen::{CodegenError, ConfigError, RunConfig};

/// Generate TypeScript types for the node kinds and field names of a
/// tree-sitter grammar.
#[derive(Parser, Debug, Default, PartialEq, Eq)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output file to write to (standard output when omitted)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Compiled grammar (`.wasm`) to read from
    #[arg(short, long, value_name = "FILE")]
    pub wasm: Option<PathBuf>,

    /// Language name to prefix the generated types with
    ///
    /// Inferred from a `tree-sitter-<lang>.wasm` file name when omitted.
    #[arg(short, long, value_name = "NAME")]
    pub lang: Option<String>,

    /// Comma-separated representations to generate: Type, Enum, Set, Map
    ///
    /// Defaults to Type, Enum and Set.
    #[arg(long, value_name = "LIST")]
    pub generate: Option<String>,
}

impl Cli {
    /// Resolves the parsed options into a run configuration.
    ///
    /// # Errors
    /// Returns `ConfigError` if no grammar path is given or no language name
    /// can be determined.
    pub fn into_config(self) -> Result<RunConfig, ConfigError> {
        let mut builder = RunConfig::builder();
        if let Some(wasm) = self.wasm {
            builder = builder.grammar_path(wasm);
        }
        if let Some(lang) = self.lang {
            builder = builder.language(lang);
        }
        if let Some(output) = self.output {
            builder = builder.output(output);
        }
        if let Some(generate) = &self.generate {
            builder = builder.generate(generate);
        }
        builder.build()
    }

    /// Resolves the options and executes the run.
    ///
    /// # Errors
    /// Returns `CodegenError::Config` if the options do not resolve, or the
    /// error of the failed run step.
    pub async fn run(self) -> Result<(), CodegenError> {
        let config = self.into_config()?;
        tracing::debug!("resolved configuration: {:?}", config);
        tstypes_codegen::run(&config).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tstypes_codegen::{OutputSink, Representation, Selection};

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("tree-sitter-types-builder").chain(args.iter().copied()))
            .expect("Failed to parse arguments")
    }

    #[test]
    fn test_parse_all_options() {
        let cli = parse(&[
            "-o",
            "types.ts",
            "-w",
            "tree-sitter-fish.wasm",
            "-l",
            "fish",
            "--generate",
            "Type,Map",
        ]);
        assert_eq!(cli.output, Some(PathBuf::from("types.ts")));
        assert_eq!(cli.wasm, Some(PathBuf::from("tree-sitter-fish.wasm")));
        assert_eq!(cli.lang.as_deref(), Some("fish"));
        assert_eq!(cli.generate.as_deref(), Some("Type,Map"));
    }

    #[test]
    fn test_parse_long_options() {
        let cli = parse(&["--output", "out.ts", "--wasm", "g.wasm", "--lang", "go"]);
        assert_eq!(cli.output, Some(PathBuf::from("out.ts")));
        assert_eq!(cli.wasm, Some(PathBuf::from("g.wasm")));
        assert_eq!(cli.lang.as_deref(), Some("go"));
        assert_eq!(cli.generate, None);
    }

    #[test]
    fn test_into_config_defaults() {
        let config = parse(&["-w", "tree-sitter-fish.wasm"]).into_config().unwrap();
        assert_eq!(config.prefix(), "Fish");
        assert_eq!(config.sink(), &OutputSink::Stdout);
        assert_eq!(config.selection(), Selection::default());
    }

    #[test]
    fn test_into_config_generate() {
        let config = parse(&["-w", "tree-sitter-fish.wasm", "--generate", "Type,Set"])
            .into_config()
            .unwrap();
        let selection = config.selection();
        assert!(selection.is_enabled(Representation::Type));
        assert!(selection.is_enabled(Representation::Set));
        assert!(!selection.is_enabled(Representation::Enum));
        assert!(!selection.is_enabled(Representation::Map));
    }

    #[test]
    fn test_into_config_missing_wasm() {
        let err = parse(&["-l", "fish"]).into_config().unwrap_err();
        assert_eq!(err, ConfigError::MissingGrammarPath);
    }

    #[test]
    fn test_into_config_unresolved_lang() {
        let err = parse(&["-w", "grammar.so"]).into_config().unwrap_err();
        assert!(matches!(err, ConfigError::UnresolvedLanguage { .. }));
    }

    #[tokio::test]
    async fn test_run_missing_wasm_is_config_error() {
        let err = parse(&["-l", "fish"]).run().await.unwrap_err();
        assert!(matches!(
            err,
            CodegenError::Config(ConfigError::MissingGrammarPath)
        ));
        assert_eq!(
            err.to_string(),
            "configuration error: no grammar path given"
        );
    }

    #[tokio::test]
    async fn test_run_unresolved_lang_is_config_error() {
        let err = parse(&["-w", "grammar.so"]).run().await.unwrap_err();
        assert!(matches!(
            err,
            CodegenError::Config(ConfigError::UnresolvedLanguage { .. })
        ));
    }

    #[test]
    fn test_empty_generate_keeps_defaults() {
        let config = parse(&["-w", "tree-sitter-fish.wasm", "--generate", ""])
            .into_config()
            .unwrap();
        assert_eq!(config.selection(), Selection::default());
    }

    #[test]
    fn test_unknown_flag_rejected() {
        let result = Cli::try_parse_from(["tree-sitter-types-builder", "--bogus"]);
        assert!(result.is_err());
    }
}
