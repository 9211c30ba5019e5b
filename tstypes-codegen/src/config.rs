//! Run configuration.

use crate::error::ConfigError;
use crate::options::Selection;
use std::io::Write;
use std::path::{Path, PathBuf};
use tstypes_grammar::resolve_language_name;

/// Destination of the generated text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum OutputSink {
    /// Print to standard output.
    #[default]
    Stdout,
    /// Write to a file, replacing its contents.
    File(PathBuf),
}

impl OutputSink {
    /// Writes the generated text followed by a newline.
    ///
    /// # Errors
    /// Returns any IO error raised while writing.
    pub fn write(&self, text: &str) -> std::io::Result<()> {
        match self {
            Self::Stdout => {
                let mut stdout = std::io::stdout().lock();
                writeln!(stdout, "{}", text)?;
                stdout.flush()
            }
            Self::File(path) => {
                std::fs::write(path, format!("{}\n", text))?;
                tracing::info!("wrote {} bytes to {}", text.len() + 1, path.display());
                Ok(())
            }
        }
    }
}

/// Resolved, immutable configuration of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    grammar_path: PathBuf,
    prefix: String,
    sink: OutputSink,
    selection: Selection,
}

impl RunConfig {
    /// Returns a builder for a run configuration.
    #[must_use]
    pub fn builder() -> RunConfigBuilder {
        RunConfigBuilder::new()
    }

    /// Returns the grammar artifact path.
    #[must_use]
    pub fn grammar_path(&self) -> &Path {
        &self.grammar_path
    }

    /// Returns the declaration name prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Returns the output sink.
    #[must_use]
    pub fn sink(&self) -> &OutputSink {
        &self.sink
    }

    /// Returns the selected representations.
    #[must_use]
    pub fn selection(&self) -> Selection {
        self.selection
    }
}

/// Builder for configuring a [`RunConfig`].
#[derive(Debug, Clone, Default)]
pub struct RunConfigBuilder {
    grammar_path: Option<PathBuf>,
    language: Option<String>,
    output: Option<PathBuf>,
    selection: Option<Selection>,
}

impl RunConfigBuilder {
    /// Creates a new builder with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the grammar artifact path.
    #[must_use]
    pub fn grammar_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.grammar_path = Some(path.into());
        self
    }

    /// Sets the explicit language name used as declaration prefix.
    #[must_use]
    pub fn language(mut self, name: impl Into<String>) -> Self {
        self.language = Some(name.into());
        self
    }

    /// Writes output to `path` instead of standard output.
    #[must_use]
    pub fn output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output = Some(path.into());
        self
    }

    /// Selects representations from a comma-separated list.
    ///
    /// A non-empty list replaces the default selection; a blank one leaves
    /// the selection unchanged.
    #[must_use]
    pub fn generate(mut self, list: &str) -> Self {
        if list.trim().is_empty() {
            tracing::debug!("empty representation list, keeping the current selection");
            return self;
        }
        self.selection = Some(Selection::parse_list(list));
        self
    }

    /// Sets the selected representations.
    #[must_use]
    pub fn selection(mut self, selection: Selection) -> Self {
        self.selection = Some(selection);
        self
    }

    /// Resolves the configuration.
    ///
    /// # Errors
    /// Returns `ConfigError::MissingGrammarPath` if no grammar path was set,
    /// or `ConfigError::UnresolvedLanguage` if no prefix is given and none
    /// can be inferred from the grammar file name.
    pub fn build(self) -> Result<RunConfig, ConfigError> {
        let grammar_path = self
            .grammar_path
            .filter(|path| !path.as_os_str().is_empty())
            .ok_or(ConfigError::MissingGrammarPath)?;
        let prefix = resolve_language_name(self.language.as_deref(), &grammar_path).ok_or_else(
            || ConfigError::UnresolvedLanguage {
                path: grammar_path.clone(),
            },
        )?;

        Ok(RunConfig {
            grammar_path,
            prefix,
            sink: self.output.map_or(OutputSink::Stdout, OutputSink::File),
            selection: self.selection.unwrap_or_default(),
        })
    }
}
