//! Per-file analysis orchestration.

use crate::context::{AnalyzeContext, ContextError};
use crate::registry::RuleSet;
use crate::types::{Diagnostic, Severity};
use avm_lint_syntax::{Lexer, Parser};
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Errors that abort the analysis of a file.
#[derive(Debug, Error)]
pub enum AnalyzerError {
    /// The file could not be read. Callers treat this as fatal for the run.
    #[error("failed to read {path}: {source}")]
    Io {
        /// The unreadable file.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file path could not be classified. Fatal for this file only.
    #[error(transparent)]
    Context(#[from] ContextError),
}

/// Analyzes module files against a configured rule set.
///
/// The rule set is frozen at construction. Analyzing a file never mutates
/// shared state, so files are independent and may be processed in any order.
pub struct Analyzer {
    rules: RuleSet,
}

impl Analyzer {
    /// Creates an analyzer over a configured rule set.
    #[must_use]
    pub fn new(rules: RuleSet) -> Self {
        Self { rules }
    }

    /// The rule set this analyzer runs.
    #[must_use]
    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Reads and analyzes one file.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Io`] when the file cannot be read and
    /// [`AnalyzerError::Context`] when its path cannot be classified.
    pub fn analyze_file(&self, path: &Path) -> Result<Vec<Diagnostic>, AnalyzerError> {
        debug!("analyzing {}", path.display());
        let source = std::fs::read_to_string(path).map_err(|source| AnalyzerError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        self.analyze_source(path, &source)
    }

    /// Analyzes already-loaded source text.
    ///
    /// Stages short-circuit: lexing errors mask parsing errors, and parsing
    /// errors mask rule findings, so only one error category is ever
    /// reported per file per run.
    ///
    /// # Errors
    ///
    /// Returns [`AnalyzerError::Context`] when the path cannot be
    /// classified into a module type.
    pub fn analyze_source(
        &self,
        path: &Path,
        source: &str,
    ) -> Result<Vec<Diagnostic>, AnalyzerError> {
        let (tokens, lex_errors) = Lexer::new(source).tokenize();
        if !lex_errors.is_empty() {
            debug!("{}: {} lexing error(s)", path.display(), lex_errors.len());
            return Ok(lex_errors
                .iter()
                .map(|e| {
                    Diagnostic::new(Severity::Error, e.code(), e.to_string(), None)
                        .with_position(e.span())
                })
                .collect());
        }

        let (program, parse_errors) = Parser::new(tokens).parse();
        if !parse_errors.is_empty() {
            debug!("{}: {} parsing error(s)", path.display(), parse_errors.len());
            return Ok(parse_errors
                .iter()
                .map(|e| {
                    Diagnostic::new(Severity::Error, e.code(), e.to_string(), None)
                        .with_position(e.span())
                })
                .collect());
        }

        let context = AnalyzeContext::new(path, program.into_declarations())?;
        Ok(self.rules.analyze(&context))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::Rule;

    /// Emits one finding when the sequence holds no metadata at all.
    struct RequireMetadata;

    impl Rule for RequireMetadata {
        fn name(&self) -> &'static str {
            "require-metadata"
        }
        fn code(&self) -> &'static str {
            "TST001"
        }

        fn analyze(&self, ctx: &AnalyzeContext) -> Vec<Diagnostic> {
            if ctx.declarations().iter().any(avm_lint_syntax::Declaration::is_metadata) {
                Vec::new()
            } else {
                vec![Diagnostic::new(
                    Severity::Error,
                    self.code(),
                    "No metadata declared.",
                    None,
                )]
            }
        }
    }

    fn analyzer() -> Analyzer {
        Analyzer::new(RuleSet::new(vec![Box::new(RequireMetadata)]))
    }

    const MODULE_PATH: &str = "avm/res/widgets/main.bicep";

    #[test]
    fn clean_file_runs_the_rules() {
        let diagnostics = analyzer()
            .analyze_source(Path::new(MODULE_PATH), "param location string\n")
            .expect("analysis succeeds");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, "TST001");
    }

    #[test]
    fn satisfied_rule_reports_nothing() {
        let diagnostics = analyzer()
            .analyze_source(Path::new(MODULE_PATH), "metadata name = 'Widgets'\n")
            .expect("analysis succeeds");
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn lexing_errors_mask_everything_else() {
        // unterminated string is a lex error AND the file has no metadata
        let diagnostics = analyzer()
            .analyze_source(Path::new(MODULE_PATH), "metadata name = 'oops\n")
            .expect("analysis succeeds");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, "LEX002");
        assert!(diagnostics[0].position.is_some());
    }

    #[test]
    fn parsing_errors_mask_rule_findings() {
        let diagnostics = analyzer()
            .analyze_source(Path::new(MODULE_PATH), "banana = 1\n")
            .expect("analysis succeeds");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, "PRS002");
    }

    #[test]
    fn unclassifiable_path_fails_fast() {
        let result = analyzer().analyze_source(
            Path::new("modules/widgets/main.bicep"),
            "metadata name = 'Widgets'\n",
        );
        assert!(matches!(result, Err(AnalyzerError::Context(_))));
    }
}
