//! Core types for diagnostics and lint results.

use avm_lint_syntax::Span;
use miette::SourceSpan;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Severity level for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Finding that should be addressed but does not fail the run.
    Warning,
    /// Finding that must be fixed.
    Error,
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// A single reported finding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    /// Severity of this finding.
    pub severity: Severity,
    /// Stable code of the rule or syntax stage that produced it.
    pub code: String,
    /// Human-readable message.
    pub message: String,
    /// Source position. Present only for lexer/parser findings; rule
    /// findings are structural and carry no position.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub position: Option<Span>,
}

impl Diagnostic {
    /// Creates a diagnostic, optionally embedding the offending value.
    ///
    /// A present, non-blank `value` prefixes the message as
    /// `Invalid value: '<value>'. <message>`; otherwise the message is used
    /// verbatim. Same inputs always produce the same diagnostic.
    #[must_use]
    pub fn new(
        severity: Severity,
        code: impl Into<String>,
        message: impl Into<String>,
        value: Option<&str>,
    ) -> Self {
        let message = message.into();
        let message = match value {
            Some(v) if !v.trim().is_empty() => format!("Invalid value: '{v}'. {message}"),
            _ => message,
        };
        Self {
            severity,
            code: code.into(),
            message,
            position: None,
        }
    }

    /// Attaches a source position to this diagnostic.
    #[must_use]
    pub fn with_position(mut self, span: Span) -> Self {
        self.position = Some(span);
        self
    }
}

impl std::fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} [{}] {}", self.severity, self.code, self.message)?;
        if let Some(position) = self.position {
            write!(f, " at {position}")?;
        }
        Ok(())
    }
}

/// Diagnostics produced for one analyzed file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileResult {
    /// The analyzed file.
    pub file: PathBuf,
    /// Findings for that file, in encounter order.
    pub diagnostics: Vec<Diagnostic>,
}

/// Aggregated result of a lint run.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LintResult {
    /// Per-file results, in processing order.
    pub files: Vec<FileResult>,
}

impl LintResult {
    /// Creates a new empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the diagnostics for one analyzed file.
    pub fn push_file(&mut self, file: impl Into<PathBuf>, diagnostics: Vec<Diagnostic>) {
        self.files.push(FileResult {
            file: file.into(),
            diagnostics,
        });
    }

    /// Number of files analyzed.
    #[must_use]
    pub fn files_checked(&self) -> usize {
        self.files.len()
    }

    /// Total number of findings across all files.
    #[must_use]
    pub fn total_diagnostics(&self) -> usize {
        self.files.iter().map(|f| f.diagnostics.len()).sum()
    }

    /// Returns `true` if any finding is an error.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.files
            .iter()
            .flat_map(|f| &f.diagnostics)
            .any(|d| d.severity == Severity::Error)
    }

    /// Counts findings by severity as `(errors, warnings)`.
    #[must_use]
    pub fn count_by_severity(&self) -> (usize, usize) {
        let mut errors = 0;
        let mut warnings = 0;
        for diagnostic in self.files.iter().flat_map(|f| &f.diagnostics) {
            match diagnostic.severity {
                Severity::Error => errors += 1,
                Severity::Warning => warnings += 1,
            }
        }
        (errors, warnings)
    }
}

/// Converts a [`Diagnostic`] to a miette diagnostic for rich error display.
#[derive(Debug, thiserror::Error, miette::Diagnostic)]
#[error("{message}")]
pub struct DiagnosticReport {
    message: String,
    #[label("{label}")]
    span: SourceSpan,
    label: String,
}

impl From<&Diagnostic> for DiagnosticReport {
    fn from(d: &Diagnostic) -> Self {
        let span = d
            .position
            .map_or_else(|| SourceSpan::from((0usize, 0usize)), |s| SourceSpan::from((s.offset, s.len)));
        Self {
            message: format!("[{}] {}", d.code, d.message),
            span,
            label: d.code.clone(),
        }
    }
}
