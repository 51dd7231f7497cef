//! Rule contract for convention checks.

use crate::context::AnalyzeContext;
use crate::types::Diagnostic;

/// A single convention check over the declaration sequence.
///
/// Rules are independent of one another: each inspects the context and
/// returns its own diagnostics, and the engine concatenates them in
/// registration order. A rule must not perform I/O and must not depend on
/// anything beyond the context it is given; running the same rule twice over
/// the same context yields identical diagnostics.
///
/// # Example
///
/// ```
/// use avm_lint_core::{AnalyzeContext, Diagnostic, Rule, Severity};
///
/// struct RequireAnyDeclaration;
///
/// impl Rule for RequireAnyDeclaration {
///     fn name(&self) -> &'static str {
///         "require-any-declaration"
///     }
///     fn code(&self) -> &'static str {
///         "XMP001"
///     }
///
///     fn analyze(&self, ctx: &AnalyzeContext) -> Vec<Diagnostic> {
///         if ctx.declarations().is_empty() {
///             vec![Diagnostic::new(
///                 Severity::Error,
///                 self.code(),
///                 "The module file has no declarations.",
///                 None,
///             )]
///         } else {
///             Vec::new()
///         }
///     }
/// }
/// ```
pub trait Rule: Send + Sync {
    /// Returns the kebab-case name of this rule (e.g., "module-name").
    fn name(&self) -> &'static str;

    /// Returns the stable rule code (e.g., "AVM001").
    fn code(&self) -> &'static str;

    /// Returns a brief description of what this rule checks.
    fn description(&self) -> &'static str {
        ""
    }

    /// Checks the declaration sequence and returns any diagnostics found.
    fn analyze(&self, ctx: &AnalyzeContext) -> Vec<Diagnostic>;
}

/// Type alias for boxed Rule trait objects.
pub type RuleBox = Box<dyn Rule>;
