//! Rule to restrict where and how `targetScope` may be declared.
//!
//! The target scope is optional. When present it must be the first
//! statement after the leading metadata section, carry no decorators, and
//! name a scope other than `resourceGroup`.

use crate::support::target_scope_value;
use avm_lint_core::{AnalyzeContext, Diagnostic, Rule, Severity};
use avm_lint_syntax::Declaration;

/// Rule code for target-scope.
pub const CODE: &str = "AVM004";

/// Rule name for target-scope.
pub const NAME: &str = "target-scope";

const MESSAGE: &str = "The 'targetScope' can only be used with 'subscription', \
    'managementGroup', or 'tenant' value. It cannot be used with 'resourceGroup'. When \
    'targetScope' is specified, it must be the first statement following the metadata section.";

const ALLOWED_SCOPES: &[&str] = &["tenant", "managementGroup", "subscription"];

/// Restricts the position and value of the `targetScope` declaration.
#[derive(Debug, Clone, Copy, Default)]
pub struct TargetScope;

impl TargetScope {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn diagnostic(value: Option<&str>) -> Diagnostic {
        Diagnostic::new(Severity::Error, CODE, MESSAGE, value)
    }
}

impl Rule for TargetScope {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Restricts 'targetScope' to tenant, managementGroup, or subscription, placed after the metadata section"
    }

    fn analyze(&self, ctx: &AnalyzeContext) -> Vec<Diagnostic> {
        let declarations = ctx.declarations();

        // optional, but at most one
        let scope_count = declarations.iter().filter(|d| d.is_target_scope()).count();
        if scope_count != 0 && scope_count != 1 {
            return vec![Self::diagnostic(None)];
        }
        if scope_count == 0 {
            return Vec::new();
        }

        let Some(decl) = scope_after_metadata(declarations) else {
            return vec![Self::diagnostic(None)];
        };

        let Some(value) = target_scope_value(decl) else {
            return vec![Self::diagnostic(None)];
        };

        // substring match is deliberately lenient: the recorded value may
        // carry decoration the parser does not normalise
        if ALLOWED_SCOPES.iter().any(|allowed| value.contains(allowed)) {
            Vec::new()
        } else {
            vec![Self::diagnostic(Some(value))]
        }
    }
}

/// Finds the target-scope declaration immediately following the leading
/// contiguous run of metadata declarations.
fn scope_after_metadata(declarations: &[Declaration]) -> Option<&Declaration> {
    let metadata_run = declarations
        .iter()
        .take_while(|d| d.is_metadata())
        .count();
    if metadata_run == 0 {
        return None; // a metadata section must exist
    }
    declarations
        .get(metadata_run)
        .filter(|d| d.is_target_scope())
}
