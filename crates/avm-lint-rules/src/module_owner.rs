//! Rule to require the module owner metadata third, with the maintainers
//! team as its value.

use crate::support::metadata_value;
use avm_lint_core::{AnalyzeContext, Diagnostic, Rule, Severity};

/// Rule code for module-owner.
pub const CODE: &str = "AVM003";

/// Rule name for module-owner.
pub const NAME: &str = "module-owner";

const MESSAGE: &str = "The 'owner' metadata in the module should be the third metadata defined \
    (without any decorators) with the value 'Azure/module-maintainers'.";

const REQUIRED_OWNER: &str = "Azure/module-maintainers";

/// Requires the `owner` metadata third, set to the maintainers team.
#[derive(Debug, Clone, Copy, Default)]
pub struct ModuleOwner;

impl ModuleOwner {
    /// Creates the rule.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn diagnostic(value: Option<&str>) -> Diagnostic {
        Diagnostic::new(Severity::Error, CODE, MESSAGE, value)
    }
}

impl Rule for ModuleOwner {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires the 'owner' metadata third, set to 'Azure/module-maintainers'"
    }

    fn analyze(&self, ctx: &AnalyzeContext) -> Vec<Diagnostic> {
        // must be the 3rd declaration
        let Some(decl) = ctx.declarations().get(2) else {
            return vec![Self::diagnostic(None)];
        };

        let Some(value) = metadata_value(decl, "owner") else {
            return vec![Self::diagnostic(None)];
        };

        // exact match, case-sensitive, no trimming
        if value == REQUIRED_OWNER {
            Vec::new()
        } else {
            vec![Self::diagnostic(Some(value))]
        }
    }
}
