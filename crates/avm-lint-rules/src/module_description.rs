//! Rule to require the module description metadata second, with the
//! standard phrasing.
//!
//! The `description` metadata must be the second declaration, carry no
//! decorators, start with `This module deploys a`, and name the deployed
//! resource in singular form, e.g. `This module deploys an Elastic SAN`.

use crate::support::{last_word, metadata_value};
use avm_lint_core::{AnalyzeContext, Diagnostic, EnglishPlurals, Pluralize, Rule, Severity};

/// Rule code for module-description.
pub const CODE: &str = "AVM002";

/// Rule name for module-description.
pub const NAME: &str = "module-description";

const MESSAGE: &str = "The 'description' metadata in the module should be the second metadata \
    defined (without any decorators) and must start with 'This module deploys a' followed by \
    the name of the resource in singular form. For example 'This module deploys an Elastic SAN'.";

const REQUIRED_PREFIX: &str = "This module deploys a";

/// Requires the `description` metadata second, with the standard phrasing.
pub struct ModuleDescription {
    pluralize: Box<dyn Pluralize>,
}

impl Default for ModuleDescription {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleDescription {
    /// Creates the rule with the default English pluralization.
    #[must_use]
    pub fn new() -> Self {
        Self {
            pluralize: Box::new(EnglishPlurals),
        }
    }

    /// Replaces the pluralization service.
    #[must_use]
    pub fn with_pluralize(mut self, pluralize: impl Pluralize + 'static) -> Self {
        self.pluralize = Box::new(pluralize);
        self
    }

    fn diagnostic(&self, value: Option<&str>) -> Diagnostic {
        Diagnostic::new(Severity::Error, CODE, MESSAGE, value)
    }
}

impl Rule for ModuleDescription {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires the 'description' metadata second, starting with 'This module deploys a'"
    }

    fn analyze(&self, ctx: &AnalyzeContext) -> Vec<Diagnostic> {
        // must be the 2nd declaration
        let Some(decl) = ctx.declarations().get(1) else {
            return vec![self.diagnostic(None)];
        };

        let Some(value) = metadata_value(decl, "description") else {
            return vec![self.diagnostic(None)];
        };

        // the prefix check runs before the singular-form check
        if !value.starts_with(REQUIRED_PREFIX) {
            return vec![self.diagnostic(Some(value))];
        }

        let singular = last_word(value).is_some_and(|word| !self.pluralize.is_plural(word));
        if singular {
            Vec::new()
        } else {
            vec![self.diagnostic(Some(value))]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use avm_lint_syntax::{Declaration, MetadataDeclaration};

    fn ctx(declarations: Vec<Declaration>) -> AnalyzeContext {
        AnalyzeContext::new("avm/res/widgets/main.bicep", declarations).expect("path classifies")
    }

    fn metadata(name: &str, value: &str) -> Declaration {
        Declaration::Metadata(MetadataDeclaration {
            name: name.to_string(),
            value: Some(value.to_string()),
            decorators: Vec::new(),
        })
    }

    fn sequence(description: &str) -> Vec<Declaration> {
        vec![
            metadata("name", "Elastic SANs"),
            metadata("description", description),
        ]
    }

    #[test]
    fn standard_phrasing_is_valid() {
        let diagnostics = ModuleDescription::new()
            .analyze(&ctx(sequence("This module deploys an Elastic SAN")));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn short_sequence_reports_without_value() {
        let diagnostics =
            ModuleDescription::new().analyze(&ctx(vec![metadata("name", "Elastic SANs")]));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, CODE);
        assert!(!diagnostics[0].message.starts_with("Invalid value"));
    }

    #[test]
    fn wrong_prefix_reports_the_value() {
        let diagnostics =
            ModuleDescription::new().analyze(&ctx(sequence("Deploys an Elastic SAN")));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0]
            .message
            .starts_with("Invalid value: 'Deploys an Elastic SAN'."));
    }

    #[test]
    fn plural_resource_name_reports_the_value() {
        let diagnostics = ModuleDescription::new()
            .analyze(&ctx(sequence("This module deploys all Elastic SANs")));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0].message.starts_with("Invalid value"));
    }

    #[test]
    fn prefix_failure_short_circuits_the_plurality_check() {
        // last word is singular, so only the prefix can be at fault
        let diagnostics = ModuleDescription::new().analyze(&ctx(sequence("Deploys a SAN")));
        assert_eq!(diagnostics.len(), 1);
    }
}
