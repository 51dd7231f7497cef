//! Rule to require the module name metadata first, in plural form.
//!
//! The `name` metadata must be the first declaration in the file, carry no
//! decorators, and hold a non-blank string whose last word is plural, such
//! as `Elastic SANs`.

use crate::support::{last_word, metadata_value};
use avm_lint_core::{AnalyzeContext, Diagnostic, EnglishPlurals, Pluralize, Rule, Severity};

/// Rule code for module-name.
pub const CODE: &str = "AVM001";

/// Rule name for module-name.
pub const NAME: &str = "module-name";

const MESSAGE: &str = "The 'name' metadata in the module should be the first metadata defined \
    (without any decorators) and must be in plural form, such as 'Elastic SANs'.";

/// Requires the `name` metadata first, in plural form.
pub struct ModuleName {
    pluralize: Box<dyn Pluralize>,
}

impl Default for ModuleName {
    fn default() -> Self {
        Self::new()
    }
}

impl ModuleName {
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

impl Rule for ModuleName {
    fn name(&self) -> &'static str {
        NAME
    }

    fn code(&self) -> &'static str {
        CODE
    }

    fn description(&self) -> &'static str {
        "Requires the 'name' metadata first, in plural form"
    }

    fn analyze(&self, ctx: &AnalyzeContext) -> Vec<Diagnostic> {
        // must be the 1st declaration
        let Some(decl) = ctx.declarations().first() else {
            return vec![self.diagnostic(None)];
        };

        let Some(value) = metadata_value(decl, "name") else {
            return vec![self.diagnostic(None)];
        };

        let plural = last_word(value).is_some_and(|word| self.pluralize.is_plural(word));
        if plural {
            Vec::new()
        } else {
            vec![self.diagnostic(Some(value))]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use avm_lint_syntax::{Declaration, Decorator, MetadataDeclaration};

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

    #[test]
    fn plural_name_first_is_valid() {
        let diagnostics = ModuleName::new().analyze(&ctx(vec![metadata("name", "Elastic SANs")]));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn empty_sequence_reports_without_value() {
        let diagnostics = ModuleName::new().analyze(&ctx(Vec::new()));
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].code, CODE);
        assert!(!diagnostics[0].message.starts_with("Invalid value"));
    }

    #[test]
    fn wrong_key_reports_without_value() {
        let diagnostics = ModuleName::new().analyze(&ctx(vec![metadata("title", "Widgets")]));
        assert_eq!(diagnostics.len(), 1);
        assert!(!diagnostics[0].message.starts_with("Invalid value"));
    }

    #[test]
    fn decorated_declaration_reports_without_value() {
        let decl = Declaration::Metadata(MetadataDeclaration {
            name: "name".to_string(),
            value: Some("Widgets".to_string()),
            decorators: vec![Decorator {
                name: "sys.description".to_string(),
            }],
        });
        let diagnostics = ModuleName::new().analyze(&ctx(vec![decl]));
        assert_eq!(diagnostics.len(), 1);
        assert!(!diagnostics[0].message.starts_with("Invalid value"));
    }

    #[test]
    fn singular_name_reports_the_value() {
        let diagnostics = ModuleName::new().analyze(&ctx(vec![metadata("name", "Elastic SAN")]));
        assert_eq!(diagnostics.len(), 1);
        assert!(diagnostics[0]
            .message
            .starts_with("Invalid value: 'Elastic SAN'."));
    }

    #[test]
    fn emits_at_most_one_diagnostic() {
        let context = ctx(Vec::new());
        let rule = ModuleName::new();
        assert_eq!(rule.analyze(&context).len(), 1);
        assert_eq!(rule.analyze(&context).len(), 1);
    }
}
