//! # avm-lint-rules
//!
//! Built-in convention rules for avm-lint.
//!
//! ## Available Rules
//!
//! | Code | Name | Description |
//! |--------|----------------------|-------------|
//! | AVM001 | `module-name`        | Requires the 'name' metadata first, in plural form |
//! | AVM002 | `module-description` | Requires the 'description' metadata second, with the standard phrasing |
//! | AVM003 | `module-owner`       | Requires the 'owner' metadata third, set to 'Azure/module-maintainers' |
//! | AVM004 | `target-scope`       | Restricts where and how 'targetScope' may be declared |
//!
//! ## Usage
//!
//! ```
//! use avm_lint_core::{Analyzer, RuleSet};
//! use avm_lint_rules::default_rules;
//!
//! let analyzer = Analyzer::new(RuleSet::new(default_rules()));
//! assert_eq!(analyzer.rules().total_rules_count(), 4);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod module_description;
mod module_name;
mod module_owner;
mod support;
mod target_scope;

pub use module_description::ModuleDescription;
pub use module_name::ModuleName;
pub use module_owner::ModuleOwner;
pub use target_scope::TargetScope;

/// Re-export core types for convenience.
pub use avm_lint_core::{Rule, RuleBox, Severity};

/// Returns the built-in rules, boxed, in code order.
///
/// This is the registration order, and therefore the execution order, the
/// engine preserves.
#[must_use]
pub fn default_rules() -> Vec<RuleBox> {
    vec![
        Box::new(ModuleName::new()),
        Box::new(ModuleDescription::new()),
        Box::new(ModuleOwner::new()),
        Box::new(TargetScope::new()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules_are_registered_in_code_order() {
        let codes: Vec<_> = default_rules().iter().map(|r| r.code().to_string()).collect();
        assert_eq!(codes, vec!["AVM001", "AVM002", "AVM003", "AVM004"]);
    }
}
