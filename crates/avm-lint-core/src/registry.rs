//! Rule registry and execution engine.

use crate::config::RuleSelection;
use crate::context::AnalyzeContext;
use crate::rule::{Rule, RuleBox};
use crate::types::Diagnostic;
use tracing::debug;

/// A registered rule and its execution flag.
struct RuleDefinition {
    execute: bool,
    rule: RuleBox,
}

/// The fixed set of rules for a lint run.
///
/// Rules execute in registration order. Enabling and disabling only toggles
/// the execution flag; the set itself never changes after construction and
/// is not mutated during analysis. Configure the set before the first file
/// is analyzed and treat it as frozen afterwards.
pub struct RuleSet {
    rules: Vec<RuleDefinition>,
}

impl RuleSet {
    /// Registers the given rules, all enabled.
    ///
    /// Rule codes must be unique across the set; this is checked in debug
    /// builds.
    #[must_use]
    pub fn new(rules: Vec<RuleBox>) -> Self {
        debug_assert!(
            rules
                .iter()
                .map(|r| r.code())
                .collect::<std::collections::HashSet<_>>()
                .len()
                == rules.len(),
            "rule codes must be unique"
        );
        Self {
            rules: rules
                .into_iter()
                .map(|rule| RuleDefinition {
                    execute: true,
                    rule,
                })
                .collect(),
        }
    }

    /// Disables every rule, then enables exactly the named codes.
    ///
    /// Returns the codes that matched no registered rule. Unknown codes are
    /// reported, not rejected: the rest of the selection still applies.
    pub fn set_only_rules(&mut self, codes: &[String]) -> Vec<String> {
        for definition in &mut self.rules {
            definition.execute = false;
        }
        self.set_execute(codes, true)
    }

    /// Disables exactly the named codes; other rules keep their state.
    ///
    /// Same unknown-code contract as [`RuleSet::set_only_rules`].
    pub fn set_exclude_rules(&mut self, codes: &[String]) -> Vec<String> {
        self.set_execute(codes, false)
    }

    /// Applies a selection: `only` first when non-empty, then `exclude`.
    ///
    /// Returns every code that resolved to no registered rule.
    pub fn apply_selection(&mut self, selection: &RuleSelection) -> Vec<String> {
        let mut unresolved = Vec::new();
        if !selection.only.is_empty() {
            unresolved.extend(self.set_only_rules(&selection.only));
        }
        unresolved.extend(self.set_exclude_rules(&selection.exclude));
        unresolved
    }

    fn set_execute(&mut self, codes: &[String], execute: bool) -> Vec<String> {
        let mut unresolved = Vec::new();
        for code in codes {
            match self
                .rules
                .iter_mut()
                .find(|definition| definition.rule.code() == code)
            {
                Some(definition) => definition.execute = execute,
                None => unresolved.push(code.clone()),
            }
        }
        unresolved
    }

    /// Runs every enabled rule in registration order, sequentially, and
    /// concatenates their diagnostics in encounter order.
    #[must_use]
    pub fn analyze(&self, ctx: &AnalyzeContext) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        for definition in &self.rules {
            if definition.execute {
                debug!("running rule {}", definition.rule.code());
                diagnostics.extend(definition.rule.analyze(ctx));
            }
        }
        diagnostics
    }

    /// Number of registered rules.
    #[must_use]
    pub fn total_rules_count(&self) -> usize {
        self.rules.len()
    }

    /// Number of rules that will execute.
    #[must_use]
    pub fn active_rules_count(&self) -> usize {
        self.rules.iter().filter(|d| d.execute).count()
    }

    /// Iterates the registered rules, for reporting.
    pub fn rules(&self) -> impl Iterator<Item = &dyn Rule> + '_ {
        self.rules.iter().map(|d| d.rule.as_ref())
    }
}
