//! List rules command implementation.

use avm_lint_core::RuleSet;
use avm_lint_rules::default_rules;

/// Runs the list-rules command.
pub fn run() {
    let rules = RuleSet::new(default_rules());

    println!("Available rules ({}):\n", rules.total_rules_count());
    println!("{:<10} {:<22} Description", "Code", "Name");
    println!("{}", "-".repeat(80));

    for rule in rules.rules() {
        println!(
            "{:<10} {:<22} {}",
            rule.code(),
            rule.name(),
            rule.description()
        );
    }

    println!("\nUse --only-rules or --exclude-rules to select rules by code, e.g.:");
    println!("  avm-lint check --only-rules AVM001,AVM004");
    println!("  avm-lint check --exclude-rules AVM002");
}
