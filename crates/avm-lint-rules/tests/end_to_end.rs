//! Full-pipeline checks: real files through the analyzer and default rules.

use avm_lint_core::{Analyzer, AnalyzerError, RuleSet};
use avm_lint_rules::default_rules;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn analyzer() -> Analyzer {
    Analyzer::new(RuleSet::new(default_rules()))
}

/// Writes `source` into an avm-style module layout and returns its path.
fn module_file(tmp: &TempDir, source: &str) -> PathBuf {
    let path = tmp.path().join("avm").join("res").join("elastic-san").join("main.bicep");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, source).unwrap();
    path
}

#[test]
fn conforming_module_file_is_clean() {
    let tmp = TempDir::new().unwrap();
    let path = module_file(
        &tmp,
        "metadata name = 'Elastic SANs'\n\
         metadata description = 'This module deploys an Elastic SAN'\n\
         metadata owner = 'Azure/module-maintainers'\n\
         targetScope = 'subscription'\n\
         \n\
         param location string\n",
    );

    let diagnostics = analyzer().analyze_file(&path).unwrap();
    assert!(diagnostics.is_empty(), "unexpected: {diagnostics:?}");
}

#[test]
fn violations_surface_with_their_codes() {
    let tmp = TempDir::new().unwrap();
    let path = module_file(&tmp, "metadata name = 'Elastic SAN'\n");

    let diagnostics = analyzer().analyze_file(&path).unwrap();
    let codes: Vec<_> = diagnostics.iter().map(|d| d.code.as_str()).collect();
    assert_eq!(codes, vec!["AVM001", "AVM002", "AVM003"]);
    assert!(diagnostics[0]
        .message
        .starts_with("Invalid value: 'Elastic SAN'."));
}

#[test]
fn syntax_errors_mask_rule_findings() {
    let tmp = TempDir::new().unwrap();
    let path = module_file(&tmp, "metadata name = 'never closed\n");

    let diagnostics = analyzer().analyze_file(&path).unwrap();
    assert_eq!(diagnostics.len(), 1);
    assert_eq!(diagnostics[0].code, "LEX002");
    assert!(diagnostics[0].position.is_some());
}

#[test]
fn unreadable_file_is_a_fatal_error() {
    let tmp = TempDir::new().unwrap();
    let missing = tmp.path().join("avm").join("res").join("gone").join("main.bicep");

    let result = analyzer().analyze_file(&missing);
    assert!(matches!(result, Err(AnalyzerError::Io { .. })));
}

#[test]
fn unclassifiable_path_is_fatal_for_the_file() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("main.bicep");
    fs::write(&path, "metadata name = 'Elastic SANs'\n").unwrap();

    // a temp dir path carries no avm segment
    let result = analyzer().analyze_file(&path);
    assert!(matches!(result, Err(AnalyzerError::Context(_))));
}
