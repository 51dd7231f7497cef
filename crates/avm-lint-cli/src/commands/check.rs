//! Check command implementation.

use anyhow::{Context, Result};
use avm_lint_core::{Analyzer, AnalyzerError, Config, LintResult, RuleSelection, RuleSet};
use avm_lint_rules::default_rules;
use std::path::{Path, PathBuf};

use crate::{config_resolver, files, OutputFormat};

/// Options for one check invocation.
pub struct CheckOptions {
    /// Bicep file or directory to analyze.
    pub source: PathBuf,
    /// Output format.
    pub format: OutputFormat,
    /// Disables directory recursion.
    pub no_recursive: bool,
    /// File-name pattern override.
    pub filter: Option<String>,
    /// Comma-separated codes of the only rules to run.
    pub only_rules: Option<String>,
    /// Comma-separated codes of rules to skip.
    pub exclude_rules: Option<String>,
    /// Issue-count threshold that stops the batch early.
    pub max_issues: Option<usize>,
    /// Explicit configuration file path.
    pub config: Option<PathBuf>,
}

/// Runs the check command.
pub fn run(options: &CheckOptions) -> Result<()> {
    let config = load_config(options)?;

    // a command-line selection replaces the config selection entirely
    let selection = if options.only_rules.is_some() || options.exclude_rules.is_some() {
        RuleSelection {
            only: parse_rule_codes(options.only_rules.as_deref()),
            exclude: parse_rule_codes(options.exclude_rules.as_deref()),
        }
    } else {
        config.rules.clone()
    };

    let mut rules = RuleSet::new(default_rules());
    let unresolved = rules.apply_selection(&selection);
    if !unresolved.is_empty() {
        let listed = unresolved
            .iter()
            .map(|code| format!("'{code}'"))
            .collect::<Vec<_>>()
            .join(",");
        tracing::warn!("One or more specified rules: {listed} do not exist.");
    }

    let recursive = !options.no_recursive && config.analyzer.recursive;
    let pattern = options.filter.as_deref().unwrap_or(&config.analyzer.filter);

    let files = files::find_files(&options.source, recursive, pattern)?;
    tracing::info!(
        "Analyzing {} file(s) with {} active rule(s)",
        files.len(),
        rules.active_rules_count()
    );

    let analyzer = Analyzer::new(rules);
    let mut result = LintResult::new();
    let mut failed_files = 0usize;

    for file in &files {
        if let Some(limit) = options.max_issues {
            if result.total_diagnostics() >= limit {
                tracing::warn!("Issue limit of {limit} reached, skipping remaining files");
                break;
            }
        }

        match analyzer.analyze_file(file) {
            Ok(diagnostics) => result.push_file(file.clone(), diagnostics),
            Err(err @ AnalyzerError::Context(_)) => {
                // this file cannot be analyzed; the batch continues
                tracing::error!("{err}");
                failed_files += 1;
            }
            Err(err) => return Err(err).context("analysis failed"),
        }
    }

    super::output::print(&result, options.format)?;

    if result.has_errors() || failed_files > 0 {
        std::process::exit(1);
    }

    Ok(())
}

fn load_config(options: &CheckOptions) -> Result<Config> {
    // the project directory is the source itself, or its parent for a file
    let project_dir = if options.source.is_dir() {
        options.source.clone()
    } else {
        options
            .source
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map_or_else(|| PathBuf::from("."), Path::to_path_buf)
    };

    match config_resolver::resolve(&project_dir, options.config.as_deref()) {
        config_resolver::ConfigSource::Default => Ok(Config::default()),
        other => {
            // Invariant: non-Default variants always have a path
            let path = other.path().context("resolved config has no path")?;
            if other.is_global() {
                tracing::info!("Using global config: {}", path.display());
            }
            Config::from_file(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))
        }
    }
}

/// Splits a comma-separated code list, trimming items and dropping blanks.
fn parse_rule_codes(raw: Option<&str>) -> Vec<String> {
    raw.map(|value| {
        value
            .split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_trims_and_drops_blanks() {
        assert_eq!(
            parse_rule_codes(Some("AVM001, AVM004 ,, ")),
            vec!["AVM001", "AVM004"]
        );
    }

    #[test]
    fn none_yields_no_codes() {
        assert!(parse_rule_codes(None).is_empty());
    }
}
