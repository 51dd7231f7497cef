//! avm-lint CLI tool.
//!
//! Usage:
//! ```bash
//! avm-lint check [OPTIONS] [SOURCE]
//! avm-lint list-rules
//! avm-lint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;
mod files;

/// Lints Azure Verified Modules Bicep files against the AVM conventions
#[derive(Parser)]
#[command(name = "avm-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the convention checks
    Check {
        /// Bicep file, or directory that contains the Bicep files
        #[arg(default_value = ".")]
        source: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Do not search the directory recursively
        #[arg(long)]
        no_recursive: bool,

        /// File-name pattern used to select files (supports * and ?)
        #[arg(long)]
        filter: Option<String>,

        /// Only run the rules with these codes (comma-separated)
        #[arg(long, value_name = "CODES")]
        only_rules: Option<String>,

        /// Skip the rules with these codes (comma-separated)
        #[arg(long, value_name = "CODES")]
        exclude_rules: Option<String>,

        /// Stop processing further files once this many issues were found
        #[arg(long, value_name = "N")]
        max_issues: Option<usize>,
    },

    /// List available rules
    ListRules,

    /// Initialize a configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-diagnostic compact format.
    Compact,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    match cli.command {
        Commands::Check {
            source,
            format,
            no_recursive,
            filter,
            only_rules,
            exclude_rules,
            max_issues,
        } => commands::check::run(&commands::check::CheckOptions {
            source,
            format,
            no_recursive,
            filter,
            only_rules,
            exclude_rules,
            max_issues,
            config: cli.config,
        }),
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}
