//! Init command implementation.

use anyhow::{bail, Result};
use std::path::Path;

const DEFAULT_CONFIG: &str = r#"# avm-lint configuration

[analyzer]
# File-name pattern used to select the files to lint
filter = "*main.bicep"

# Search directories recursively
recursive = true

# Rule selection by code
# `only` disables every rule it does not name; `exclude` skips the named ones
[rules]
# only = ["AVM001", "AVM002"]
# exclude = ["AVM004"]
"#;

/// Runs the init command.
pub fn run(force: bool) -> Result<()> {
    let config_path = Path::new("avm-lint.toml");

    if config_path.exists() && !force {
        bail!(
            "Configuration file already exists at {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(config_path, DEFAULT_CONFIG)?;

    println!("Created avm-lint.toml");
    println!("\nNext steps:");
    println!("  1. Edit avm-lint.toml to configure file discovery and rules");
    println!("  2. Run: avm-lint check");

    Ok(())
}
