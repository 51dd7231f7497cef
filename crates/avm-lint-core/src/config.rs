//! Configuration types for avm-lint.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Top-level configuration for a lint run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// File discovery settings.
    #[serde(default)]
    pub analyzer: AnalyzerConfig,

    /// Rule selection by code.
    #[serde(default)]
    pub rules: RuleSelection,
}

impl Config {
    /// Creates a new default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::parse(&content)
    }

    /// Parses configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid.
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }
}

/// File discovery settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzerConfig {
    /// File-name pattern selecting the files to lint.
    #[serde(default = "default_filter")]
    pub filter: String,

    /// Whether directories are searched recursively.
    #[serde(default = "default_true")]
    pub recursive: bool,
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        Self {
            filter: default_filter(),
            recursive: true,
        }
    }
}

fn default_filter() -> String {
    "*main.bicep".to_string()
}

fn default_true() -> bool {
    true
}

/// Which rules execute, selected by code.
///
/// `only`, when non-empty, disables everything it does not name; `exclude`
/// then disables the codes it names. The selection is built once, from
/// arguments and config, before any file is analyzed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuleSelection {
    /// Codes of the only rules to run.
    #[serde(default)]
    pub only: Vec<String>,

    /// Codes of rules to skip.
    #[serde(default)]
    pub exclude: Vec<String>,
}

impl RuleSelection {
    /// Returns `true` when neither list names a code.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.only.is_empty() && self.exclude.is_empty()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// IO error reading the config file.
    #[error("failed to read config file {path}: {source}")]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying IO error.
        source: std::io::Error,
    },

    /// Parse error in the config file.
    #[error("failed to parse config: {message}")]
    Parse {
        /// Parse error message.
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let config = Config::default();
        assert_eq!(config.analyzer.filter, "*main.bicep");
        assert!(config.analyzer.recursive);
        assert!(config.rules.is_empty());
    }

    #[test]
    fn parses_full_config() {
        let toml = r#"
[analyzer]
filter = "*.bicep"
recursive = false

[rules]
only = ["AVM001", "AVM004"]
exclude = ["AVM004"]
"#;

        let config = Config::parse(toml).expect("config parses");
        assert_eq!(config.analyzer.filter, "*.bicep");
        assert!(!config.analyzer.recursive);
        assert_eq!(config.rules.only, vec!["AVM001", "AVM004"]);
        assert_eq!(config.rules.exclude, vec!["AVM004"]);
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config = Config::parse("").expect("config parses");
        assert_eq!(config.analyzer.filter, "*main.bicep");
        assert!(config.rules.is_empty());
    }

    #[test]
    fn invalid_toml_is_a_parse_error() {
        let err = Config::parse("analyzer = nonsense").expect_err("config must not parse");
        assert!(matches!(err, ConfigError::Parse { .. }));
    }
}
