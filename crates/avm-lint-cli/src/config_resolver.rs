//! Configuration file lookup.
//!
//! A run loads at most one configuration file: the path given with
//! `--config`, else the first project file next to the linted sources
//! (`avm-lint.toml`, then `.avm-lint.toml`), else the per-user file under
//! `~/.avm-lint/`. When none exists the built-in defaults apply.

use std::path::{Path, PathBuf};

/// Candidate file names next to the linted sources, in lookup order.
const PROJECT_FILES: &[&str] = &["avm-lint.toml", ".avm-lint.toml"];

/// File name of the per-user fallback configuration.
const GLOBAL_FILE: &str = "config.toml";

/// Outcome of the configuration lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// The path passed with `--config`, used as given.
    Explicit(PathBuf),
    /// A file found next to the linted sources.
    Project(PathBuf),
    /// The per-user fallback file.
    Global(PathBuf),
    /// Nothing found; built-in defaults apply.
    Default,
}

impl ConfigSource {
    /// The file to load, when the lookup found one.
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Explicit(path) | Self::Project(path) | Self::Global(path) => Some(path),
            Self::Default => None,
        }
    }

    /// Whether the per-user fallback was chosen.
    #[must_use]
    pub fn is_global(&self) -> bool {
        matches!(self, Self::Global(_))
    }
}

/// Looks up the configuration file for sources under `project_dir`.
///
/// An explicit path short-circuits the search and is not checked for
/// existence; a missing file should surface as a load error, not fall
/// through to a different config.
#[must_use]
pub fn resolve(project_dir: &Path, explicit: Option<&Path>) -> ConfigSource {
    lookup(project_dir, explicit, user_config_dir().as_deref())
}

fn lookup(project_dir: &Path, explicit: Option<&Path>, user_dir: Option<&Path>) -> ConfigSource {
    if let Some(path) = explicit {
        return ConfigSource::Explicit(path.to_path_buf());
    }

    if let Some(found) = PROJECT_FILES
        .iter()
        .map(|name| project_dir.join(name))
        .find(|candidate| candidate.is_file())
    {
        tracing::debug!("found project config: {}", found.display());
        return ConfigSource::Project(found);
    }

    match user_dir.map(|dir| dir.join(GLOBAL_FILE)) {
        Some(found) if found.is_file() => {
            tracing::debug!("found global config: {}", found.display());
            ConfigSource::Global(found)
        }
        _ => ConfigSource::Default,
    }
}

/// Directory holding the per-user configuration.
///
/// `AVM_LINT_CONFIG_DIR` overrides the `~/.avm-lint` default so tests and
/// CI setups can redirect the lookup.
fn user_config_dir() -> Option<PathBuf> {
    std::env::var_os("AVM_LINT_CONFIG_DIR")
        .map(PathBuf::from)
        .or_else(|| home::home_dir().map(|home| home.join(".avm-lint")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn dir_with(files: &[&str]) -> TempDir {
        let tmp = TempDir::new().expect("temp dir");
        for name in files {
            fs::write(tmp.path().join(name), "").expect("write file");
        }
        tmp
    }

    #[test]
    fn explicit_path_wins_and_is_not_checked() {
        let project = dir_with(&["avm-lint.toml"]);
        let source = lookup(project.path(), Some(Path::new("elsewhere.toml")), None);
        assert_eq!(
            source,
            ConfigSource::Explicit(PathBuf::from("elsewhere.toml"))
        );
    }

    #[test]
    fn project_file_beats_the_user_fallback() {
        let project = dir_with(&["avm-lint.toml"]);
        let user = dir_with(&["config.toml"]);
        let source = lookup(project.path(), None, Some(user.path()));
        assert!(matches!(source, ConfigSource::Project(_)));
    }

    #[test]
    fn undotted_project_file_is_preferred() {
        let project = dir_with(&["avm-lint.toml", ".avm-lint.toml"]);
        let source = lookup(project.path(), None, None);
        assert_eq!(
            source.path(),
            Some(project.path().join("avm-lint.toml").as_path())
        );
    }

    #[test]
    fn dotted_project_file_is_found_alone() {
        let project = dir_with(&[".avm-lint.toml"]);
        let source = lookup(project.path(), None, None);
        assert_eq!(
            source.path(),
            Some(project.path().join(".avm-lint.toml").as_path())
        );
    }

    #[test]
    fn user_fallback_applies_when_the_project_has_none() {
        let project = dir_with(&[]);
        let user = dir_with(&["config.toml"]);
        let source = lookup(project.path(), None, Some(user.path()));
        assert!(source.is_global());
        assert_eq!(
            source.path(),
            Some(user.path().join("config.toml").as_path())
        );
    }

    #[test]
    fn nothing_found_means_defaults() {
        let project = dir_with(&[]);
        let empty_user = dir_with(&[]);
        assert_eq!(
            lookup(project.path(), None, Some(empty_user.path())),
            ConfigSource::Default
        );
        assert_eq!(lookup(project.path(), None, None), ConfigSource::Default);
        assert!(ConfigSource::Default.path().is_none());
        assert!(!ConfigSource::Default.is_global());
    }
}
