//! Per-file analysis context and module-type classification.

use avm_lint_syntax::Declaration;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// File name that marks a test module.
const TEST_MODULE_FILE: &str = "main.test.bicep";

/// File name that marks a dependencies file.
const DEPENDENCIES_FILE: &str = "dependencies.bicep";

/// Path segment that roots the module tree.
const ROOT_MARKER: &str = "avm";

/// Directories directly under the root marker that hold root modules.
const ROOT_MODULE_DIRS: &[&str] = &["ptn", "res", "utl"];

/// Classification of a module file, derived from its path.
///
/// No rule branches on this yet, but it is part of the context surface for
/// rules that will.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ModuleType {
    /// The path gives no classification.
    #[default]
    NotSpecified,
    /// A top-level module under `avm/ptn`, `avm/res`, or `avm/utl`.
    RootModule,
    /// A module nested elsewhere under the `avm` tree.
    SubModule,
    /// A `main.test.bicep` test file.
    TestModule,
    /// A `dependencies.bicep` file.
    Dependencies,
}

/// Errors raised while building an analysis context.
#[derive(Debug, Error)]
pub enum ContextError {
    /// The path cannot be classified into a module type.
    #[error("invalid module path '{}': no module directory under '{ROOT_MARKER}'", path.display())]
    InvalidModulePath {
        /// The unclassifiable path.
        path: PathBuf,
    },
}

/// Per-file state passed to every rule.
///
/// Created once per analyzed file and dropped after its diagnostics have
/// been returned. The declaration sequence preserves source order exactly;
/// the module type is computed once at construction and never recomputed.
#[derive(Debug)]
pub struct AnalyzeContext {
    file_path: PathBuf,
    module_type: ModuleType,
    declarations: Vec<Declaration>,
}

impl AnalyzeContext {
    /// Builds the context for one file, classifying the module type from
    /// the path.
    ///
    /// # Errors
    ///
    /// Returns [`ContextError::InvalidModulePath`] when the path contains no
    /// `avm` segment with a directory below it. That failure is fatal for
    /// the file: no diagnostics are produced for it.
    pub fn new(
        file_path: impl Into<PathBuf>,
        declarations: Vec<Declaration>,
    ) -> Result<Self, ContextError> {
        let file_path = file_path.into();
        let module_type = classify_module_type(&file_path)?;
        Ok(Self {
            file_path,
            module_type,
            declarations,
        })
    }

    /// The file being analyzed.
    #[must_use]
    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// The path-derived module classification.
    #[must_use]
    pub fn module_type(&self) -> ModuleType {
        self.module_type
    }

    /// The top-level declarations, in source order.
    #[must_use]
    pub fn declarations(&self) -> &[Declaration] {
        &self.declarations
    }
}

/// Derives the module type from the file path.
///
/// `main.test.bicep` and `dependencies.bicep` classify by file name alone.
/// Anything else must live under an `avm` path segment: the segment directly
/// below the first `avm` decides between root module (`ptn`, `res`, `utl`)
/// and submodule.
fn classify_module_type(path: &Path) -> Result<ModuleType, ContextError> {
    if let Some(file_name) = path.file_name().and_then(|n| n.to_str()) {
        if file_name == TEST_MODULE_FILE {
            return Ok(ModuleType::TestModule);
        }
        if file_name == DEPENDENCIES_FILE {
            return Ok(ModuleType::Dependencies);
        }
    }

    let segments: Vec<&str> = path
        .components()
        .filter_map(|c| match c {
            std::path::Component::Normal(s) => s.to_str(),
            _ => None,
        })
        .collect();

    let index = match segments.iter().position(|s| *s == ROOT_MARKER) {
        Some(found) if found + 1 < segments.len() => found + 1,
        _ => {
            return Err(ContextError::InvalidModulePath {
                path: path.to_path_buf(),
            });
        }
    };

    let top_dir = segments[index - 1];
    let sub_dir = segments[index];

    if top_dir == ROOT_MARKER && ROOT_MODULE_DIRS.contains(&sub_dir) {
        Ok(ModuleType::RootModule)
    } else if top_dir == ROOT_MARKER {
        Ok(ModuleType::SubModule)
    } else {
        Ok(ModuleType::NotSpecified)
    }
}
