//! File discovery for the check command.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Finds the files to lint.
///
/// A file source is returned as-is. A directory is searched for file names
/// matching `pattern`, recursively unless disabled. Results are sorted so
/// the batch order is deterministic.
///
/// # Errors
///
/// Fails when the source is neither a file nor a directory, the pattern is
/// not a valid glob, or the directory walk hits an I/O error.
pub fn find_files(source: &Path, recursive: bool, pattern: &str) -> Result<Vec<PathBuf>> {
    if source.is_file() {
        return Ok(vec![source.to_path_buf()]);
    }
    if !source.is_dir() {
        bail!(
            "source '{}' is neither a file nor a directory",
            source.display()
        );
    }

    let pattern = glob::Pattern::new(pattern)
        .with_context(|| format!("invalid filter pattern '{pattern}'"))?;

    let mut walker = WalkDir::new(source);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files = Vec::new();
    for entry in walker {
        let entry = entry.context("failed to read directory entry")?;
        if !entry.file_type().is_file() {
            continue;
        }
        if pattern.matches(&entry.file_name().to_string_lossy()) {
            files.push(entry.into_path());
        }
    }

    files.sort();
    Ok(files)
}
