//! Recursive extension search.

use std::path::{Path, PathBuf};
use tracing::debug;
use walkdir::WalkDir;

use crate::errors::GatherError;

/// Strip leading dots so both `"flac"` and `".flac"` are accepted.
pub fn normalize_extension(extension: &str) -> &str {
    extension.trim_start_matches('.')
}

/// Recursively collect every file under `root` whose name ends with `.<ext>`.
///
/// The returned order follows the filesystem walk and is unspecified.
/// Matching is an exact suffix comparison, so case sensitivity follows
/// whatever names the filesystem reports. Directories never match, and
/// unreadable entries encountered during the walk are skipped.
pub fn find_by_extension(root: &Path, extension: &str) -> Result<Vec<PathBuf>, GatherError> {
    if !root.exists() {
        return Err(GatherError::PathNotFound(root.to_path_buf()));
    }
    if !root.is_dir() {
        return Err(GatherError::NotADirectory(root.to_path_buf()));
    }

    let suffix = format!(".{}", normalize_extension(extension));

    let matches: Vec<PathBuf> = WalkDir::new(root)
        .min_depth(1)
        .into_iter()
        .filter_map(Result::ok)
        .filter(|e| e.file_type().is_file())
        .filter(|e| e.file_name().to_string_lossy().ends_with(&suffix))
        .map(|e| e.into_path())
        .collect();

    debug!(root = %root.display(), suffix, count = matches.len(), "search finished");
    Ok(matches)
}
