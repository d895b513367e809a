//! Path utilities
//!
//! Suffix matching for discovery and mapping of scratch-workspace paths back
//! to the logical paths a user recognises.

use std::path::{Path, PathBuf};

/// Make a path relative to the root directory
pub fn make_relative(path: &Path, root: &Path) -> Option<PathBuf> {
    path.strip_prefix(root).ok().map(Path::to_path_buf)
}

/// Check whether the file name of `path` ends with `suffix` (case-sensitive)
pub fn has_suffix(path: &Path, suffix: &str) -> bool {
    path.file_name()
        .map(|name| name.to_string_lossy().ends_with(suffix))
        .unwrap_or(false)
}

/// Replace the `from` prefix of `path` with `to`.
///
/// Paths outside `from` are returned unchanged.
pub fn rebase(path: &Path, from: &Path, to: &Path) -> PathBuf {
    match path.strip_prefix(from) {
        Ok(rest) => to.join(rest),
        Err(_) => path.to_path_buf(),
    }
}
