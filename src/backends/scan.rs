//! File discovery backend
//!
//! Uses walkdir for recursive traversal

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::core::paths::has_suffix;

/// Find all regular files under `root` whose name ends with `suffix`.
///
/// Entries are visited in file-name order inside each directory. Symlinks are
/// not followed. An unreadable entry or subtree is logged and skipped; the
/// rest of the tree is still walked.
pub fn find_files(root: &Path, suffix: &str) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name();

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                log::warn!("skipping unreadable path: {}", err);
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        if has_suffix(entry.path(), suffix) {
            files.push(entry.into_path());
        }
    }

    log::debug!(
        "found {} '{}' file(s) under {}",
        files.len(),
        suffix,
        root.display()
    );
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};
    use tempfile::tempdir;

    #[test]
    fn test_find_files_empty_dir() {
        let temp = tempdir().unwrap();
        assert!(find_files(temp.path(), ".pdf").is_empty());
    }

    #[test]
    fn test_find_files_recursive_and_filtered() {
        let temp = tempdir().unwrap();
        File::create(temp.path().join("b.pdf")).unwrap();
        File::create(temp.path().join("a.pdf")).unwrap();
        File::create(temp.path().join("notes.txt")).unwrap();
        File::create(temp.path().join("upper.PDF")).unwrap();
        fs::create_dir_all(temp.path().join("sub/deeper")).unwrap();
        File::create(temp.path().join("sub/deeper/c.pdf")).unwrap();
        File::create(temp.path().join("sub/archive.zip")).unwrap();

        let pdfs = find_files(temp.path(), ".pdf");
        assert_eq!(
            pdfs,
            vec![
                temp.path().join("a.pdf"),
                temp.path().join("b.pdf"),
                temp.path().join("sub/deeper/c.pdf"),
            ]
        );

        let zips = find_files(temp.path(), ".zip");
        assert_eq!(zips, vec![temp.path().join("sub/archive.zip")]);
    }

    #[test]
    fn test_find_files_skips_directories_with_suffix() {
        let temp = tempdir().unwrap();
        fs::create_dir(temp.path().join("folder.pdf")).unwrap();
        File::create(temp.path().join("folder.pdf/inner.pdf")).unwrap();

        let pdfs = find_files(temp.path(), ".pdf");
        assert_eq!(pdfs, vec![temp.path().join("folder.pdf/inner.pdf")]);
    }

    #[test]
    fn test_find_files_missing_root() {
        let temp = tempdir().unwrap();
        assert!(find_files(&temp.path().join("missing"), ".pdf").is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_find_files_continues_past_unreadable_subtree() {
        use std::os::unix::fs::PermissionsExt;

        let temp = tempdir().unwrap();
        let locked = temp.path().join("locked");
        fs::create_dir(&locked).unwrap();
        File::create(locked.join("hidden.pdf")).unwrap();
        File::create(temp.path().join("open.pdf")).unwrap();
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        let pdfs = find_files(temp.path(), ".pdf");

        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        // root can read the locked directory anyway
        assert!(pdfs.contains(&temp.path().join("open.pdf")));
    }
}
