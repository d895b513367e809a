//! Scratch workspace
//!
//! One uniquely named temporary directory per run. It owns every file
//! extracted from archives and is removed when the `Workspace` is closed or
//! dropped, whichever happens first.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::core::paths::{make_relative, rebase};

const PREFIX: &str = "pdfsearch-";

pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    /// Create a workspace in the system temp directory, or under `parent`
    pub fn create(parent: Option<&Path>) -> Result<Self> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(PREFIX);

        let dir = match parent {
            Some(parent) => builder.tempdir_in(parent).with_context(|| {
                format!("Failed to create scratch directory in {}", parent.display())
            })?,
            None => builder
                .tempdir()
                .context("Failed to create scratch directory")?,
        };

        log::debug!("created scratch workspace {}", dir.path().display());
        Ok(Self { dir })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Directory reserved for the PDFs of one archive.
    ///
    /// Derived from the archive's location under `root`, so two archives never
    /// share a directory.
    pub fn archive_dir(&self, archive: &Path, root: &Path) -> PathBuf {
        let relative = make_relative(archive, root).unwrap_or_else(|| {
            archive
                .components()
                .filter(|c| matches!(c, std::path::Component::Normal(_)))
                .collect()
        });
        self.path().join(relative)
    }

    /// Map a path inside the workspace back to where the user would look for it
    pub fn logical_path(&self, path: &Path, root: &Path) -> PathBuf {
        rebase(path, self.path(), root)
    }

    /// Remove the workspace and everything in it
    pub fn close(self) -> std::io::Result<()> {
        let path = self.path().to_path_buf();
        self.dir.close()?;
        log::debug!("removed scratch workspace {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_create_under_parent() {
        let parent = tempdir().unwrap();
        let ws = Workspace::create(Some(parent.path())).unwrap();
        assert!(ws.path().starts_with(parent.path()));
        assert!(ws.path().is_dir());
    }

    #[test]
    fn test_close_removes_directory() {
        let parent = tempdir().unwrap();
        let ws = Workspace::create(Some(parent.path())).unwrap();
        let path = ws.path().to_path_buf();
        std::fs::write(path.join("x.pdf"), "x").unwrap();

        ws.close().unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_drop_removes_directory() {
        let parent = tempdir().unwrap();
        let path = {
            let ws = Workspace::create(Some(parent.path())).unwrap();
            std::fs::create_dir_all(ws.path().join("a/b")).unwrap();
            ws.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn test_create_in_missing_parent_fails() {
        let parent = tempdir().unwrap();
        let missing = parent.path().join("nope");
        assert!(Workspace::create(Some(&missing)).is_err());
    }

    #[test]
    fn test_archive_dir_is_unique_per_archive() {
        let parent = tempdir().unwrap();
        let ws = Workspace::create(Some(parent.path())).unwrap();
        let root = Path::new("/docs");

        let a = ws.archive_dir(Path::new("/docs/a/x.zip"), root);
        let b = ws.archive_dir(Path::new("/docs/b/x.zip"), root);
        assert_ne!(a, b);
        assert_eq!(a, ws.path().join("a/x.zip"));
    }

    #[test]
    fn test_logical_path_strips_workspace() {
        let parent = tempdir().unwrap();
        let ws = Workspace::create(Some(parent.path())).unwrap();
        let root = Path::new("/docs");

        let extracted = ws.path().join("a/x.zip/notes.pdf");
        assert_eq!(
            ws.logical_path(&extracted, root),
            PathBuf::from("/docs/a/x.zip/notes.pdf")
        );
        assert_eq!(
            ws.logical_path(Path::new("/docs/report.pdf"), root),
            PathBuf::from("/docs/report.pdf")
        );
    }
}
