//! Zip archive backend
//!
//! Copies the PDF entries of an archive into the scratch workspace so they can
//! be searched like any other file.

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use zip::ZipArchive;

use crate::core::error::ArchiveError;
use crate::core::model::PDF_SUFFIX;

/// Extract every PDF entry of `archive` into `dest`.
///
/// Returns the paths of the extracted files in archive order. Opening or
/// reading the archive directory is an error; a single bad entry is logged
/// and skipped so the remaining entries are still extracted.
pub fn extract_pdfs(archive: &Path, dest: &Path) -> Result<Vec<PathBuf>, ArchiveError> {
    let file = File::open(archive).map_err(|source| ArchiveError::Open {
        path: archive.to_path_buf(),
        source,
    })?;

    let mut zip = ZipArchive::new(file).map_err(|source| ArchiveError::Zip {
        path: archive.to_path_buf(),
        source,
    })?;

    let mut extracted = Vec::new();

    for index in 0..zip.len() {
        match extract_entry(&mut zip, index, archive, dest) {
            Ok(Some(path)) => extracted.push(path),
            Ok(None) => {}
            Err(err) => log::warn!("{}", err),
        }
    }

    log::debug!(
        "extracted {} PDF(s) from {}",
        extracted.len(),
        archive.display()
    );
    Ok(extracted)
}

fn extract_entry(
    zip: &mut ZipArchive<File>,
    index: usize,
    archive: &Path,
    dest: &Path,
) -> Result<Option<PathBuf>, ArchiveError> {
    let zip_error = |source| ArchiveError::Zip {
        path: archive.to_path_buf(),
        source,
    };

    // Decide from the raw header so entries we skip are never decompressed
    {
        let raw = zip.by_index_raw(index).map_err(zip_error)?;
        if raw.is_dir() || !raw.name().ends_with(PDF_SUFFIX) {
            return Ok(None);
        }
    }

    let mut entry = zip.by_index(index).map_err(zip_error)?;

    let relative = match entry.enclosed_name() {
        Some(name) => name,
        None => {
            log::warn!(
                "skipping unsafe entry name {:?} in {}",
                entry.name(),
                archive.display()
            );
            return Ok(None);
        }
    };

    let target = dest.join(relative);
    let name = entry.name().to_string();
    let entry_error = |source: io::Error| ArchiveError::Entry {
        path: archive.to_path_buf(),
        entry: name.clone(),
        source,
    };

    if let Some(parent) = target.parent() {
        fs::create_dir_all(parent).map_err(entry_error)?;
    }
    let mut out = File::create(&target).map_err(entry_error)?;
    if let Err(err) = io::copy(&mut entry, &mut out) {
        drop(out);
        let _ = fs::remove_file(&target);
        return Err(entry_error(err));
    }

    Ok(Some(target))
}
