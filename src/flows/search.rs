//! Search flow - Find PDFs containing a term
//!
//! Steps:
//! 1. Create the scratch workspace
//! 2. Discover zip archives and PDFs under the root
//! 3. Extract the PDFs inside each archive into the workspace
//! 4. Search every PDF, then print one report per matching file
//! 5. Remove the workspace and print a summary

use anyhow::Result;
use std::path::PathBuf;

use crate::backends::archive::extract_pdfs;
use crate::backends::extract::TextExtractor;
use crate::backends::scan::find_files;
use crate::backends::search::search_file;
use crate::core::error::ExtractionError;
use crate::core::model::{
    FileReport, MatchRecord, SearchRequest, SearchSummary, PDF_SUFFIX, ZIP_SUFFIX,
};
use crate::core::render::{render_banner, render_progress, render_report, render_summary};
use crate::core::workspace::Workspace;

/// Run-level settings that do not change what is searched
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Parent directory for the scratch workspace (system temp dir if unset)
    pub scratch_parent: Option<PathBuf>,

    /// Print the banner before searching
    pub banner: bool,

    /// Suppress banner and progress lines
    pub quiet: bool,
}

/// Reports for the files that matched, in search order
#[derive(Debug, Default)]
pub struct SearchOutcome {
    pub reports: Vec<FileReport>,
    pub summary: SearchSummary,
}

/// Run the search flow end to end, printing to stdout
pub fn run_search(
    request: &SearchRequest,
    extractor: &dyn TextExtractor,
    options: &SearchOptions,
) -> Result<SearchSummary> {
    let progress = |message: String| {
        if !options.quiet {
            println!("{}", render_progress(&message));
        }
    };

    if options.banner && !options.quiet {
        println!("{}", render_banner());
    }
    progress(format!(
        "Searching {} for \"{}\"...",
        request.root.display(),
        request.term
    ));

    // Removed on drop from here on, whatever happens below
    let workspace = Workspace::create(options.scratch_parent.as_deref())?;
    progress(format!(
        "Creating temp directory {} for extracted zip files...",
        workspace.path().display()
    ));

    if !extractor.is_available() {
        log::warn!(
            "{} was not found; PDFs cannot be searched until it is installed",
            extractor.name()
        );
    }

    let outcome = collect_matches(request, extractor, &workspace);

    for report in &outcome.reports {
        println!("{}", render_report(report, &request.term));
    }

    progress(format!(
        "Deleting temp directory {} and all contents...",
        workspace.path().display()
    ));
    if let Err(err) = workspace.close() {
        log::warn!("failed to remove scratch directory: {}", err);
    }

    progress("Your search is complete!".to_string());
    if !options.quiet {
        println!("{}", render_summary(&outcome.summary));
    }

    Ok(outcome.summary)
}

/// Discover, extract and search; nothing is printed
pub fn collect_matches(
    request: &SearchRequest,
    extractor: &dyn TextExtractor,
    workspace: &Workspace,
) -> SearchOutcome {
    let mut summary = SearchSummary::default();

    // Step 1: discovery
    let zips = find_files(&request.root, ZIP_SUFFIX);
    let mut pdfs = find_files(&request.root, PDF_SUFFIX);

    // Step 2: unpack archives
    for zip in &zips {
        let dest = workspace.archive_dir(zip, &request.root);
        match extract_pdfs(zip, &dest) {
            Ok(extracted) => pdfs.extend(extracted),
            Err(err) => {
                log::warn!("{}", err);
                summary.archives_failed += 1;
            }
        }
    }

    // Step 3: search everything before reporting anything
    let results = search_pdfs(&pdfs, extractor, &request.term);

    let mut reports = Vec::new();
    for (path, result) in pdfs.iter().zip(results) {
        summary.files_searched += 1;
        let logical = workspace.logical_path(path, &request.root);

        match result {
            Ok(matches) if matches.is_empty() => {}
            Ok(matches) => {
                summary.files_matched += 1;
                reports.push(FileReport::new(logical, matches));
            }
            Err(err) => {
                log::warn!("skipping {}: {}", logical.display(), err);
                summary.files_failed += 1;
            }
        }
    }

    SearchOutcome { reports, summary }
}

#[cfg(not(feature = "parallel"))]
fn search_pdfs(
    pdfs: &[PathBuf],
    extractor: &dyn TextExtractor,
    term: &str,
) -> Vec<Result<Vec<MatchRecord>, ExtractionError>> {
    pdfs.iter()
        .map(|pdf| search_file(extractor, pdf, term))
        .collect()
}

// Results come back in input order, so reports never interleave
#[cfg(feature = "parallel")]
fn search_pdfs(
    pdfs: &[PathBuf],
    extractor: &dyn TextExtractor,
    term: &str,
) -> Vec<Result<Vec<MatchRecord>, ExtractionError>> {
    use rayon::prelude::*;

    pdfs.par_iter()
        .map(|pdf| search_file(extractor, pdf, term))
        .collect()
}
