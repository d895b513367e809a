//! Search model
//!
//! Every stage of a run works on these types: the request is built once by the
//! CLI and passed explicitly, match records come out of the search adapter,
//! and file reports are rendered and then dropped.

use std::path::PathBuf;

/// Suffix identifying PDF documents
pub const PDF_SUFFIX: &str = ".pdf";

/// Suffix identifying zip archives
pub const ZIP_SUFFIX: &str = ".zip";

/// What to search for and where. Immutable for the whole run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchRequest {
    /// Starting directory of the traversal
    pub root: PathBuf,

    /// Literal, case-sensitive search term
    pub term: String,
}

impl SearchRequest {
    pub fn new(root: impl Into<PathBuf>, term: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            term: term.into(),
        }
    }
}

/// A single matching line of extracted text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchRecord {
    /// 1-based line number within the extracted text
    pub line: u32,

    /// Line text without its trailing newline
    pub text: String,
}

impl MatchRecord {
    pub fn new(line: u32, text: impl Into<String>) -> Self {
        Self {
            line,
            text: text.into(),
        }
    }
}

/// Matches found in one file, keyed by the path shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileReport {
    pub path: PathBuf,
    pub matches: Vec<MatchRecord>,
}

impl FileReport {
    pub fn new(path: impl Into<PathBuf>, matches: Vec<MatchRecord>) -> Self {
        Self {
            path: path.into(),
            matches,
        }
    }
}

/// Counters collected over one run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchSummary {
    /// PDFs handed to the search adapter (direct and extracted)
    pub files_searched: usize,

    /// PDFs with at least one match
    pub files_matched: usize,

    /// PDFs whose text could not be extracted
    pub files_failed: usize,

    /// Zip archives that could not be opened
    pub archives_failed: usize,
}

impl SearchSummary {
    /// Whether any per-file or per-archive error was recovered from
    pub fn had_errors(&self) -> bool {
        self.files_failed > 0 || self.archives_failed > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_request_new() {
        let request = SearchRequest::new("/docs", "Revenue");
        assert_eq!(request.root, PathBuf::from("/docs"));
        assert_eq!(request.term, "Revenue");
    }

    #[test]
    fn test_file_report_new() {
        let report = FileReport::new("a.pdf", vec![MatchRecord::new(3, "Q3 Revenue up")]);
        assert_eq!(report.path, PathBuf::from("a.pdf"));
        assert_eq!(report.matches[0].line, 3);
    }

    #[test]
    fn test_summary_had_errors() {
        let mut summary = SearchSummary::default();
        assert!(!summary.had_errors());

        summary.archives_failed = 1;
        assert!(summary.had_errors());
    }
}
