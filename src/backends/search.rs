//! Line search over extracted text
//!
//! Numbers the lines of a document's text and keeps the ones that contain the
//! search term as a literal, case-sensitive substring.

use std::path::Path;

use crate::backends::extract::TextExtractor;
use crate::core::error::ExtractionError;
use crate::core::model::MatchRecord;

/// Pair every non-empty line of `text` with its 1-based line number.
///
/// Empty lines are dropped without taking a number, as `nl` does by default;
/// whitespace-only lines still count.
pub fn number_lines(text: &str) -> impl Iterator<Item = (u32, &str)> {
    text.lines()
        .filter(|line| !line.is_empty())
        .zip(1u32..)
        .map(|(line, n)| (n, line))
}

/// Keep the numbered lines containing `term`
pub fn match_lines(text: &str, term: &str) -> Vec<MatchRecord> {
    number_lines(text)
        .filter(|(_, line)| line.contains(term))
        .map(|(n, line)| MatchRecord::new(n, line))
        .collect()
}

/// Extract the text of `path` and return the lines containing `term`
pub fn search_file(
    extractor: &dyn TextExtractor,
    path: &Path,
    term: &str,
) -> Result<Vec<MatchRecord>, ExtractionError> {
    let text = extractor.extract(path)?;
    let matches = match_lines(&text, term);
    log::debug!("{}: {} matching line(s)", path.display(), matches.len());
    Ok(matches)
}
