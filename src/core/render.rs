//! Console rendering
//!
//! Highlighting of search terms plus the fixed pieces of console output:
//! banner, progress lines, per-file reports and the closing summary.
//! Colour is applied through `colored`, so `--no-color`, `NO_COLOR` and
//! non-terminal stdout all turn emphasis off in one place.

use colored::{ColoredString, Colorize};

use crate::core::model::{FileReport, SearchSummary};

/// Visual role of an emphasised piece of text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Emphasis {
    /// `[*]` / `[+]` decorations
    Marker,
    /// Occurrences of the search term
    Match,
    /// File path labels
    Label,
}

impl Emphasis {
    pub fn paint(self, text: &str) -> ColoredString {
        match self {
            Emphasis::Marker => text.yellow().bold(),
            Emphasis::Match => text.red().bold(),
            Emphasis::Label => text.green().bold(),
        }
    }
}

/// Wrap every occurrence of `term` in `text` with the given emphasis.
///
/// Everything outside the occurrences is left byte-for-byte intact.
pub fn highlight(text: &str, term: &str, emphasis: Emphasis) -> String {
    if term.is_empty() {
        return text.to_string();
    }
    let painted = emphasis.paint(term).to_string();
    text.replace(term, &painted)
}

const BANNER: &str = r#"
 ################################################################
 #             _  __                         _                  #
 #            | |/ _|                       | |                 #
 #   _ __   __| | |_ ___  ___  __ _ _ __ ___| |__               #
 #  | '_ \ / _` |  _/ __|/ _ \/ _` | '__/ __| '_ \              #
 #  | |_) | (_| | | \__ \  __/ (_| | | | (__| | | |             #
 #  | .__/ \__,_|_| |___/\___|\__,_|_|  \___|_| |_|             #
 #  | |                                                         #
 #  |_|                                                         #
 #                                                              #
 #  Usage: pdfsearch <STARTING_DIR> <SEARCH_TERM>               #
 #  - extracts text with pdftotext and matches it line by line  #
 #  - includes PDFs found inside zip archives                   #
 #                                                              #
 ################################################################
"#;

pub fn render_banner() -> &'static str {
    BANNER
}

/// A `[*] ...` progress line
pub fn render_progress(message: &str) -> String {
    format!("{} {}", Emphasis::Marker.paint("[*]"), message)
}

/// `[+] <path>:` followed by one `<line>:<text>` row per match
pub fn render_report(report: &FileReport, term: &str) -> String {
    let mut out = format!(
        "{} {}:",
        Emphasis::Marker.paint("[+]"),
        Emphasis::Label.paint(&report.path.display().to_string())
    );

    for record in &report.matches {
        out.push('\n');
        out.push_str(&format!(
            "{}:{}",
            record.line,
            highlight(&record.text, term, Emphasis::Match)
        ));
    }

    out
}

pub fn render_summary(summary: &SearchSummary) -> String {
    let mut line = format!(
        "Searched {} PDF file(s), {} with matches",
        summary.files_searched, summary.files_matched
    );
    if summary.had_errors() {
        line.push_str(&format!(
            " ({} unreadable file(s), {} unreadable archive(s))",
            summary.files_failed, summary.archives_failed
        ));
    }
    render_progress(&line)
}
