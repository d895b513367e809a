//! CLI module - Command-line interface definition and handler

use anyhow::Result;
use clap::builder::NonEmptyStringValueParser;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};
use log::LevelFilter;
use std::path::PathBuf;

use crate::backends::doctor::run_doctor;
use crate::backends::extract::{CommandExtractor, DEFAULT_EXTRACTOR};
use crate::core::model::SearchRequest;
use crate::flows::search::{run_search, SearchOptions};

/// Exit status for a bad invocation
pub const USAGE_EXIT_CODE: i32 = 1;

/// pdfsearch - find PDF files (including PDFs inside zip archives) containing a term.
#[derive(Parser, Debug)]
#[command(name = "pdfsearch")]
#[command(
    author,
    version,
    about,
    long_about = r#"pdfsearch walks STARTING_DIR, extracts the text of every PDF it finds
(including PDFs stored inside zip archives) and prints each file whose text
contains SEARCH_TERM, followed by the matching lines and their line numbers.

Matching is literal and case-sensitive. Text extraction is delegated to an
external program (pdftotext from poppler by default), invoked as
`<PROGRAM> <file> -`.

PDFs found in zip archives are unpacked into a scratch directory that is
removed when the run ends.

Examples:
    pdfsearch ~/Documents Revenue
    pdfsearch --no-color ./reports "Q3 forecast"
    pdfsearch --check-tools
"#
)]
pub struct Cli {
    /// Directory to search recursively.
    #[arg(value_name = "STARTING_DIR", required_unless_present = "check_tools")]
    pub starting_dir: Option<PathBuf>,

    /// Literal, case-sensitive text to look for.
    #[arg(
        value_name = "SEARCH_TERM",
        required_unless_present = "check_tools",
        value_parser = NonEmptyStringValueParser::new()
    )]
    pub search_term: Option<String>,

    /// Program used to extract text from PDFs.
    #[arg(
        long,
        env = "PDFSEARCH_EXTRACTOR",
        default_value = DEFAULT_EXTRACTOR,
        value_name = "PROGRAM",
        long_help = "Program used to extract text from PDFs. It is run as `<PROGRAM> <file> -`\n\
and must write plain text to stdout, exiting non-zero on failure."
    )]
    pub extractor: String,

    /// Parent directory for the scratch workspace.
    #[arg(
        long,
        env = "PDFSEARCH_SCRATCH_DIR",
        value_name = "DIR",
        long_help = "Parent directory for the scratch workspace that receives PDFs extracted\n\
from zip archives (defaults to the system temp directory). The workspace itself\n\
is always a fresh, uniquely named subdirectory and is removed at the end of the run."
    )]
    pub scratch_dir: Option<PathBuf>,

    /// Disable colored output.
    #[arg(
        long,
        long_help = "Disable colored output. Color is also disabled when stdout is not a\n\
terminal or when NO_COLOR is set."
    )]
    pub no_color: bool,

    /// Do not print the banner.
    #[arg(long)]
    pub no_banner: bool,

    /// Quiet mode (matches only).
    #[arg(
        short,
        long,
        conflicts_with = "verbose",
        long_help = "Omit the banner and progress lines. Matching files and warnings about\n\
skipped files or archives are still printed."
    )]
    pub quiet: bool,

    /// Verbose mode (more diagnostics).
    #[arg(
        short,
        long,
        long_help = "Enable debug diagnostics on stderr. RUST_LOG overrides the level."
    )]
    pub verbose: bool,

    /// Check that the text extractor is installed, then exit.
    #[arg(long)]
    pub check_tools: bool,
}

/// Handle a clap parse failure: help and version exit 0, anything else
/// prints the error with usage and exits with [`USAGE_EXIT_CODE`].
pub fn exit_on_parse_error(err: clap::Error) -> ! {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        _ => {
            let _ = err.print();
            std::process::exit(USAGE_EXIT_CODE)
        }
    }
}

fn invalid_invocation(message: String) -> ! {
    let err = Cli::command().error(ErrorKind::ValueValidation, message);
    let _ = err.print();
    std::process::exit(USAGE_EXIT_CODE)
}

/// Skipped files and archives are logged at warn, so warn stays the floor
/// even in quiet mode.
fn log_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    }
}

fn init_logging(verbose: bool) {
    let level = log_level(verbose);

    env_logger::Builder::new()
        .filter_level(level)
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env()
        .init();
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    init_logging(cli.verbose);

    if cli.no_color {
        colored::control::set_override(false);
    }

    let extractor = CommandExtractor::new(cli.extractor);

    if cli.check_tools {
        let ok = run_doctor(&extractor)?;
        if !ok {
            std::process::exit(1);
        }
        return Ok(());
    }

    let (Some(root), Some(term)) = (cli.starting_dir, cli.search_term) else {
        invalid_invocation("STARTING_DIR and SEARCH_TERM are required".to_string());
    };

    if !root.is_dir() {
        invalid_invocation(format!("'{}' is not a directory", root.display()));
    }

    let request = SearchRequest::new(root, term);
    let options = SearchOptions {
        scratch_parent: cli.scratch_dir,
        banner: !cli.no_banner,
        quiet: cli.quiet,
    };

    let summary = run_search(&request, &extractor, &options)?;
    log::debug!("{:?}", summary);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_two_positionals() {
        let cli = Cli::try_parse_from(["pdfsearch", "/docs", "Revenue"]).unwrap();
        assert_eq!(cli.starting_dir, Some(PathBuf::from("/docs")));
        assert_eq!(cli.search_term.as_deref(), Some("Revenue"));
        assert!(!cli.check_tools);
    }

    #[test]
    fn test_parse_rejects_wrong_counts() {
        assert!(Cli::try_parse_from(["pdfsearch"]).is_err());
        assert!(Cli::try_parse_from(["pdfsearch", "/docs"]).is_err());
        assert!(Cli::try_parse_from(["pdfsearch", "/docs", "a", "b"]).is_err());
    }

    #[test]
    fn test_parse_rejects_empty_term() {
        assert!(Cli::try_parse_from(["pdfsearch", "/docs", ""]).is_err());
    }

    #[test]
    fn test_check_tools_needs_no_positionals() {
        let cli = Cli::try_parse_from(["pdfsearch", "--check-tools"]).unwrap();
        assert!(cli.check_tools);
        assert!(cli.starting_dir.is_none());
    }

    #[test]
    fn test_log_level_keeps_warnings() {
        assert_eq!(log_level(false), LevelFilter::Warn);
        assert_eq!(log_level(true), LevelFilter::Debug);
    }

    #[test]
    fn test_quiet_conflicts_with_verbose() {
        assert!(Cli::try_parse_from(["pdfsearch", "-q", "-v", "/docs", "x"]).is_err());
    }
}
