//! pdfsearch - Find PDF files containing a search term
//!
//! pdfsearch provides:
//! - Recursive discovery of PDFs and zip archives
//! - Extraction of PDFs stored inside zip archives into a scratch directory
//! - Text extraction through an external tool (pdftotext by default)
//! - Literal line matching with highlighted output

use anyhow::Result;
use clap::Parser;

mod backends;
mod cli;
mod core;
mod flows;

fn main() -> Result<()> {
    let cli = cli::Cli::try_parse().unwrap_or_else(|err| cli::exit_on_parse_error(err));
    cli::run(cli)
}
