//! Per-file error types
//!
//! These errors never abort a run: the orchestrator logs them and moves on to
//! the next file or archive.

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Failure to turn a document into plain text
#[derive(Debug, Error)]
pub enum ExtractionError {
    #[error("{tool} is not installed or not on PATH")]
    ToolMissing { tool: String },

    #[error("failed to run {tool}: {source}")]
    Spawn {
        tool: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{tool} exited with {status}{}", stderr_detail(.stderr))]
    Failed {
        tool: String,
        status: ExitStatus,
        stderr: String,
    },
}

fn stderr_detail(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(": {}", stderr)
    }
}

/// Failure to read a zip archive or one of its entries
#[derive(Debug, Error)]
pub enum ArchiveError {
    #[error("cannot open archive {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot read archive {}: {source}", path.display())]
    Zip {
        path: PathBuf,
        #[source]
        source: zip::result::ZipError,
    },

    #[error("cannot extract {entry} from {}: {source}", path.display())]
    Entry {
        path: PathBuf,
        entry: String,
        #[source]
        source: std::io::Error,
    },
}
