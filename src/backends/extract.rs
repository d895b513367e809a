//! Text extraction backend
//!
//! Turning a document into plain text is delegated to an external program
//! (pdftotext by default). The rest of the crate only sees the
//! [`TextExtractor`] capability, so tests can swap in an in-memory fake.

use std::io::ErrorKind;
use std::path::Path;
use std::process::{Command, Stdio};

use crate::core::error::ExtractionError;
use crate::core::util::{command_exists, one_line};

/// Default extraction program
pub const DEFAULT_EXTRACTOR: &str = "pdftotext";

/// Given a file, return its plain text
pub trait TextExtractor: Send + Sync {
    /// Program or backend name, for diagnostics
    fn name(&self) -> &str;

    /// Extract the plain text of `path`
    fn extract(&self, path: &Path) -> Result<String, ExtractionError>;

    /// Whether the backend can run at all on this system
    fn is_available(&self) -> bool {
        true
    }
}

/// Runs `<program> <file> -` and reads the text from its stdout
#[derive(Debug, Clone)]
pub struct CommandExtractor {
    program: String,
}

impl CommandExtractor {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for CommandExtractor {
    fn default() -> Self {
        Self::new(DEFAULT_EXTRACTOR)
    }
}

impl TextExtractor for CommandExtractor {
    fn name(&self) -> &str {
        &self.program
    }

    fn extract(&self, path: &Path) -> Result<String, ExtractionError> {
        let output = Command::new(&self.program)
            .arg(path)
            .arg("-")
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .output()
            .map_err(|source| match source.kind() {
                ErrorKind::NotFound => ExtractionError::ToolMissing {
                    tool: self.program.clone(),
                },
                _ => ExtractionError::Spawn {
                    tool: self.program.clone(),
                    source,
                },
            })?;

        if !output.status.success() {
            return Err(ExtractionError::Failed {
                tool: self.program.clone(),
                status: output.status,
                stderr: one_line(&output.stderr),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn is_available(&self) -> bool {
        command_exists(&self.program)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_default_program() {
        assert_eq!(CommandExtractor::default().name(), "pdftotext");
    }

    #[test]
    fn test_missing_tool() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("a.pdf");
        fs::write(&file, "x").unwrap();

        let extractor = CommandExtractor::new("definitely-not-a-real-tool-4821");
        assert!(!extractor.is_available());
        let err = extractor.extract(&file).unwrap_err();
        assert!(matches!(err, ExtractionError::ToolMissing { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_cat_as_extractor() {
        let temp = tempdir().unwrap();
        let file = temp.path().join("a.pdf");
        fs::write(&file, "Q3 Revenue up\n").unwrap();

        let extractor = CommandExtractor::new("cat");
        assert_eq!(extractor.extract(&file).unwrap(), "Q3 Revenue up\n");
    }

    #[cfg(unix)]
    #[test]
    fn test_failing_tool_reports_status() {
        let temp = tempdir().unwrap();
        let extractor = CommandExtractor::new("cat");
        let err = extractor
            .extract(&temp.path().join("missing.pdf"))
            .unwrap_err();

        match err {
            ExtractionError::Failed { tool, stderr, .. } => {
                assert_eq!(tool, "cat");
                assert!(stderr.contains("missing.pdf"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
