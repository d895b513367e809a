//! Doctor - Dependency checking

use anyhow::Result;

use crate::backends::extract::TextExtractor;
use crate::core::render::{render_progress, Emphasis};

/// Dependency status
#[derive(Debug, Clone)]
pub struct DependencyStatus {
    pub name: String,
    pub available: bool,
    pub notes: Option<String>,
}

impl DependencyStatus {
    pub fn to_line(&self) -> String {
        let status = if self.available {
            Emphasis::Label.paint("found")
        } else {
            Emphasis::Match.paint("not found")
        };

        let mut line = format!("{} (required) - {}", self.name, status);
        if let Some(notes) = &self.notes {
            if !self.available {
                line.push_str(&format!("\n    Note: {}", notes));
            }
        }
        line
    }
}

/// Check the text extractor the run would use
pub fn check_dependencies(extractor: &dyn TextExtractor) -> Vec<DependencyStatus> {
    vec![DependencyStatus {
        name: extractor.name().to_string(),
        available: extractor.is_available(),
        notes: Some(
            "pdftotext ships with poppler: apt install poppler-utils / brew install poppler"
                .to_string(),
        ),
    }]
}

/// Print dependency status; returns whether everything required is present
pub fn run_doctor(extractor: &dyn TextExtractor) -> Result<bool> {
    let deps = check_dependencies(extractor);

    for dep in &deps {
        println!("{}", render_progress(&dep.to_line()));
    }

    let ok = deps.iter().all(|d| d.available);
    if !ok {
        eprintln!("\nSome required dependencies are missing!");
    }

    Ok(ok)
}
