//! Common utilities

use std::path::Path;

/// Check if a command is available in PATH (or exists, when given as a path)
pub fn command_exists(cmd: &str) -> bool {
    if Path::new(cmd).components().count() > 1 {
        return Path::new(cmd).is_file();
    }

    std::env::var_os("PATH")
        .map(|paths| std::env::split_paths(&paths).any(|dir| dir.join(cmd).is_file()))
        .unwrap_or(false)
}

/// Trim captured tool output for inclusion in a one-line diagnostic
pub fn one_line(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes)
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect::<Vec<_>>()
        .join("; ")
}
