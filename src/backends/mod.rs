//! Backends module - External tool integrations and file operations
//!
//! Provides:
//! - scan: File discovery with walkdir
//! - archive: PDF extraction from zip archives
//! - extract: Text extraction through an external program
//! - search: Line numbering and literal matching
//! - doctor: Dependency checking

pub mod archive;
pub mod doctor;
pub mod extract;
pub mod scan;
pub mod search;
