//! Core module - Contains the fundamental data structures and utilities
//!
//! This module provides:
//! - Search model (request, match records, reports)
//! - Per-file error types
//! - Console rendering and term highlighting
//! - Path utilities
//! - Scratch workspace management
//! - Common utilities

pub mod error;
pub mod model;
pub mod paths;
pub mod render;
pub mod util;
pub mod workspace;
