//! Flows module - Multi-step operations
//!
//! Provides:
//! - search: Discover, unpack and search PDFs, then report matches

pub mod search;
