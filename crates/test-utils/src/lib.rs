//! Shared test utilities for the geometry workspace.
//!
//! This crate provides common testing infrastructure including:
//! - Sample geometry strings with their expected parse results
//! - Generators for large synthetic WKT inputs
//! - Temporary input files for file-based parsing
//!
//! # Usage
//!
//! Add to your crate's `Cargo.toml`:
//!
//! ```toml
//! [dev-dependencies]
//! test-utils = { path = "../test-utils" }
//! ```
//!
//! Then import in your tests:
//!
//! ```ignore
//! use test_utils::{fixtures, generate_ring_wkt};
//! ```

pub mod fixtures;
pub mod generators;

// Re-export commonly used items at the crate root
pub use fixtures::*;
pub use generators::*;

use std::io::Write;

use tempfile::NamedTempFile;

/// Write `contents` to a fresh temporary file.
///
/// The file is removed when the returned handle is dropped.
///
/// # Panics
///
/// Panics if the file cannot be created or written; only meant for tests.
pub fn write_temp_input(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().expect("Failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write temp file");
    file.flush().expect("Failed to flush temp file");
    file
}
