//! Output writers for chart documents and node dumps.
//!
//! This module handles writing data to disk in various formats:
//! - HTML and SVG chart documents
//! - JSON node dumps (and reading them back)

pub mod document;
pub mod json;

// Re-export main functions
pub use document::write_document;
pub use json::{read_nodes, write_nodes, NodeDump};

use crate::utils::error::OutputError;
use log::debug;
use std::path::Path;

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Create missing parent directories of an output file
pub fn ensure_parent_dir(path: &Path) -> Result<(), OutputError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!(
                    "Cannot create directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }
    Ok(())
}
