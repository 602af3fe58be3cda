//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use thiserror::Error;

/// Errors that can occur while loading a CSV dataset
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("CSV read failed: {0}")]
    Csv(#[from] csv::Error),

    #[error("Missing required column: {0}")]
    MissingColumn(String),
}

/// Errors reported when a node list breaks the tree invariants
#[derive(Error, Debug, PartialEq, Eq)]
pub enum TreeError {
    #[error("Node list is empty (a root node is required)")]
    MissingRoot,

    #[error("More than one root node: {0}")]
    MultipleRoots(String),

    #[error("Duplicate node id: {0}")]
    DuplicateId(String),

    #[error("Node {child} references unknown or later parent {parent}")]
    DanglingParent { child: String, parent: String },

    #[error("Node {id} has value {value} but its children sum to {children}")]
    ValueMismatch { id: String, value: u64, children: u64 },

    #[error("Children of node {id} sum past the largest representable count")]
    ValueOverflow { id: String },
}

/// Errors that can occur during chart rendering
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("No data to plot")]
    EmptyData,

    #[error("Invalid axis range: {0}")]
    InvalidRange(String),

    #[error("Failed to serialize chart data: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}
