//! JSON node dump writer and reader.
//!
//! A dump records the flattened sunburst tree so it can be inspected,
//! diffed, or re-validated without the source CSV.

use super::{ensure_parent_dir, validate_path};
use crate::aggregator::FlatNode;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

/// Top-level structure of a node dump
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeDump {
    /// Schema version for compatibility checking
    pub version: String,

    /// Input dataset the tree was built from
    pub source: String,

    pub root_label: String,

    /// Root value (number of records aggregated)
    pub total: u64,

    /// Nodes in emission order
    pub nodes: Vec<FlatNode>,

    /// Timestamp when the dump was generated (RFC 3339)
    pub generated_at: String,
}

impl NodeDump {
    /// Wrap flattened nodes with metadata
    pub fn new(source: impl Into<String>, root_label: impl Into<String>, nodes: Vec<FlatNode>) -> Self {
        let total = nodes
            .iter()
            .find(|n| n.parent.is_empty())
            .map(|n| n.value)
            .unwrap_or(0);

        Self {
            version: SCHEMA_VERSION.to_string(),
            source: source.into(),
            root_label: root_label.into(),
            total,
            nodes,
            generated_at: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Write a node dump to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_nodes(dump: &NodeDump, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing node dump to: {}", output_path.display());

    validate_path(output_path)?;
    ensure_parent_dir(output_path)?;

    let file = File::create(output_path)?;
    let writer = BufWriter::new(file);

    serde_json::to_writer_pretty(writer, dump)?;

    info!(
        "Node dump written successfully ({} nodes, {} bytes)",
        dump.nodes.len(),
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Read a node dump from a JSON file
///
/// **Public** - used by the validate command and tests
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing the I/O variant)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_nodes(input_path: impl AsRef<Path>) -> Result<NodeDump, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading node dump from: {}", input_path.display());

    let file = File::open(input_path)?;
    let dump: NodeDump = serde_json::from_reader(BufReader::new(file))?;

    debug!(
        "Node dump loaded: version {}, {} nodes",
        dump.version,
        dump.nodes.len()
    );

    Ok(dump)
}

/// Calculate file size in bytes
///
/// **Private** - internal utility
fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn create_test_dump() -> NodeDump {
        NodeDump::new(
            "data/orders.csv",
            "Buys",
            vec![
                FlatNode {
                    id: "root".into(),
                    label: "Buys".into(),
                    parent: String::new(),
                    value: 2,
                },
                FlatNode {
                    id: "reg⟂West".into(),
                    label: "West".into(),
                    parent: "root".into(),
                    value: 2,
                },
            ],
        )
    }

    #[test]
    fn test_new_takes_total_from_root() {
        let dump = create_test_dump();
        assert_eq!(dump.total, 2);
        assert_eq!(dump.version, SCHEMA_VERSION);
    }

    #[test]
    fn test_write_and_read_nodes() {
        let dump = create_test_dump();
        let temp_file = NamedTempFile::new().unwrap();

        write_nodes(&dump, temp_file.path()).unwrap();
        let loaded = read_nodes(temp_file.path()).unwrap();

        assert_eq!(loaded, dump);
    }

    #[test]
    fn test_read_nodes_invalid_json() {
        let temp_file = NamedTempFile::new().unwrap();
        std::fs::write(temp_file.path(), "{ not json").unwrap();

        let result = read_nodes(temp_file.path());
        assert!(matches!(result, Err(OutputError::SerializationFailed(_))));
    }
}
