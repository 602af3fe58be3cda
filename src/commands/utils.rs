use crate::aggregator::validate_tree;
use crate::output::read_nodes;
use crate::utils::config::{ID_SEPARATOR, SCHEMA_VERSION};
use anyhow::{bail, Context, Result};
use std::collections::HashSet;
use std::path::Path;

/// Validate a JSON node dump against the tree invariants
pub fn validate_nodes_file(file_path: &Path) -> Result<()> {
    println!("Validating node dump: {}", file_path.display());

    let dump = read_nodes(file_path)
        .with_context(|| format!("Failed to read {}", file_path.display()))?;

    validate_tree(&dump.nodes).context("Node dump breaks the tree invariants")?;

    // validate_tree guarantees exactly one root
    let root_value = dump
        .nodes
        .iter()
        .find(|n| n.parent.is_empty())
        .map(|n| n.value)
        .unwrap_or_default();
    if dump.total != root_value {
        bail!(
            "Node dump total {} does not match root value {}",
            dump.total,
            root_value
        );
    }

    let parents: HashSet<&str> = dump.nodes.iter().map(|n| n.parent.as_str()).collect();
    let leaves = dump
        .nodes
        .iter()
        .filter(|n| !parents.contains(n.id.as_str()))
        .count();

    println!("✓ Valid node dump");
    println!("  Version: {}", dump.version);
    println!("  Source: {}", dump.source);
    println!("  Root: {} ({})", dump.root_label, dump.total);
    println!("  Nodes: {}", dump.nodes.len());
    println!("  Leaves: {}", leaves);
    println!("  Generated: {}", dump.generated_at);

    Ok(())
}

/// Display schema information
pub fn display_schema(show_details: bool) {
    println!("Chart Studio Node Dump Schema");
    println!("Current Version: {}", SCHEMA_VERSION);
    println!();

    if show_details {
        println!("Schema Structure:");
        println!("  version: string      - Schema version (e.g., '1.0.0')");
        println!("  source: string       - Input CSV path");
        println!("  root_label: string   - Label of the root node");
        println!("  total: number        - Number of records aggregated");
        println!("  nodes: array         - Nodes, root first, then each level");
        println!("    id: string         - Unique id (levels joined by '{}')", ID_SEPARATOR);
        println!("    label: string      - Display text");
        println!("    parent: string     - Parent id (empty for the root)");
        println!("    value: number      - Records below this node");
        println!("  generated_at: string - RFC 3339 timestamp");
    } else {
        println!("Use --show for detailed schema information");
    }
}

/// Display version information
pub fn display_version() {
    println!("Chart Studio v{}", env!("CARGO_PKG_VERSION"));
    println!("Node Dump Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Sunburst, ridgeline and scatter charts from CSV datasets.");
}
