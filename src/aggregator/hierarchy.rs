//! Build a count-weighted region → country → segment tree.
//!
//! Nodes are identified by structured keys. Flat string ids are produced
//! only by [`flatten`], right before the tree is handed to a renderer or
//! written to JSON.
//!
//! Example: records `(A,US,X) (A,US,Y) (B,CA,X)` become
//! `root=3, A=2, B=1, A/US=2, B/CA=1` plus three leaves of 1.

use crate::loader::HierarchyRecord;
use crate::utils::config::{COUNTRY_TAG, ID_SEPARATOR, REGION_TAG, ROOT_ID, SEGMENT_TAG};
use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Structured identity of a tree node
///
/// Ordering is root first, then regions, countries and segments, each
/// ordered lexicographically by their ancestor chain.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum NodeKey {
    Root,
    Region(String),
    Country(String, String),
    Segment(String, String, String),
}

impl NodeKey {
    /// Depth in the tree (root = 0)
    pub fn depth(&self) -> usize {
        match self {
            NodeKey::Root => 0,
            NodeKey::Region(..) => 1,
            NodeKey::Country(..) => 2,
            NodeKey::Segment(..) => 3,
        }
    }

    /// Key of the parent node, `None` for the root
    pub fn parent(&self) -> Option<NodeKey> {
        match self {
            NodeKey::Root => None,
            NodeKey::Region(_) => Some(NodeKey::Root),
            NodeKey::Country(r, _) => Some(NodeKey::Region(r.clone())),
            NodeKey::Segment(r, c, _) => Some(NodeKey::Country(r.clone(), c.clone())),
        }
    }

    /// Flat id: type tag plus the full ancestor chain
    ///
    /// Values containing the separator can produce colliding flat ids;
    /// the structured keys themselves never collide.
    pub fn flat_id(&self) -> String {
        match self {
            NodeKey::Root => ROOT_ID.to_string(),
            NodeKey::Region(r) => [REGION_TAG, r.as_str()].join(ID_SEPARATOR),
            NodeKey::Country(r, c) => [COUNTRY_TAG, r.as_str(), c.as_str()].join(ID_SEPARATOR),
            NodeKey::Segment(r, c, s) => {
                [SEGMENT_TAG, r.as_str(), c.as_str(), s.as_str()].join(ID_SEPARATOR)
            }
        }
    }
}

impl fmt::Display for NodeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.flat_id())
    }
}

/// A node of the aggregated tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyNode {
    pub key: NodeKey,

    /// Display text (not unique)
    pub label: String,

    pub parent: Option<NodeKey>,

    /// Number of records below this node
    pub value: u64,
}

/// A node with flattened string ids, as rendered and serialized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlatNode {
    pub id: String,
    pub label: String,

    /// Empty for the root
    pub parent: String,

    pub value: u64,
}

/// Aggregate records into an ordered node list
///
/// **Public** - main entry point for hierarchy aggregation
///
/// # Arguments
/// * `records` - Well-formed records (no empty dimension)
/// * `root_label` - Display text of the root node
///
/// # Returns
/// Root, then all regions, then all countries, then all segment leaves.
/// Empty input yields a single root with value 0.
pub fn build_hierarchy(records: &[HierarchyRecord], root_label: &str) -> Vec<HierarchyNode> {
    debug!("Aggregating {} records into hierarchy", records.len());

    let mut leaves: BTreeMap<(&str, &str, &str), u64> = BTreeMap::new();
    for record in records {
        let key = (
            record.region.as_str(),
            record.country.as_str(),
            record.segment.as_str(),
        );
        *leaves.entry(key).or_insert(0) += 1;
    }

    let mut countries: BTreeMap<(&str, &str), u64> = BTreeMap::new();
    let mut regions: BTreeMap<&str, u64> = BTreeMap::new();
    for (&(region, country, _), &count) in &leaves {
        *countries.entry((region, country)).or_insert(0) += count;
        *regions.entry(region).or_insert(0) += count;
    }

    let total: u64 = leaves.values().sum();

    let mut nodes = Vec::with_capacity(1 + regions.len() + countries.len() + leaves.len());

    nodes.push(HierarchyNode {
        key: NodeKey::Root,
        label: root_label.to_string(),
        parent: None,
        value: total,
    });

    for (&region, &count) in &regions {
        nodes.push(HierarchyNode {
            key: NodeKey::Region(region.to_string()),
            label: region.to_string(),
            parent: Some(NodeKey::Root),
            value: count,
        });
    }

    for (&(region, country), &count) in &countries {
        nodes.push(HierarchyNode {
            key: NodeKey::Country(region.to_string(), country.to_string()),
            label: country.to_string(),
            parent: Some(NodeKey::Region(region.to_string())),
            value: count,
        });
    }

    for (&(region, country, segment), &count) in &leaves {
        nodes.push(HierarchyNode {
            key: NodeKey::Segment(region.to_string(), country.to_string(), segment.to_string()),
            label: segment.to_string(),
            parent: Some(NodeKey::Country(region.to_string(), country.to_string())),
            value: count,
        });
    }

    debug!(
        "Built hierarchy: {} regions, {} countries, {} leaves, total {}",
        regions.len(),
        countries.len(),
        leaves.len(),
        total
    );

    nodes
}

/// Flatten structured keys into string ids
///
/// **Public** - the render/serialization boundary
pub fn flatten(nodes: &[HierarchyNode]) -> Vec<FlatNode> {
    nodes
        .iter()
        .map(|node| FlatNode {
            id: node.key.flat_id(),
            label: node.label.clone(),
            parent: node
                .parent
                .as_ref()
                .map(NodeKey::flat_id)
                .unwrap_or_default(),
            value: node.value,
        })
        .collect()
}
