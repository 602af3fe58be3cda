//! Summary metrics over an aggregated hierarchy.
//!
//! Region shares are the headline numbers printed with `--summary`.

use super::hierarchy::{HierarchyNode, NodeKey};
use log::debug;

/// Share of all records held by one node
#[derive(Debug, Clone, PartialEq)]
pub struct NodeShare {
    pub label: String,
    pub count: u64,

    /// Percentage of the root value
    pub percentage: f64,
}

/// Calculate the largest nodes at a given depth
///
/// **Public** - main entry point for share calculation
///
/// # Arguments
/// * `nodes` - Output of `build_hierarchy`
/// * `depth` - 1 = regions, 2 = countries, 3 = segment leaves
/// * `top_n` - Number of entries to return
///
/// # Returns
/// Shares sorted by count (descending), ties by emission order
pub fn calculate_shares(nodes: &[HierarchyNode], depth: usize, top_n: usize) -> Vec<NodeShare> {
    let total = root_value(nodes);
    debug!("Calculating top {} shares at depth {}", top_n, depth);

    let mut shares: Vec<NodeShare> = nodes
        .iter()
        .filter(|n| n.key.depth() == depth)
        .map(|n| NodeShare {
            label: n.label.clone(),
            count: n.value,
            percentage: percentage(n.value, total),
        })
        .collect();

    // Stable sort keeps emission order among equal counts
    shares.sort_by(|a, b| b.count.cmp(&a.count));
    shares.truncate(top_n);
    shares
}

/// Node counts per level
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HierarchyStats {
    pub total: u64,
    pub regions: usize,
    pub countries: usize,
    pub leaves: usize,
}

impl HierarchyStats {
    /// Expected node count: root plus every level
    pub fn node_count(&self) -> usize {
        1 + self.regions + self.countries + self.leaves
    }

    /// Get human-readable summary
    pub fn summary(&self) -> String {
        format!(
            "Total: {} | Regions: {} | Countries: {} | Segments: {}",
            self.total, self.regions, self.countries, self.leaves
        )
    }
}

/// Count nodes per level
pub fn calculate_stats(nodes: &[HierarchyNode]) -> HierarchyStats {
    let mut stats = HierarchyStats {
        total: root_value(nodes),
        ..Default::default()
    };

    for node in nodes {
        match node.key {
            NodeKey::Root => {}
            NodeKey::Region(..) => stats.regions += 1,
            NodeKey::Country(..) => stats.countries += 1,
            NodeKey::Segment(..) => stats.leaves += 1,
        }
    }

    stats
}

fn root_value(nodes: &[HierarchyNode]) -> u64 {
    nodes
        .iter()
        .find(|n| n.key == NodeKey::Root)
        .map(|n| n.value)
        .unwrap_or(0)
}

fn percentage(value: u64, total: u64) -> f64 {
    if total > 0 {
        (value as f64 / total as f64) * 100.0
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::hierarchy::build_hierarchy;
    use crate::loader::HierarchyRecord;

    fn sample() -> Vec<HierarchyNode> {
        let records = vec![
            HierarchyRecord::new("A", "US", "X"),
            HierarchyRecord::new("A", "US", "Y"),
            HierarchyRecord::new("A", "MX", "X"),
            HierarchyRecord::new("B", "CA", "X"),
        ];
        build_hierarchy(&records, "Buys")
    }

    #[test]
    fn test_calculate_region_shares() {
        let shares = calculate_shares(&sample(), 1, 10);

        assert_eq!(shares.len(), 2);
        assert_eq!(shares[0].label, "A");
        assert_eq!(shares[0].count, 3);
        assert_eq!(shares[0].percentage, 75.0);
        assert_eq!(shares[1].percentage, 25.0);
    }

    #[test]
    fn test_calculate_shares_truncates() {
        let shares = calculate_shares(&sample(), 3, 2);
        assert_eq!(shares.len(), 2);
    }

    #[test]
    fn test_calculate_stats() {
        let stats = calculate_stats(&sample());

        assert_eq!(stats.total, 4);
        assert_eq!(stats.regions, 2);
        assert_eq!(stats.countries, 3);
        assert_eq!(stats.leaves, 4);
        assert_eq!(stats.node_count(), 10);
    }

    #[test]
    fn test_shares_of_empty_tree() {
        let nodes = build_hierarchy(&[], "Buys");
        assert!(calculate_shares(&nodes, 1, 5).is_empty());
        assert_eq!(calculate_stats(&nodes).node_count(), 1);
    }
}
