//! Aggregation of loaded records into chart-ready data.
//!
//! This module transforms loaded rows into:
//! - A count-weighted hierarchy (for the sunburst)
//! - Share and level statistics over that hierarchy
//! - Densities and trend lines (for ridgeline and scatter charts)

pub mod hierarchy;
pub mod metrics;
pub mod stats;
pub mod validate;

// Re-export main types and functions
pub use hierarchy::{build_hierarchy, flatten, FlatNode, HierarchyNode, NodeKey};
pub use metrics::{calculate_shares, calculate_stats, HierarchyStats, NodeShare};
pub use stats::{filter_groups, gaussian_kde, linear_fit, linspace, split_by_category, LinearFit};
pub use validate::validate_tree;
