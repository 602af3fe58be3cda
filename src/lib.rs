//! Chart Studio
//!
//! Renders charts from CSV datasets:
//! - a region → country → segment sunburst of record counts (HTML)
//! - a ridgeline of per-group score distributions (SVG)
//! - a scatter plot with per-category trend lines (SVG)
//!
//! The sunburst's aggregation is a pure function; see
//! [`aggregator::build_hierarchy`].
//!
//! ```bash
//! chart-studio sunburst --input data/SuperStoreOrders.csv --summary
//! chart-studio --help
//! ```

pub mod aggregator;
pub mod commands;
pub mod loader;
pub mod output;
pub mod render;
pub mod utils;
