//! CSV dataset loading.
//!
//! This module handles:
//! - Selecting columns by header name
//! - Trimming cells and dropping incomplete rows
//! - Converting rows into typed records for each chart

pub mod csv_source;
pub mod records;

// Re-export main types
pub use csv_source::{read_columns, LoadStats, Loaded};
pub use records::{
    load_grouped_values, load_hierarchy_records, load_scatter_points, read_grouped_values,
    read_hierarchy_records, read_scatter_points, GroupedColumns, GroupedValue, HierarchyColumns,
    HierarchyRecord, ScatterColumns, ScatterPoint,
};
