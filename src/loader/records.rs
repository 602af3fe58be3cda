//! Typed record loaders for each chart.

use super::csv_source::{read_columns, Loaded};
use crate::utils::config::{
    DEFAULT_GROUP_COLUMN, DEFAULT_HUE_COLUMN, DEFAULT_SCORE_COLUMN, DEFAULT_X_COLUMN,
    DEFAULT_Y_COLUMN, HIERARCHY_COLUMNS,
};
use crate::utils::error::LoadError;
use log::info;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// One (region, country, segment) observation
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HierarchyRecord {
    pub region: String,
    pub country: String,
    pub segment: String,
}

impl HierarchyRecord {
    pub fn new(
        region: impl Into<String>,
        country: impl Into<String>,
        segment: impl Into<String>,
    ) -> Self {
        Self {
            region: region.into(),
            country: country.into(),
            segment: segment.into(),
        }
    }
}

/// Header names of the three hierarchy levels
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HierarchyColumns {
    pub region: String,
    pub country: String,
    pub segment: String,
}

impl Default for HierarchyColumns {
    fn default() -> Self {
        let [region, country, segment] = HIERARCHY_COLUMNS;
        Self {
            region: region.to_string(),
            country: country.to_string(),
            segment: segment.to_string(),
        }
    }
}

/// A numeric observation tagged with its group
#[derive(Debug, Clone, PartialEq)]
pub struct GroupedValue {
    pub group: String,
    pub value: f64,
}

/// Header names for grouped numeric data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupedColumns {
    pub group: String,
    pub value: String,
}

impl Default for GroupedColumns {
    fn default() -> Self {
        Self {
            group: DEFAULT_GROUP_COLUMN.to_string(),
            value: DEFAULT_SCORE_COLUMN.to_string(),
        }
    }
}

/// A point of a categorised scatter plot
#[derive(Debug, Clone, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub category: String,
}

/// Header names for scatter data
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScatterColumns {
    pub x: String,
    pub y: String,
    pub hue: String,
}

impl Default for ScatterColumns {
    fn default() -> Self {
        Self {
            x: DEFAULT_X_COLUMN.to_string(),
            y: DEFAULT_Y_COLUMN.to_string(),
            hue: DEFAULT_HUE_COLUMN.to_string(),
        }
    }
}

/// Load hierarchy records from a CSV file
///
/// **Public** - input for the sunburst command
///
/// # Arguments
/// * `path` - CSV file with a header row
/// * `columns` - Header names of region, country and segment
/// * `limit` - Maximum raw rows to read
///
/// # Errors
/// * `LoadError::Csv` - File cannot be opened or parsed
/// * `LoadError::MissingColumn` - A hierarchy column is absent
pub fn load_hierarchy_records(
    path: impl AsRef<Path>,
    columns: &HierarchyColumns,
    limit: Option<usize>,
) -> Result<Loaded<HierarchyRecord>, LoadError> {
    let path = path.as_ref();
    info!("Reading hierarchy records from: {}", path.display());
    read_hierarchy_records(open(path)?, columns, limit)
}

/// Load hierarchy records from any reader
pub fn read_hierarchy_records<R: Read>(
    reader: R,
    columns: &HierarchyColumns,
    limit: Option<usize>,
) -> Result<Loaded<HierarchyRecord>, LoadError> {
    let names = [
        columns.region.as_str(),
        columns.country.as_str(),
        columns.segment.as_str(),
    ];

    read_columns(reader, &names, limit, |cells| {
        Some(HierarchyRecord::new(cells[0], cells[1], cells[2]))
    })
}

/// Load grouped numeric values from a CSV file
///
/// Cells that are not valid numbers are treated as missing.
pub fn load_grouped_values(
    path: impl AsRef<Path>,
    columns: &GroupedColumns,
    limit: Option<usize>,
) -> Result<Loaded<GroupedValue>, LoadError> {
    let path = path.as_ref();
    info!("Reading grouped values from: {}", path.display());
    read_grouped_values(open(path)?, columns, limit)
}

pub fn read_grouped_values<R: Read>(
    reader: R,
    columns: &GroupedColumns,
    limit: Option<usize>,
) -> Result<Loaded<GroupedValue>, LoadError> {
    let names = [columns.group.as_str(), columns.value.as_str()];

    read_columns(reader, &names, limit, |cells| {
        parse_number(cells[1]).map(|value| GroupedValue {
            group: cells[0].to_string(),
            value,
        })
    })
}

/// Load scatter points from a CSV file
pub fn load_scatter_points(
    path: impl AsRef<Path>,
    columns: &ScatterColumns,
    limit: Option<usize>,
) -> Result<Loaded<ScatterPoint>, LoadError> {
    let path = path.as_ref();
    info!("Reading scatter points from: {}", path.display());
    read_scatter_points(open(path)?, columns, limit)
}

pub fn read_scatter_points<R: Read>(
    reader: R,
    columns: &ScatterColumns,
    limit: Option<usize>,
) -> Result<Loaded<ScatterPoint>, LoadError> {
    let names = [columns.x.as_str(), columns.y.as_str(), columns.hue.as_str()];

    read_columns(reader, &names, limit, |cells| {
        let x = parse_number(cells[0])?;
        let y = parse_number(cells[1])?;
        Some(ScatterPoint {
            x,
            y,
            category: cells[2].to_string(),
        })
    })
}

/// Open a file, reporting failures through the csv error type
///
/// **Private** - keeps `LoadError` to a single I/O-carrying variant
fn open(path: &Path) -> Result<File, LoadError> {
    File::open(path).map_err(|e| LoadError::Csv(csv::Error::from(e)))
}

/// Parse a finite number; NaN and infinities count as missing
fn parse_number(cell: &str) -> Option<f64> {
    cell.parse::<f64>().ok().filter(|v| v.is_finite())
}
