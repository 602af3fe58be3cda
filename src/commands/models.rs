use crate::loader::{GroupedColumns, HierarchyColumns, ScatterColumns};
use crate::utils::config::{
    DEFAULT_MIN_GROUP_SIZE, DEFAULT_PLOTS_DIR, DEFAULT_RIDGELINE_FILE, DEFAULT_RIDGELINE_INPUT,
    DEFAULT_RIDGELINE_OVERLAP, DEFAULT_RIDGELINE_SIZE, DEFAULT_ROOT_LABEL, DEFAULT_SCATTER_FILE,
    DEFAULT_SCATTER_INPUT, DEFAULT_SCATTER_SIZE, DEFAULT_SUMMARY_TOP, DEFAULT_SUNBURST_FILE,
    DEFAULT_SUNBURST_INPUT, DEFAULT_SUNBURST_LIMIT, DEFAULT_X_LIMITS, DEFAULT_Y_LIMITS,
};
use std::path::{Path, PathBuf};

/// Arguments for the sunburst command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct SunburstArgs {
    /// CSV dataset to aggregate
    pub input: PathBuf,

    /// Output path for the HTML chart
    pub output_html: PathBuf,

    /// Output path for the JSON node dump (optional)
    pub output_json: Option<PathBuf>,

    pub columns: HierarchyColumns,

    /// Label of the root node, also used in hover text
    pub root_label: String,

    /// Chart title (None = derived from the root label)
    pub title: Option<String>,

    /// Maximum raw rows to read (None = all)
    pub limit: Option<usize>,

    /// Print text summary to stdout
    pub print_summary: bool,

    /// Number of regions in the text summary
    pub top: usize,
}

impl Default for SunburstArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_SUNBURST_INPUT),
            output_html: default_output(DEFAULT_SUNBURST_FILE),
            output_json: None,
            columns: HierarchyColumns::default(),
            root_label: DEFAULT_ROOT_LABEL.to_string(),
            title: None,
            limit: Some(DEFAULT_SUNBURST_LIMIT),
            print_summary: false,
            top: DEFAULT_SUMMARY_TOP,
        }
    }
}

/// Arguments for the ridgeline command
#[derive(Debug, Clone)]
pub struct RidgelineArgs {
    pub input: PathBuf,

    /// Output path for the SVG chart
    pub output: PathBuf,

    pub columns: GroupedColumns,

    /// Groups with fewer samples are left out
    pub min_group_size: usize,

    pub title: Option<String>,

    /// Vertical overlap between bands
    pub overlap: f64,

    pub width: usize,
    pub height: usize,
}

impl Default for RidgelineArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_RIDGELINE_INPUT),
            output: default_output(DEFAULT_RIDGELINE_FILE),
            columns: GroupedColumns::default(),
            min_group_size: DEFAULT_MIN_GROUP_SIZE,
            title: None,
            overlap: DEFAULT_RIDGELINE_OVERLAP,
            width: DEFAULT_RIDGELINE_SIZE.0,
            height: DEFAULT_RIDGELINE_SIZE.1,
        }
    }
}

/// Arguments for the scatter command
#[derive(Debug, Clone)]
pub struct ScatterArgs {
    pub input: PathBuf,

    /// Output path for the SVG chart
    pub output: PathBuf,

    pub columns: ScatterColumns,

    pub x_limits: (f64, f64),
    pub y_limits: (f64, f64),

    pub title: Option<String>,

    /// Draw per-category trend lines
    pub trend_lines: bool,

    pub width: usize,
    pub height: usize,
}

impl Default for ScatterArgs {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_SCATTER_INPUT),
            output: default_output(DEFAULT_SCATTER_FILE),
            columns: ScatterColumns::default(),
            x_limits: DEFAULT_X_LIMITS,
            y_limits: DEFAULT_Y_LIMITS,
            title: None,
            trend_lines: true,
            width: DEFAULT_SCATTER_SIZE.0,
            height: DEFAULT_SCATTER_SIZE.1,
        }
    }
}

fn default_output(file_name: &str) -> PathBuf {
    Path::new(DEFAULT_PLOTS_DIR).join(file_name)
}
