//! Configuration and constants for the CLI.

/// Current JSON node dump schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

// Node id construction.
// Flat ids are only built at the render boundary; the separator is a
// character not expected in real data.
pub const ID_SEPARATOR: &str = "⟂";
pub const ROOT_ID: &str = "root";
pub const REGION_TAG: &str = "reg";
pub const COUNTRY_TAG: &str = "cty";
pub const SEGMENT_TAG: &str = "seg";

/// Default output directory for every chart
pub const DEFAULT_PLOTS_DIR: &str = "./plots";

// Sunburst defaults
pub const DEFAULT_SUNBURST_INPUT: &str = "./data/SuperStoreOrders.csv";
pub const DEFAULT_SUNBURST_FILE: &str = "sunburst_buys_region_country_segment.html";
pub const DEFAULT_ROOT_LABEL: &str = "Buys";
pub const DEFAULT_SUNBURST_LIMIT: usize = 1000;
pub const HIERARCHY_COLUMNS: [&str; 3] = ["region", "country", "segment"];
pub const DEFAULT_SUMMARY_TOP: usize = 10;
pub const PLOTLY_CDN_URL: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

// Ridgeline defaults
pub const DEFAULT_RIDGELINE_INPUT: &str = "./data/2015.csv";
pub const DEFAULT_RIDGELINE_FILE: &str = "ridgeline_happiness_by_region.svg";
pub const DEFAULT_GROUP_COLUMN: &str = "Region";
pub const DEFAULT_SCORE_COLUMN: &str = "Happiness Score";
pub const DEFAULT_MIN_GROUP_SIZE: usize = 5;
pub const KDE_GRID_POINTS: usize = 200;
pub const DEFAULT_RIDGELINE_OVERLAP: f64 = 1.0;
pub const DEFAULT_RIDGELINE_SIZE: (usize, usize) = (1000, 600);

// Scatter defaults
pub const DEFAULT_SCATTER_INPUT: &str = "./data/tips.csv";
pub const DEFAULT_SCATTER_FILE: &str = "scatter_plot_tip_over_bill.svg";
pub const DEFAULT_X_COLUMN: &str = "total_bill";
pub const DEFAULT_Y_COLUMN: &str = "tip";
pub const DEFAULT_HUE_COLUMN: &str = "sex";
pub const DEFAULT_X_LIMITS: (f64, f64) = (2.0, 52.0);
pub const DEFAULT_Y_LIMITS: (f64, f64) = (0.0, 12.0);
pub const DEFAULT_SCATTER_SIZE: (usize, usize) = (1200, 800);
