//! Chart Studio CLI
//!
//! Renders sunburst, ridgeline and scatter charts from CSV datasets.

use anyhow::Result;
use chart_studio::commands::{
    display_schema, display_version, execute_ridgeline, execute_scatter, execute_sunburst,
    validate_nodes_file, validate_ridgeline_args, validate_scatter_args, validate_sunburst_args,
    RidgelineArgs, ScatterArgs, SunburstArgs,
};
use chart_studio::loader::{GroupedColumns, HierarchyColumns, ScatterColumns};
use chart_studio::utils::config::{
    DEFAULT_GROUP_COLUMN, DEFAULT_HUE_COLUMN, DEFAULT_MIN_GROUP_SIZE, DEFAULT_PLOTS_DIR,
    DEFAULT_RIDGELINE_FILE, DEFAULT_RIDGELINE_INPUT, DEFAULT_RIDGELINE_OVERLAP,
    DEFAULT_RIDGELINE_SIZE, DEFAULT_ROOT_LABEL, DEFAULT_SCATTER_FILE, DEFAULT_SCATTER_INPUT,
    DEFAULT_SCATTER_SIZE, DEFAULT_SCORE_COLUMN, DEFAULT_SUMMARY_TOP, DEFAULT_SUNBURST_FILE,
    DEFAULT_SUNBURST_INPUT, DEFAULT_SUNBURST_LIMIT, DEFAULT_X_COLUMN, DEFAULT_X_LIMITS,
    DEFAULT_Y_COLUMN, DEFAULT_Y_LIMITS, HIERARCHY_COLUMNS,
};
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::{Path, PathBuf};

/// Chart Studio - charts from CSV datasets
#[derive(Parser, Debug)]
#[command(name = "chart-studio")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Directory for charts written without an explicit --output
    #[arg(long, global = true, env = "CHART_STUDIO_PLOTS_DIR", default_value = DEFAULT_PLOTS_DIR)]
    plots_dir: PathBuf,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Sunburst of record counts by region, country and segment
    Sunburst {
        /// CSV dataset
        #[arg(short, long, default_value = DEFAULT_SUNBURST_INPUT)]
        input: PathBuf,

        /// Output path for the HTML chart
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Output path for a JSON node dump (optional)
        #[arg(long)]
        json: Option<PathBuf>,

        /// Region column
        #[arg(long, default_value = HIERARCHY_COLUMNS[0])]
        region_col: String,

        /// Country column
        #[arg(long, default_value = HIERARCHY_COLUMNS[1])]
        country_col: String,

        /// Segment column
        #[arg(long, default_value = HIERARCHY_COLUMNS[2])]
        segment_col: String,

        /// Root node label
        #[arg(long, default_value = DEFAULT_ROOT_LABEL)]
        root_label: String,

        /// Chart title
        #[arg(long)]
        title: Option<String>,

        /// Maximum rows to read
        #[arg(long, default_value_t = DEFAULT_SUNBURST_LIMIT)]
        limit: usize,

        /// Read every row (ignores --limit)
        #[arg(long)]
        all_rows: bool,

        /// Print text summary to stdout
        #[arg(long)]
        summary: bool,

        /// Number of regions in the summary
        #[arg(long, default_value_t = DEFAULT_SUMMARY_TOP)]
        top: usize,
    },

    /// Ridgeline of value distributions per group
    Ridgeline {
        /// CSV dataset
        #[arg(short, long, default_value = DEFAULT_RIDGELINE_INPUT)]
        input: PathBuf,

        /// Output path for the SVG chart
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Group column
        #[arg(long, default_value = DEFAULT_GROUP_COLUMN)]
        group_col: String,

        /// Value column
        #[arg(long, default_value = DEFAULT_SCORE_COLUMN)]
        value_col: String,

        /// Minimum values per group
        #[arg(long, default_value_t = DEFAULT_MIN_GROUP_SIZE)]
        min_group_size: usize,

        /// Chart title
        #[arg(long)]
        title: Option<String>,

        /// Vertical overlap between bands
        #[arg(long, default_value_t = DEFAULT_RIDGELINE_OVERLAP)]
        overlap: f64,

        /// Chart width in pixels
        #[arg(long, default_value_t = DEFAULT_RIDGELINE_SIZE.0)]
        width: usize,

        /// Chart height in pixels
        #[arg(long, default_value_t = DEFAULT_RIDGELINE_SIZE.1)]
        height: usize,
    },

    /// Scatter plot with per-category trend lines
    Scatter {
        /// CSV dataset
        #[arg(short, long, default_value = DEFAULT_SCATTER_INPUT)]
        input: PathBuf,

        /// Output path for the SVG chart
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// X column
        #[arg(long, default_value = DEFAULT_X_COLUMN)]
        x_col: String,

        /// Y column
        #[arg(long, default_value = DEFAULT_Y_COLUMN)]
        y_col: String,

        /// Category column
        #[arg(long, default_value = DEFAULT_HUE_COLUMN)]
        hue_col: String,

        #[arg(long, default_value_t = DEFAULT_X_LIMITS.0, allow_negative_numbers = true)]
        x_min: f64,

        #[arg(long, default_value_t = DEFAULT_X_LIMITS.1, allow_negative_numbers = true)]
        x_max: f64,

        #[arg(long, default_value_t = DEFAULT_Y_LIMITS.0, allow_negative_numbers = true)]
        y_min: f64,

        #[arg(long, default_value_t = DEFAULT_Y_LIMITS.1, allow_negative_numbers = true)]
        y_max: f64,

        /// Chart title
        #[arg(long)]
        title: Option<String>,

        /// Skip trend lines
        #[arg(long)]
        no_trend: bool,

        /// Chart width in pixels
        #[arg(long, default_value_t = DEFAULT_SCATTER_SIZE.0)]
        width: usize,

        /// Chart height in pixels
        #[arg(long, default_value_t = DEFAULT_SCATTER_SIZE.1)]
        height: usize,
    },

    /// Validate a JSON node dump
    Validate {
        /// Path to node dump JSON file
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Display schema information
    Schema {
        /// Show full schema details
        #[arg(long)]
        show: bool,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let plots_dir = cli.plots_dir;

    // Execute command
    match cli.command {
        Commands::Sunburst {
            input,
            output,
            json,
            region_col,
            country_col,
            segment_col,
            root_label,
            title,
            limit,
            all_rows,
            summary,
            top,
        } => {
            let args = SunburstArgs {
                input,
                output_html: resolve_output(output, &plots_dir, DEFAULT_SUNBURST_FILE),
                output_json: json,
                columns: HierarchyColumns {
                    region: region_col,
                    country: country_col,
                    segment: segment_col,
                },
                root_label,
                title,
                limit: if all_rows { None } else { Some(limit) },
                print_summary: summary,
                top,
            };

            validate_sunburst_args(&args)?;
            execute_sunburst(args)?;
        }

        Commands::Ridgeline {
            input,
            output,
            group_col,
            value_col,
            min_group_size,
            title,
            overlap,
            width,
            height,
        } => {
            let args = RidgelineArgs {
                input,
                output: resolve_output(output, &plots_dir, DEFAULT_RIDGELINE_FILE),
                columns: GroupedColumns {
                    group: group_col,
                    value: value_col,
                },
                min_group_size,
                title,
                overlap,
                width,
                height,
            };

            validate_ridgeline_args(&args)?;
            execute_ridgeline(args)?;
        }

        Commands::Scatter {
            input,
            output,
            x_col,
            y_col,
            hue_col,
            x_min,
            x_max,
            y_min,
            y_max,
            title,
            no_trend,
            width,
            height,
        } => {
            let args = ScatterArgs {
                input,
                output: resolve_output(output, &plots_dir, DEFAULT_SCATTER_FILE),
                columns: ScatterColumns {
                    x: x_col,
                    y: y_col,
                    hue: hue_col,
                },
                x_limits: (x_min, x_max),
                y_limits: (y_min, y_max),
                title,
                trend_lines: !no_trend,
                width,
                height,
            };

            validate_scatter_args(&args)?;
            execute_scatter(args)?;
        }

        Commands::Validate { file } => {
            validate_nodes_file(&file)?;
        }

        Commands::Schema { show } => {
            display_schema(show);
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}

/// Explicit output path, or the default file name inside the plots directory
fn resolve_output(output: Option<PathBuf>, plots_dir: &Path, file_name: &str) -> PathBuf {
    output.unwrap_or_else(|| plots_dir.join(file_name))
}
