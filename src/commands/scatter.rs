//! Scatter command implementation.

use super::models::ScatterArgs;
use super::ridgeline::validate_size;
use crate::aggregator::split_by_category;
use crate::loader::load_scatter_points;
use crate::output::write_document;
use crate::render::{generate_scatter, ScatterConfig};
use anyhow::{Context, Result};
use log::info;

/// Execute the scatter command
pub fn execute_scatter(args: ScatterArgs) -> Result<()> {
    info!("Starting scatter for: {}", args.input.display());

    info!("Step 1/3: Loading points...");
    let loaded = load_scatter_points(&args.input, &args.columns, None)
        .with_context(|| format!("Failed to load points from {}", args.input.display()))?;

    let series = split_by_category(&loaded.rows);
    info!(
        "Loaded {} points in {} categories",
        loaded.rows.len(),
        series.len()
    );

    info!("Step 2/3: Rendering scatter...");
    let mut config = ScatterConfig {
        trend_lines: args.trend_lines,
        width: args.width,
        height: args.height,
        ..ScatterConfig::default()
    }
    .with_limits(args.x_limits, args.y_limits);
    if let Some(title) = &args.title {
        config = config.with_title(title.clone());
    }

    let svg = generate_scatter(&series, &config).context("Failed to render scatter")?;

    info!("Step 3/3: Writing output...");
    write_document(&svg, &args.output).context("Failed to write scatter SVG")?;
    info!("✓ Chart written to: {}", args.output.display());

    Ok(())
}

/// Validate scatter arguments
pub fn validate_scatter_args(args: &ScatterArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    for (axis, (lo, hi)) in [("x", args.x_limits), ("y", args.y_limits)] {
        if !(lo.is_finite() && hi.is_finite()) || lo >= hi {
            anyhow::bail!("{} limits must be finite with min < max", axis);
        }
    }

    validate_size(args.width, args.height)
}
