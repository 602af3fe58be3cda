//! Ridgeline command implementation.
//!
//! Loads grouped scores, drops groups with too few samples, and renders
//! one density band per remaining group.

use super::models::RidgelineArgs;
use crate::aggregator::filter_groups;
use crate::loader::load_grouped_values;
use crate::output::write_document;
use crate::render::{generate_ridgeline, RidgelineConfig};
use anyhow::{Context, Result};
use log::info;

/// Execute the ridgeline command
pub fn execute_ridgeline(args: RidgelineArgs) -> Result<()> {
    info!("Starting ridgeline for: {}", args.input.display());

    info!("Step 1/3: Loading values...");
    let loaded = load_grouped_values(&args.input, &args.columns, None)
        .with_context(|| format!("Failed to load values from {}", args.input.display()))?;

    let groups = filter_groups(&loaded.rows, args.min_group_size);
    if groups.is_empty() {
        anyhow::bail!(
            "No group in '{}' has at least {} values",
            args.columns.group,
            args.min_group_size
        );
    }

    info!("Step 2/3: Rendering {} groups...", groups.len());
    let mut config = RidgelineConfig {
        overlap: args.overlap,
        width: args.width,
        height: args.height,
        ..RidgelineConfig::default()
    }
    .with_x_label(args.columns.value.clone());
    if let Some(title) = &args.title {
        config = config.with_title(title.clone());
    }

    let svg = generate_ridgeline(&groups, &config).context("Failed to render ridgeline")?;

    info!("Step 3/3: Writing output...");
    write_document(&svg, &args.output).context("Failed to write ridgeline SVG")?;
    info!("✓ Chart written to: {}", args.output.display());

    Ok(())
}

/// Validate ridgeline arguments
pub fn validate_ridgeline_args(args: &RidgelineArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.columns.group == args.columns.value {
        anyhow::bail!("Group and value must be different columns");
    }

    if args.min_group_size == 0 {
        anyhow::bail!("min_group_size must be greater than 0");
    }

    if !args.overlap.is_finite() || args.overlap < 0.0 {
        anyhow::bail!("overlap must be a non-negative number");
    }

    validate_size(args.width, args.height)
}

/// Shared canvas size bounds
pub(crate) fn validate_size(width: usize, height: usize) -> Result<()> {
    if !(200..=10_000).contains(&width) || !(200..=10_000).contains(&height) {
        anyhow::bail!("Chart size must be between 200 and 10000 pixels per side");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_ridgeline_args_default() {
        assert!(validate_ridgeline_args(&RidgelineArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_ridgeline_args_min_group_zero() {
        let args = RidgelineArgs {
            min_group_size: 0,
            ..Default::default()
        };
        assert!(validate_ridgeline_args(&args).is_err());
    }

    #[test]
    fn test_validate_ridgeline_args_tiny_canvas() {
        let args = RidgelineArgs {
            width: 10,
            ..Default::default()
        };
        assert!(validate_ridgeline_args(&args).is_err());
    }
}
