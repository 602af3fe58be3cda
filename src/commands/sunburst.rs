//! Sunburst command implementation.
//!
//! The sunburst command:
//! 1. Loads (region, country, segment) records from CSV
//! 2. Aggregates them into a count tree
//! 3. Checks the tree invariants
//! 4. Renders the HTML chart
//! 5. Writes output files

use super::models::SunburstArgs;
use crate::aggregator::{build_hierarchy, calculate_shares, calculate_stats, flatten, validate_tree};
use crate::loader::load_hierarchy_records;
use crate::output::{write_document, write_nodes, NodeDump};
use crate::render::{generate_sunburst, generate_text_summary, SunburstConfig};
use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::time::Instant;

/// Execute the sunburst command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * Unreadable or malformed CSV, missing columns
/// * File write errors
pub fn execute_sunburst(args: SunburstArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Starting sunburst for: {}", args.input.display());

    // Step 1: Load records
    info!("Step 1/5: Loading records...");
    let loaded = load_hierarchy_records(&args.input, &args.columns, args.limit)
        .with_context(|| format!("Failed to load records from {}", args.input.display()))?;

    if loaded.stats.rows_dropped() > 0 {
        warn!(
            "Dropped {} incomplete rows of {}",
            loaded.stats.rows_dropped(),
            loaded.stats.rows_read
        );
    }

    // Step 2: Aggregate
    info!("Step 2/5: Aggregating {} records...", loaded.rows.len());
    let nodes = build_hierarchy(&loaded.rows, &args.root_label);

    let stats = calculate_stats(&nodes);
    info!("Hierarchy: {}", stats.summary());

    // Step 3: Check invariants on the flattened ids
    info!("Step 3/5: Checking tree...");
    let flat = flatten(&nodes);
    validate_tree(&flat).context("Aggregated tree is inconsistent (does the data contain the id separator?)")?;

    // Step 4: Render
    info!("Step 4/5: Rendering sunburst...");
    let mut config = SunburstConfig::for_root(&args.root_label);
    if let Some(title) = &args.title {
        config = config.with_title(title.clone());
    }
    let html = generate_sunburst(&flat, &config).context("Failed to render sunburst")?;

    // Step 5: Write outputs
    info!("Step 5/5: Writing output files...");
    write_document(&html, &args.output_html).context("Failed to write sunburst HTML")?;
    info!("✓ Chart written to: {}", args.output_html.display());

    if let Some(json_path) = &args.output_json {
        let dump = NodeDump::new(
            args.input.display().to_string(),
            args.root_label.clone(),
            flat,
        );
        write_nodes(&dump, json_path).context("Failed to write node dump")?;
        info!("✓ Node dump written to: {}", json_path.display());
    }

    if args.print_summary {
        let shares = calculate_shares(&nodes, 1, args.top);
        debug!("Top region: {:?}", shares.first());

        println!("\n{}", "=".repeat(80));
        println!("SUNBURST SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Source:       {}", args.input.display());
        println!("Rows read:    {}", loaded.stats.rows_read);
        println!("Rows kept:    {}", loaded.stats.rows_kept);
        println!("\n{}", generate_text_summary(&shares, &stats, "TOP REGIONS"));
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Sunburst completed in {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Validate sunburst arguments
///
/// **Public** - can be called before execute_sunburst for early validation
pub fn validate_sunburst_args(args: &SunburstArgs) -> Result<()> {
    if args.input.as_os_str().is_empty() {
        anyhow::bail!("Input path cannot be empty");
    }

    if args.root_label.trim().is_empty() {
        anyhow::bail!("Root label cannot be empty");
    }

    let columns = [
        &args.columns.region,
        &args.columns.country,
        &args.columns.segment,
    ];
    if columns.iter().any(|c| c.trim().is_empty()) {
        anyhow::bail!("Column names cannot be empty");
    }
    if columns[0] == columns[1] || columns[0] == columns[2] || columns[1] == columns[2] {
        anyhow::bail!("Region, country and segment must be different columns");
    }

    if args.limit == Some(0) {
        anyhow::bail!("limit must be greater than 0");
    }

    if args.top == 0 {
        anyhow::bail!("top must be greater than 0");
    }

    if args.top > 1000 {
        anyhow::bail!("top is too large (max 1000)");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_sunburst_args_default() {
        assert!(validate_sunburst_args(&SunburstArgs::default()).is_ok());
    }

    #[test]
    fn test_validate_sunburst_args_duplicate_columns() {
        let mut args = SunburstArgs::default();
        args.columns.country = args.columns.region.clone();

        assert!(validate_sunburst_args(&args).is_err());
    }

    #[test]
    fn test_validate_sunburst_args_zero_limit() {
        let args = SunburstArgs {
            limit: Some(0),
            ..Default::default()
        };

        assert!(validate_sunburst_args(&args).is_err());
    }

    #[test]
    fn test_validate_sunburst_args_blank_root() {
        let args = SunburstArgs {
            root_label: "  ".to_string(),
            ..Default::default()
        };

        assert!(validate_sunburst_args(&args).is_err());
    }
}
