//! Ridgeline (joy) plot of per-group score distributions.
//!
//! Each group gets a filled kernel density band. Bands share one x axis and
//! overlap vertically, coloured along the viridis ramp from top to bottom.

use super::svg::{format_tick, nice_ticks, viridis, Scale, SvgCanvas};
use crate::aggregator::stats::{gaussian_kde, linspace, scott_bandwidth};
use crate::utils::config::{DEFAULT_RIDGELINE_OVERLAP, DEFAULT_RIDGELINE_SIZE, KDE_GRID_POINTS};
use crate::utils::error::RenderError;
use log::info;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Ridgeline configuration
#[derive(Debug, Clone)]
pub struct RidgelineConfig {
    pub title: String,
    pub x_label: String,
    pub width: usize,
    pub height: usize,

    /// How many rows a peak may reach into the row above (0 = no overlap)
    pub overlap: f64,

    /// Fade band opacity from top to bottom
    pub fade: bool,
}

impl Default for RidgelineConfig {
    fn default() -> Self {
        Self {
            title: "Distribution of Happiness Score by Region (2015)".to_string(),
            x_label: "Happiness Score".to_string(),
            width: DEFAULT_RIDGELINE_SIZE.0,
            height: DEFAULT_RIDGELINE_SIZE.1,
            overlap: DEFAULT_RIDGELINE_OVERLAP,
            fade: true,
        }
    }
}

impl RidgelineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_x_label(mut self, label: impl Into<String>) -> Self {
        self.x_label = label.into();
        self
    }
}

const MARGIN_LEFT: f64 = 200.0;
const MARGIN_RIGHT: f64 = 30.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 60.0;

/// Generate the ridgeline SVG
///
/// **Public** - main entry point for ridgeline rendering
///
/// # Arguments
/// * `groups` - Samples per group, drawn top to bottom in map order
/// * `config` - Layout and labels
///
/// # Errors
/// * `RenderError::EmptyData` - No group has any samples
pub fn generate_ridgeline(
    groups: &BTreeMap<String, Vec<f64>>,
    config: &RidgelineConfig,
) -> Result<String, RenderError> {
    let groups: Vec<(&String, &Vec<f64>)> = groups.iter().filter(|(_, s)| !s.is_empty()).collect();
    if groups.is_empty() {
        return Err(RenderError::EmptyData);
    }

    info!("Generating ridgeline with {} groups", groups.len());

    let (x_min, x_max) = x_domain(groups.iter().map(|(_, s)| s.as_slice()));
    let grid = linspace(x_min, x_max, KDE_GRID_POINTS);

    let densities: Vec<Vec<f64>> = groups.iter().map(|(_, s)| gaussian_kde(s, &grid)).collect();
    let peak = densities
        .iter()
        .flat_map(|d| d.iter().copied())
        .fold(0.0_f64, f64::max);

    let mut canvas = SvgCanvas::new(config.width, config.height);
    canvas.title(&config.title);

    let plot_right = config.width as f64 - MARGIN_RIGHT;
    let plot_bottom = config.height as f64 - MARGIN_BOTTOM;
    let x_scale = Scale::new((x_min, x_max), (MARGIN_LEFT, plot_right));

    let n = groups.len() as f64;
    let row_height = (plot_bottom - MARGIN_TOP) / (n + config.overlap.max(0.0));
    let band_height = row_height * (1.0 + config.overlap.max(0.0));

    // Top rows first so lower bands are painted over them
    for (i, ((name, _), density)) in groups.iter().zip(&densities).enumerate() {
        let baseline = MARGIN_TOP + band_height + row_height * i as f64;
        let t = if groups.len() > 1 { i as f64 / (n - 1.0) } else { 0.0 };
        let opacity = if config.fade { 0.55 + 0.45 * t } else { 0.9 };

        let mut path = String::new();
        let _ = write!(path, "M{:.2},{:.2}", x_scale.map(grid[0]), baseline);
        for (x, d) in grid.iter().zip(density) {
            let y = if peak > 0.0 { baseline - d / peak * band_height } else { baseline };
            let _ = write!(path, " L{:.2},{:.2}", x_scale.map(*x), y);
        }
        let _ = write!(path, " L{:.2},{:.2} Z", x_scale.map(grid[grid.len() - 1]), baseline);

        canvas.raw(&format!(
            r#"<path d="{}" fill="{}" fill-opacity="{:.2}" stroke="black" stroke-width="1" class="mark"/>"#,
            path,
            viridis(t),
            opacity
        ));
        canvas.text(MARGIN_LEFT - 10.0, baseline - 4.0, 12, "end", name);
    }

    // X axis
    canvas.line(MARGIN_LEFT, plot_bottom, plot_right, plot_bottom, "black", 1.0);
    for tick in nice_ticks(x_min, x_max, 8) {
        let x = x_scale.map(tick);
        canvas.line(x, plot_bottom, x, plot_bottom + 5.0, "black", 1.0);
        canvas.text(x, plot_bottom + 20.0, 11, "middle", &format_tick(tick));
    }
    canvas.text(
        (MARGIN_LEFT + plot_right) / 2.0,
        plot_bottom + 45.0,
        14,
        "middle",
        &config.x_label,
    );

    let svg = canvas.finish();
    info!("Ridgeline generated successfully ({} bytes)", svg.len());
    Ok(svg)
}

/// Shared x range: data extent padded by three bandwidths on each side
fn x_domain<'a>(samples: impl Iterator<Item = &'a [f64]>) -> (f64, f64) {
    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    let mut pad = 0.0_f64;

    for s in samples {
        for &v in s {
            min = min.min(v);
            max = max.max(v);
        }
        pad = pad.max(3.0 * scott_bandwidth(s));
    }

    if max - min + 2.0 * pad <= 0.0 {
        pad = 0.5;
    }
    (min - pad, max + pad)
}
