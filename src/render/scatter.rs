//! Scatter plot with one least-squares trend line per category.

use super::svg::{category_color, format_tick, nice_ticks, Scale, SvgCanvas};
use crate::aggregator::stats::linear_fit;
use crate::utils::config::{DEFAULT_SCATTER_SIZE, DEFAULT_X_LIMITS, DEFAULT_Y_LIMITS};
use crate::utils::error::RenderError;
use log::{debug, info};
use std::collections::BTreeMap;

/// Scatter configuration
#[derive(Debug, Clone)]
pub struct ScatterConfig {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub width: usize,
    pub height: usize,
    pub x_limits: (f64, f64),
    pub y_limits: (f64, f64),
    pub point_radius: f64,

    /// Draw a trend line per category
    pub trend_lines: bool,
}

impl Default for ScatterConfig {
    fn default() -> Self {
        Self {
            title: "Tip Amount vs Total Bill by Sex with Trend Lines".to_string(),
            x_label: "Total Bill ($)".to_string(),
            y_label: "Tip ($)".to_string(),
            width: DEFAULT_SCATTER_SIZE.0,
            height: DEFAULT_SCATTER_SIZE.1,
            x_limits: DEFAULT_X_LIMITS,
            y_limits: DEFAULT_Y_LIMITS,
            point_radius: 5.0,
            trend_lines: true,
        }
    }
}

impl ScatterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_limits(mut self, x: (f64, f64), y: (f64, f64)) -> Self {
        self.x_limits = x;
        self.y_limits = y;
        self
    }
}

const MARGIN_LEFT: f64 = 80.0;
const MARGIN_RIGHT: f64 = 200.0;
const MARGIN_TOP: f64 = 60.0;
const MARGIN_BOTTOM: f64 = 70.0;

/// Generate the scatter SVG
///
/// **Public** - main entry point for scatter rendering
///
/// # Arguments
/// * `series` - Points per category; map order fixes colours and legend order
/// * `config` - Layout, labels and axis limits
///
/// # Errors
/// * `RenderError::EmptyData` - No points at all
/// * `RenderError::InvalidRange` - An axis limit is empty or not finite
pub fn generate_scatter(
    series: &BTreeMap<String, Vec<(f64, f64)>>,
    config: &ScatterConfig,
) -> Result<String, RenderError> {
    check_limits("x", config.x_limits)?;
    check_limits("y", config.y_limits)?;

    let total: usize = series.values().map(Vec::len).sum();
    if total == 0 {
        return Err(RenderError::EmptyData);
    }

    info!(
        "Generating scatter with {} points in {} categories",
        total,
        series.len()
    );

    let plot_right = config.width as f64 - MARGIN_RIGHT;
    let plot_bottom = config.height as f64 - MARGIN_BOTTOM;
    let xs = Scale::new(config.x_limits, (MARGIN_LEFT, plot_right));
    let ys = Scale::new(config.y_limits, (plot_bottom, MARGIN_TOP));

    let mut canvas = SvgCanvas::new(config.width, config.height);
    canvas.title(&config.title);
    canvas.raw(&format!(
        r#"<defs><clipPath id="plot-area"><rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}"/></clipPath></defs>"#,
        MARGIN_LEFT,
        MARGIN_TOP,
        plot_right - MARGIN_LEFT,
        plot_bottom - MARGIN_TOP
    ));

    draw_axes(&mut canvas, config, &xs, &ys, plot_right, plot_bottom);

    canvas.raw(r#"<g clip-path="url(#plot-area)">"#);
    for (i, points) in series.values().enumerate() {
        let color = category_color(i);
        for &(x, y) in points {
            canvas.raw(&format!(
                r#"<circle cx="{:.2}" cy="{:.2}" r="{}" fill="{}" fill-opacity="0.8" stroke="white" class="mark"/>"#,
                xs.map(x),
                ys.map(y),
                config.point_radius,
                color
            ));
        }
    }

    if config.trend_lines {
        for (i, (category, points)) in series.iter().enumerate() {
            match linear_fit(points) {
                Some(fit) => {
                    let (x0, x1) = data_extent(points);
                    canvas.line(
                        xs.map(x0),
                        ys.map(fit.predict(x0)),
                        xs.map(x1),
                        ys.map(fit.predict(x1)),
                        category_color(i),
                        2.5,
                    );
                }
                None => debug!("No trend line for '{}' (not enough spread)", category),
            }
        }
    }
    canvas.raw("</g>");

    draw_legend(&mut canvas, series.keys(), config.trend_lines, plot_right);

    let svg = canvas.finish();
    info!("Scatter generated successfully ({} bytes)", svg.len());
    Ok(svg)
}

/// Smallest and largest x of a category; trend lines span only this range
fn data_extent(points: &[(f64, f64)]) -> (f64, f64) {
    points
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(x, _)| {
            (lo.min(x), hi.max(x))
        })
}

fn check_limits(axis: &str, (lo, hi): (f64, f64)) -> Result<(), RenderError> {
    if lo.is_finite() && hi.is_finite() && lo < hi {
        Ok(())
    } else {
        Err(RenderError::InvalidRange(format!(
            "{} limits {}..{}",
            axis, lo, hi
        )))
    }
}

fn draw_axes(
    canvas: &mut SvgCanvas,
    config: &ScatterConfig,
    xs: &Scale,
    ys: &Scale,
    plot_right: f64,
    plot_bottom: f64,
) {
    canvas.line(MARGIN_LEFT, plot_bottom, plot_right, plot_bottom, "black", 1.0);
    canvas.line(MARGIN_LEFT, MARGIN_TOP, MARGIN_LEFT, plot_bottom, "black", 1.0);

    for tick in nice_ticks(config.x_limits.0, config.x_limits.1, 10) {
        let x = xs.map(tick);
        canvas.line(x, MARGIN_TOP, x, plot_bottom, "#e5e5e5", 1.0);
        canvas.text(x, plot_bottom + 20.0, 11, "middle", &format_tick(tick));
    }
    for tick in nice_ticks(config.y_limits.0, config.y_limits.1, 6) {
        let y = ys.map(tick);
        canvas.line(MARGIN_LEFT, y, plot_right, y, "#e5e5e5", 1.0);
        canvas.text(MARGIN_LEFT - 8.0, y + 4.0, 11, "end", &format_tick(tick));
    }

    canvas.text(
        (MARGIN_LEFT + plot_right) / 2.0,
        plot_bottom + 50.0,
        14,
        "middle",
        &config.x_label,
    );
    canvas.vertical_text(25.0, (MARGIN_TOP + plot_bottom) / 2.0, 14, &config.y_label);
}

fn draw_legend<'a>(
    canvas: &mut SvgCanvas,
    categories: impl Iterator<Item = &'a String>,
    trend_lines: bool,
    plot_right: f64,
) {
    let x = plot_right + 20.0;
    let mut y = MARGIN_TOP + 10.0;

    for (i, category) in categories.enumerate() {
        let color = category_color(i);
        canvas.raw(&format!(
            r#"<circle cx="{:.2}" cy="{:.2}" r="5" fill="{}"/>"#,
            x + 6.0,
            y - 4.0,
            color
        ));
        canvas.text(x + 18.0, y, 12, "start", category);
        y += 20.0;

        if trend_lines {
            canvas.line(x, y - 4.0, x + 12.0, y - 4.0, color, 2.5);
            canvas.text(x + 18.0, y, 12, "start", &format!("Trend ({})", category));
            y += 20.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series() -> BTreeMap<String, Vec<(f64, f64)>> {
        let mut s = BTreeMap::new();
        s.insert("Female".to_string(), vec![(16.99, 1.01), (24.59, 3.61), (35.26, 5.0)]);
        s.insert("Male".to_string(), vec![(10.34, 1.66), (21.01, 3.5), (23.68, 3.31)]);
        s
    }

    #[test]
    fn test_generate_scatter() {
        let svg = generate_scatter(&series(), &ScatterConfig::default()).unwrap();

        assert_eq!(svg.matches("fill-opacity=\"0.8\"").count(), 6);
        assert!(svg.contains("Trend (Female)"));
        assert!(svg.contains("Trend (Male)"));
        assert!(svg.contains("Tip ($)"));
    }

    #[test]
    fn test_trend_line_spans_category_data() {
        let mut s = BTreeMap::new();
        s.insert("Male".to_string(), vec![(10.0, 1.0), (20.0, 3.0), (30.0, 5.0)]);
        let config = ScatterConfig::default();
        let svg = generate_scatter(&s, &config).unwrap();

        let xs = Scale::new(
            config.x_limits,
            (MARGIN_LEFT, config.width as f64 - MARGIN_RIGHT),
        );
        let ys = Scale::new(
            config.y_limits,
            (config.height as f64 - MARGIN_BOTTOM, MARGIN_TOP),
        );
        let trend = format!(
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="2.5"/>"#,
            xs.map(10.0),
            ys.map(1.0),
            xs.map(30.0),
            ys.map(5.0),
            category_color(0)
        );
        assert!(svg.contains(&trend));
    }

    #[test]
    fn test_data_extent() {
        assert_eq!(data_extent(&[(3.0, 0.0), (-1.0, 2.0), (7.5, 1.0)]), (-1.0, 7.5));
    }

    #[test]
    fn test_generate_scatter_without_trend() {
        let config = ScatterConfig {
            trend_lines: false,
            ..Default::default()
        };
        let svg = generate_scatter(&series(), &config).unwrap();

        assert!(!svg.contains("Trend ("));
    }

    #[test]
    fn test_generate_scatter_invalid_limits() {
        let config = ScatterConfig::default().with_limits((5.0, 5.0), (0.0, 1.0));
        let result = generate_scatter(&series(), &config);

        assert!(matches!(result, Err(RenderError::InvalidRange(_))));
    }

    #[test]
    fn test_generate_scatter_empty() {
        let mut s = BTreeMap::new();
        s.insert("Male".to_string(), Vec::new());

        let result = generate_scatter(&s, &ScatterConfig::default());
        assert!(matches!(result, Err(RenderError::EmptyData)));
    }
}
