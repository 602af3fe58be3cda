//! Shared SVG building blocks: canvas, axes ticks and colour palettes.

use crate::utils::escape_xml;
use std::fmt::Write;

/// Accumulates SVG elements into a document string
pub struct SvgCanvas {
    width: usize,
    height: usize,
    body: String,
}

impl SvgCanvas {
    pub fn new(width: usize, height: usize) -> Self {
        let mut body = String::new();
        let _ = write!(
            body,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" viewBox="0 0 {} {}">"#,
            width, height, width, height
        );
        body.push_str(
            r#"<style>text { font-family: sans-serif; } .mark:hover { stroke: black; stroke-width: 1; }</style>"#,
        );
        let _ = write!(
            body,
            r#"<rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
            width, height
        );
        Self {
            width,
            height,
            body,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Append raw markup
    pub fn raw(&mut self, markup: &str) {
        self.body.push_str(markup);
    }

    /// Centered bold title at the top of the canvas
    pub fn title(&mut self, title: &str) {
        let _ = write!(
            self.body,
            r#"<text x="{}" y="28" font-size="18" text-anchor="middle" font-weight="bold">{}</text>"#,
            self.width / 2,
            escape_xml(title)
        );
    }

    pub fn text(&mut self, x: f64, y: f64, size: usize, anchor: &str, content: &str) {
        let _ = write!(
            self.body,
            r#"<text x="{:.2}" y="{:.2}" font-size="{}" text-anchor="{}">{}</text>"#,
            x,
            y,
            size,
            anchor,
            escape_xml(content)
        );
    }

    /// Rotated text, used for vertical axis labels
    pub fn vertical_text(&mut self, x: f64, y: f64, size: usize, content: &str) {
        let _ = write!(
            self.body,
            r#"<text x="{x:.2}" y="{y:.2}" font-size="{size}" text-anchor="middle" transform="rotate(-90 {x:.2} {y:.2})">{}</text>"#,
            escape_xml(content)
        );
    }

    pub fn line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, stroke: &str, width: f64) {
        let _ = write!(
            self.body,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="{}"/>"#,
            x1, y1, x2, y2, stroke, width
        );
    }

    /// Finish the document
    pub fn finish(mut self) -> String {
        self.body.push_str("</svg>");
        self.body
    }
}

/// Linear mapping from a data interval onto a pixel interval
#[derive(Debug, Clone, Copy)]
pub struct Scale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl Scale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn map(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (v - d0) / (d1 - d0) * (r1 - r0)
    }
}

/// Round tick positions covering `[min, max]`
///
/// Steps are 1, 2, 5 or 10 times a power of ten, giving roughly `target` ticks.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> Vec<f64> {
    if !(min.is_finite() && max.is_finite()) || max <= min || target == 0 {
        return Vec::new();
    }

    let raw = (max - min) / target as f64;
    let magnitude = 10f64.powf(raw.log10().floor());
    let step = [1.0, 2.0, 5.0, 10.0]
        .iter()
        .map(|m| m * magnitude)
        .find(|s| *s >= raw)
        .unwrap_or(10.0 * magnitude);

    let first = (min / step).ceil() as i64;
    let last = (max / step).floor() as i64;

    (first..=last).map(|i| i as f64 * step).collect()
}

/// Tick label without trailing zeros
pub fn format_tick(v: f64) -> String {
    if v.fract().abs() < 1e-9 {
        format!("{}", v.round() as i64)
    } else {
        let s = format!("{:.2}", v);
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Qualitative palette for categories (ColorBrewer Set1)
pub const SET1: [&str; 9] = [
    "#e41a1c", "#377eb8", "#4daf4a", "#984ea3", "#ff7f00", "#ffff33", "#a65628", "#f781bf",
    "#999999",
];

pub fn category_color(index: usize) -> &'static str {
    SET1[index % SET1.len()]
}

// Viridis anchor colours at t = 0, 0.25, 0.5, 0.75, 1
const VIRIDIS: [(u8, u8, u8); 5] = [
    (68, 1, 84),
    (59, 82, 139),
    (33, 145, 140),
    (94, 201, 98),
    (253, 231, 37),
];

/// Sample the viridis colormap at `t` in `[0, 1]`
pub fn viridis(t: f64) -> String {
    let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
    let scaled = t * (VIRIDIS.len() - 1) as f64;
    let i = (scaled.floor() as usize).min(VIRIDIS.len() - 2);
    let f = scaled - i as f64;

    let (a, b) = (VIRIDIS[i], VIRIDIS[i + 1]);
    let mix = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * f).round() as u8;

    format!("rgb({}, {}, {})", mix(a.0, b.0), mix(a.1, b.1), mix(a.2, b.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nice_ticks() {
        assert_eq!(nice_ticks(0.0, 12.0, 6), vec![0.0, 2.0, 4.0, 6.0, 8.0, 10.0, 12.0]);
        assert_eq!(nice_ticks(2.0, 52.0, 5), vec![10.0, 20.0, 30.0, 40.0, 50.0]);
        assert!(nice_ticks(5.0, 5.0, 5).is_empty());
    }

    #[test]
    fn test_format_tick() {
        assert_eq!(format_tick(10.0), "10");
        assert_eq!(format_tick(2.5), "2.5");
        assert_eq!(format_tick(-1.0), "-1");
    }

    #[test]
    fn test_scale_map() {
        let s = Scale::new((0.0, 10.0), (100.0, 200.0));
        assert_eq!(s.map(5.0), 150.0);

        let inverted = Scale::new((0.0, 10.0), (200.0, 100.0));
        assert_eq!(inverted.map(10.0), 100.0);
    }

    #[test]
    fn test_viridis_endpoints() {
        assert_eq!(viridis(0.0), "rgb(68, 1, 84)");
        assert_eq!(viridis(1.0), "rgb(253, 231, 37)");
        assert_eq!(viridis(f64::NAN), "rgb(68, 1, 84)");
    }

    #[test]
    fn test_canvas_escapes_text() {
        let mut canvas = SvgCanvas::new(100, 50);
        canvas.text(1.0, 2.0, 10, "start", "A & B");
        let svg = canvas.finish();

        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains("A &amp; B"));
    }
}
