//! Sunburst chart as a standalone HTML document.
//!
//! The page loads plotly from its CDN and draws a single sunburst trace
//! with "total" branch values, so each ring sums into its parent.

use crate::aggregator::FlatNode;
use crate::utils::config::{DEFAULT_ROOT_LABEL, PLOTLY_CDN_URL};
use crate::utils::error::RenderError;
use crate::utils::escape_xml;
use log::info;
use serde::Serialize;
use serde_json::json;

/// Sunburst configuration
#[derive(Debug, Clone)]
pub struct SunburstConfig {
    pub title: String,

    /// Word used for values in the hover text
    pub value_label: String,

    /// Script URL for plotly
    pub plotly_src: String,
}

impl Default for SunburstConfig {
    fn default() -> Self {
        Self {
            title: default_title(DEFAULT_ROOT_LABEL),
            value_label: DEFAULT_ROOT_LABEL.to_string(),
            plotly_src: PLOTLY_CDN_URL.to_string(),
        }
    }
}

impl SunburstConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Title and hover wording derived from the root label
    pub fn for_root(root_label: &str) -> Self {
        Self {
            title: default_title(root_label),
            value_label: root_label.to_string(),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

fn default_title(root_label: &str) -> String {
    format!("{} → Region → Country → Segment", root_label)
}

/// Four parallel arrays, the shape plotly expects
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SunburstTrace {
    pub labels: Vec<String>,
    pub ids: Vec<String>,
    pub parents: Vec<String>,
    pub values: Vec<u64>,
}

impl SunburstTrace {
    pub fn from_nodes(nodes: &[FlatNode]) -> Self {
        let mut trace = Self::default();
        for node in nodes {
            trace.labels.push(node.label.clone());
            trace.ids.push(node.id.clone());
            trace.parents.push(node.parent.clone());
            trace.values.push(node.value);
        }
        trace
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }
}

/// Generate the sunburst HTML document
///
/// **Public** - main entry point for sunburst rendering
///
/// # Errors
/// * `RenderError::EmptyData` - No nodes at all (not even a root)
/// * `RenderError::Serialization` - Chart data could not be encoded
pub fn generate_sunburst(nodes: &[FlatNode], config: &SunburstConfig) -> Result<String, RenderError> {
    if nodes.is_empty() {
        return Err(RenderError::EmptyData);
    }

    let trace = SunburstTrace::from_nodes(nodes);
    info!("Generating sunburst with {} nodes", trace.len());

    let data = json!([{
        "type": "sunburst",
        "labels": trace.labels,
        "ids": trace.ids,
        "parents": trace.parents,
        "values": trace.values,
        "branchvalues": "total",
        "insidetextorientation": "auto",
        "hovertemplate": format!(
            "<b>%{{label}}</b><br>{}: %{{value}}<extra></extra>",
            config.value_label
        ),
    }]);

    let layout = json!({
        "title": { "text": config.title },
        "margin": { "t": 60, "l": 10, "r": 10, "b": 10 },
        "paper_bgcolor": "white",
    });

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
<meta charset="utf-8">
<title>{title}</title>
<script src="{src}"></script>
</head>
<body>
<div id="chart" style="width:100%;height:100vh;"></div>
<script>
var data = {data};
var layout = {layout};
Plotly.newPlot("chart", data, layout, {{"responsive": true}});
</script>
</body>
</html>
"#,
        title = escape_xml(&config.title),
        src = escape_xml(&config.plotly_src),
        data = script_json(&data)?,
        layout = script_json(&layout)?,
    );

    info!("Sunburst generated successfully ({} bytes)", html.len());
    Ok(html)
}

/// Serialize JSON for embedding in a `<script>` element
///
/// **Private** - `</` would otherwise let data close the script tag
fn script_json(value: &serde_json::Value) -> Result<String, RenderError> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nodes() -> Vec<FlatNode> {
        vec![
            FlatNode {
                id: "root".into(),
                label: "Buys".into(),
                parent: String::new(),
                value: 1,
            },
            FlatNode {
                id: "reg⟂West".into(),
                label: "West".into(),
                parent: "root".into(),
                value: 1,
            },
        ]
    }

    #[test]
    fn test_trace_from_nodes() {
        let trace = SunburstTrace::from_nodes(&nodes());

        assert_eq!(trace.labels, vec!["Buys", "West"]);
        assert_eq!(trace.parents, vec!["", "root"]);
        assert_eq!(trace.values, vec![1, 1]);
    }

    #[test]
    fn test_generate_sunburst_html() {
        let html = generate_sunburst(&nodes(), &SunburstConfig::default()).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(PLOTLY_CDN_URL));
        assert!(html.contains(r#""branchvalues":"total""#));
        assert!(html.contains("Buys → Region → Country → Segment"));
        assert!(html.contains("reg⟂West"));
    }

    #[test]
    fn test_script_content_cannot_close_tag() {
        let mut nodes = nodes();
        nodes[1].label = "</script><b>x".into();

        let html = generate_sunburst(&nodes, &SunburstConfig::default()).unwrap();

        assert_eq!(html.matches("</script>").count(), 2);
    }

    #[test]
    fn test_generate_sunburst_empty() {
        let result = generate_sunburst(&[], &SunburstConfig::default());
        assert!(matches!(result, Err(RenderError::EmptyData)));
    }
}
