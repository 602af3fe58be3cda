use chart_studio::aggregator::{build_hierarchy, flatten};
use chart_studio::loader::{load_hierarchy_records, HierarchyColumns, HierarchyRecord};
use chart_studio::output::{read_nodes, validate_path, write_document, write_nodes, NodeDump};
use chart_studio::render::{generate_sunburst, SunburstConfig};
use pretty_assertions::assert_eq;
use std::path::Path;
use tempfile::NamedTempFile;

fn sample_dump() -> NodeDump {
    let records = vec![
        HierarchyRecord::new("West", "United States", "Consumer"),
        HierarchyRecord::new("West", "United States", "Corporate"),
    ];
    NodeDump::new("orders.csv", "Buys", flatten(&build_hierarchy(&records, "Buys")))
}

#[test]
fn test_write_and_read_node_dump() {
    let dump = sample_dump();
    let temp_file = NamedTempFile::new().unwrap();

    write_nodes(&dump, temp_file.path()).unwrap();
    let loaded = read_nodes(temp_file.path()).unwrap();

    assert_eq!(loaded.nodes, dump.nodes);
    assert_eq!(loaded.total, 2);
    assert_eq!(loaded.root_label, "Buys");
}

#[test]
fn test_validate_output_path_empty() {
    assert!(validate_path(Path::new("")).is_err());
}

#[test]
fn test_validate_output_path_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    assert!(validate_path(temp_dir.path()).is_err());
}

#[test]
fn test_node_dump_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested_path = temp_dir.path().join("nested/dirs/nodes.json");

    write_nodes(&sample_dump(), &nested_path).unwrap();

    assert!(nested_path.exists());
}

#[test]
fn test_sunburst_document_from_csv_file() {
    let temp_dir = tempfile::tempdir().unwrap();
    let csv_path = temp_dir.path().join("orders.csv");
    std::fs::write(
        &csv_path,
        "region,country,segment\nWest,United States,Consumer\nEast,Canada,Corporate\n",
    )
    .unwrap();

    let loaded = load_hierarchy_records(&csv_path, &HierarchyColumns::default(), None).unwrap();
    let flat = flatten(&build_hierarchy(&loaded.rows, "Buys"));
    let html = generate_sunburst(&flat, &SunburstConfig::default()).unwrap();

    let out = temp_dir.path().join("plots/sunburst.html");
    write_document(&html, &out).unwrap();

    let written = std::fs::read_to_string(&out).unwrap();
    assert!(written.contains("cty⟂West⟂United States"));
    assert!(written.contains("Plotly.newPlot"));
}
