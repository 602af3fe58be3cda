//! Chart document writer (HTML or SVG).

use super::{ensure_parent_dir, validate_path};
use crate::utils::error::OutputError;
use log::{debug, info};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const KNOWN_EXTENSIONS: [&str; 3] = ["html", "htm", "svg"];

/// Write a rendered chart to a file
///
/// **Public** - main entry point for document output
///
/// # Arguments
/// * `content` - HTML or SVG string from a renderer
/// * `output_path` - Destination; missing parent directories are created
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::InvalidPath` - Path is empty, a directory, or its parent cannot be created
///
/// # Example
/// ```ignore
/// let svg = generate_scatter(&series, &ScatterConfig::default())?;
/// write_document(&svg, "plots/scatter.svg")?;
/// ```
pub fn write_document(content: &str, output_path: impl AsRef<Path>) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing chart to: {}", output_path.display());

    validate_path(output_path)?;

    let known = output_path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| KNOWN_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
        .unwrap_or(false);
    if !known {
        debug!(
            "Warning: File does not have an .html or .svg extension: {}",
            output_path.display()
        );
    }

    ensure_parent_dir(output_path)?;

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    writer.write_all(content.as_bytes())?;
    writer.flush()?;

    info!(
        "Chart written successfully ({} bytes, {:.2} KB)",
        content.len(),
        content.len() as f64 / 1024.0
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    const VALID_SVG: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" width="10" height="10"></svg>"#;

    #[test]
    fn test_write_document() {
        let temp_file = NamedTempFile::new().unwrap();
        let path = temp_file.path();

        write_document(VALID_SVG, path).unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), VALID_SVG);
    }

    #[test]
    fn test_write_creates_parent_dirs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let nested_path = temp_dir.path().join("plots/deeper/chart.svg");

        write_document(VALID_SVG, &nested_path).unwrap();

        assert!(nested_path.exists());
    }

    #[test]
    fn test_write_document_to_directory_fails() {
        let temp_dir = tempfile::tempdir().unwrap();
        let result = write_document(VALID_SVG, temp_dir.path());
        assert!(matches!(result, Err(OutputError::InvalidPath(_))));
    }
}
