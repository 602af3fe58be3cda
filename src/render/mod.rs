//! Chart rendering.
//!
//! Charts are produced as strings (HTML for the sunburst, SVG for the rest)
//! and handed to `output` for writing.

pub mod ridgeline;
pub mod scatter;
pub mod summary;
pub mod sunburst;
pub mod svg;

// Re-export main types
pub use ridgeline::{generate_ridgeline, RidgelineConfig};
pub use scatter::{generate_scatter, ScatterConfig};
pub use summary::generate_text_summary;
pub use sunburst::{generate_sunburst, SunburstConfig, SunburstTrace};
