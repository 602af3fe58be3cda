//! CLI command implementations.
//!
//! Each command is implemented in its own module.
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod ridgeline;
pub mod scatter;
pub mod sunburst;
pub mod utils;

// Re-export main command functions
pub use models::{RidgelineArgs, ScatterArgs, SunburstArgs};
pub use ridgeline::{execute_ridgeline, validate_ridgeline_args};
pub use scatter::{execute_scatter, validate_scatter_args};
pub use sunburst::{execute_sunburst, validate_sunburst_args};
pub use utils::{display_schema, display_version, validate_nodes_file};
