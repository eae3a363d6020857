//! Tree formatting and display
//!
//! - `config` - Output configuration types
//! - `style` - Per-type colour palette
//! - `tree` - Connector layout and coloured printing
//! - `report` - Summary line
//! - `json` - JSON output

mod config;
mod json;
mod report;
mod style;
mod tree;

pub use config::OutputConfig;
pub use json::{print_json, to_json};
pub use report::format_summary;
pub use style::Palette;
pub use tree::{TreeFormatter, TreeLine, connector_prefix, label, tree_lines};
