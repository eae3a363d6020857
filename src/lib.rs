//! Arbor - directory tree listing with type-aware colours, sizes and symlink following

pub mod error;
pub mod output;
pub mod tree;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::TreeError;
pub use output::{OutputConfig, Palette, TreeFormatter, format_summary, print_json};
pub use tree::{BuildOptions, Counts, EntryType, Node, TreeBuilder, TreeResult, classify};
