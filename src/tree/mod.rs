//! Directory tree building
//!
//! The builder walks the filesystem once, classifies every entry and returns
//! an immutable `TreeResult` with aggregate directory and file counts.
//!
//! - `classify` - entry classification (link, directory, executable, file)
//! - `builder` - recursive traversal producing the node tree
//! - `node` - the built value types

mod builder;
mod classify;
mod config;
mod node;
mod utils;

pub use builder::TreeBuilder;
pub use classify::{Classification, classify, is_executable};
pub use config::BuildOptions;
pub use node::{Counts, EntryType, Node, TreeResult};
pub use utils::{compare_names, is_hidden};
