//! Shared helpers for listing directories

use std::cmp::Ordering;
use std::fs;
use std::path::Path;

use crate::error::{IoResultExt, TreeError};

/// Hidden entries are those whose name starts with '.'.
pub fn is_hidden(name: &str) -> bool {
    name.starts_with('.')
}

/// Case-insensitive order, ties broken by the original name so the result
/// does not depend on the order the filesystem returned entries in.
pub fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Byte length of the entry, following links. A link whose target is
/// missing reports its own length.
pub fn entry_size(path: &Path) -> Result<u64, TreeError> {
    match fs::metadata(path) {
        Ok(meta) => Ok(meta.len()),
        Err(_) => fs::symlink_metadata(path).at_path(path).map(|m| m.len()),
    }
}

/// Whether `path` resolves, through any links, to a directory.
pub fn resolves_to_dir(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.is_dir()).unwrap_or(false)
}
