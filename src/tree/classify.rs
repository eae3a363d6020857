//! Entry classification
//!
//! Order matters: a symlink is reported as a link even when it points at a
//! directory. Whether to descend through it is the builder's decision.

use std::fs;
use std::io;
use std::path::Path;

use crate::error::{IoResultExt, TreeError};

use super::node::EntryType;

/// Result of classifying one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    pub kind: EntryType,
    /// Raw link text as stored, for links only.
    pub target: Option<String>,
}

impl Classification {
    fn plain(kind: EntryType) -> Self {
        Self { kind, target: None }
    }
}

/// Classify `path` without following a final symlink.
///
/// With `detect_dead_links` unset a link is always `Link`, even when its
/// target is missing; `DeadLink` is never produced.
pub fn classify(path: &Path, detect_dead_links: bool) -> Result<Classification, TreeError> {
    let meta = fs::symlink_metadata(path).at_path(path)?;

    if meta.file_type().is_symlink() {
        let target = fs::read_link(path).at_path(path)?;
        let kind = if detect_dead_links && is_dead_link(path) {
            EntryType::DeadLink
        } else {
            EntryType::Link
        };
        return Ok(Classification {
            kind,
            target: Some(target.to_string_lossy().into_owned()),
        });
    }

    if meta.is_dir() {
        return Ok(Classification::plain(EntryType::Directory));
    }

    if meta.is_file() && is_executable(path) {
        return Ok(Classification::plain(EntryType::Executable));
    }

    Ok(Classification::plain(EntryType::File))
}

/// A link is dead when resolving it reports the target as missing.
fn is_dead_link(path: &Path) -> bool {
    matches!(fs::metadata(path), Err(e) if e.kind() == io::ErrorKind::NotFound)
}

/// Executable by this process, checked against the effective uid/gid.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> bool {
    use rustix::fs::{Access, AtFlags, CWD, accessat};

    accessat(CWD, path, Access::EXEC_OK, AtFlags::EACCESS).is_ok()
}

#[cfg(not(unix))]
pub fn is_executable(_path: &Path) -> bool {
    false
}
