//! Error types for tree building

use std::io;
use std::path::{Path, PathBuf};

/// Errors raised while classifying entries or building a tree.
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// The requested root does not exist.
    #[error("cannot access '{}': No such file or directory", .0.display())]
    RootNotFound(PathBuf),

    /// The requested root exists but is not a directory.
    #[error("'{}': Not a directory", .0.display())]
    NotADirectory(PathBuf),

    /// A directory could not be listed.
    #[error("cannot open directory '{}': Permission denied", .0.display())]
    PermissionDenied(PathBuf),

    /// An entry disappeared between listing and inspection.
    #[error("'{}' vanished during traversal", .0.display())]
    VanishedEntry(PathBuf),

    /// Any other I/O failure.
    #[error("I/O error at '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl TreeError {
    /// Map an I/O error on a non-root entry to the matching variant.
    pub fn from_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::VanishedEntry(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }

    /// Map an I/O error on the traversal root. A missing root is fatal in its own way.
    pub fn from_root_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::RootNotFound(path.to_path_buf()),
            _ => Self::from_io(path, source),
        }
    }
}

/// Extension trait attaching a path to `io::Result` failures.
pub(crate) trait IoResultExt<T> {
    fn at_path(self, path: &Path) -> Result<T, TreeError>;
}

impl<T> IoResultExt<T> for io::Result<T> {
    fn at_path(self, path: &Path) -> Result<T, TreeError> {
        self.map_err(|e| TreeError::from_io(path, e))
    }
}
