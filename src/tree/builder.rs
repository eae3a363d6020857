//! TreeBuilder - walks a directory once and builds the full node tree

use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, warn};

use crate::error::{IoResultExt, TreeError};

use super::classify::classify;
use super::config::BuildOptions;
use super::node::{Counts, EntryType, Node, TreeResult};
use super::utils::{compare_names, entry_size, is_hidden, resolves_to_dir};

/// A listed directory entry that survived the hidden filter.
struct Entry {
    name: String,
    path: PathBuf,
}

/// Builds an immutable `TreeResult` from a root directory.
///
/// Each recursive call returns its own children and `Counts`; the caller
/// folds them into its totals. Sibling subtrees may be built in parallel,
/// but results are always collected in display order.
pub struct TreeBuilder {
    options: BuildOptions,
}

impl TreeBuilder {
    pub fn new(options: BuildOptions) -> Self {
        Self { options }
    }

    /// Build the tree rooted at `root`. The root node is named after `root`
    /// as given.
    ///
    /// Fails if the root is missing, is not a directory, or cannot be listed.
    /// Failures below the root are recovered and logged.
    pub fn build(&self, root: &Path) -> Result<TreeResult, TreeError> {
        let meta = fs::metadata(root).map_err(|e| TreeError::from_root_io(root, e))?;
        if !meta.is_dir() {
            return Err(TreeError::NotADirectory(root.to_path_buf()));
        }

        let ancestors = if self.options.follow_symlinks {
            vec![root.canonicalize().at_path(root)?]
        } else {
            Vec::new()
        };

        let (contents, counts) = match self.options.parallel_workers {
            0 | 1 => self.build_dir(root, &ancestors)?,
            n => match rayon::ThreadPoolBuilder::new().num_threads(n).build() {
                Ok(pool) => pool.install(|| self.build_dir(root, &ancestors))?,
                Err(err) => {
                    // Fall back to rayon's global pool
                    warn!(%err, workers = n, "failed to create thread pool");
                    self.build_dir(root, &ancestors)?
                }
            },
        };

        debug!(
            root = %root.display(),
            directories = counts.directories,
            files = counts.files,
            "tree built"
        );
        Ok(TreeResult::new(
            Node::directory(root.display().to_string(), contents),
            counts,
        ))
    }

    /// Build the sorted children of `dir` and the totals for its subtree.
    /// `dir` itself is not counted; the caller does that.
    fn build_dir(&self, dir: &Path, ancestors: &[PathBuf]) -> Result<(Vec<Node>, Counts), TreeError> {
        let entries = self.list(dir)?;

        let built: Vec<Option<(Node, Counts)>> = if self.options.is_sequential() {
            entries
                .iter()
                .map(|entry| self.build_entry(entry, ancestors))
                .collect()
        } else {
            entries
                .par_iter()
                .map(|entry| self.build_entry(entry, ancestors))
                .collect()
        };

        let mut nodes = Vec::with_capacity(built.len());
        let mut counts = Counts::default();
        for (node, c) in built.into_iter().flatten() {
            nodes.push(node);
            counts += c;
        }
        Ok((nodes, counts))
    }

    /// Read, filter and sort the immediate entries of `dir`.
    fn list(&self, dir: &Path) -> Result<Vec<Entry>, TreeError> {
        let read = fs::read_dir(dir).at_path(dir)?;

        let mut entries: Vec<Entry> = read
            .filter_map(|entry| match entry {
                Ok(e) => Some(Entry {
                    name: e.file_name().to_string_lossy().into_owned(),
                    path: e.path(),
                }),
                Err(err) => {
                    warn!(dir = %dir.display(), %err, "skipping unreadable entry");
                    None
                }
            })
            .filter(|e| self.options.show_hidden || !is_hidden(&e.name))
            .collect();

        entries.sort_by(|a, b| compare_names(&a.name, &b.name));
        Ok(entries)
    }

    /// Classify one entry and, for directories, build its subtree.
    /// Returns `None` when the entry vanished and must not be shown.
    fn build_entry(&self, entry: &Entry, ancestors: &[PathBuf]) -> Option<(Node, Counts)> {
        let class = match classify(&entry.path, self.options.detect_dead_links) {
            Ok(c) => c,
            Err(err) => {
                warn!(%err, "skipping entry");
                return None;
            }
        };

        let size = if self.options.show_size && class.kind != EntryType::Directory {
            match entry_size(&entry.path) {
                Ok(s) => Some(s),
                Err(err) => {
                    warn!(%err, "skipping entry");
                    return None;
                }
            }
        } else {
            None
        };

        let name = entry.name.clone();
        match (class.kind, class.target) {
            (EntryType::Directory, _) => {
                let (contents, counts) = self.subtree(&entry.path, ancestors)?;
                Some((
                    Node::directory(name, contents),
                    counts + Counts::directory(),
                ))
            }
            (EntryType::Link, Some(target)) if resolves_to_dir(&entry.path) => {
                if self.options.follow_symlinks {
                    let (contents, counts) = self.subtree(&entry.path, ancestors)?;
                    Some((
                        Node::link(name, EntryType::Link, target, size, Some(contents)),
                        counts + Counts::directory(),
                    ))
                } else {
                    Some((
                        Node::link(name, EntryType::Link, target, size, Some(Vec::new())),
                        Counts::directory(),
                    ))
                }
            }
            (kind @ (EntryType::Link | EntryType::DeadLink), Some(target)) => Some((
                Node::link(name, kind, target, size, None),
                Counts::file(),
            )),
            (kind, _) => Some((Node::leaf(name, kind, size), Counts::file())),
        }
    }

    /// Build the contents of a directory (or a followed link to one).
    ///
    /// A directory that cannot be listed is shown with no contents. A
    /// followed link back into the current descent path is not entered.
    fn subtree(&self, path: &Path, ancestors: &[PathBuf]) -> Option<(Vec<Node>, Counts)> {
        let mut descent = Vec::new();
        if self.options.follow_symlinks {
            let canonical = match path.canonicalize() {
                Ok(p) => p,
                Err(err) => return recover(TreeError::from_io(path, err)),
            };
            if ancestors.contains(&canonical) {
                warn!(path = %path.display(), "recursive link, not followed");
                return Some((Vec::new(), Counts::default()));
            }
            descent.reserve(ancestors.len() + 1);
            descent.extend_from_slice(ancestors);
            descent.push(canonical);
        }

        match self.build_dir(path, &descent) {
            Ok(built) => Some(built),
            Err(err) => recover(err),
        }
    }
}

/// Vanished directories are dropped; any other failure keeps the directory
/// with empty contents.
fn recover(err: TreeError) -> Option<(Vec<Node>, Counts)> {
    match err {
        TreeError::VanishedEntry(_) => {
            warn!(%err, "skipping entry");
            None
        }
        _ => {
            warn!(%err, "showing directory without contents");
            Some((Vec::new(), Counts::default()))
        }
    }
}
