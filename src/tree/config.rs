//! Configuration types for the tree builder

/// Options controlling what the builder includes and how it descends.
#[derive(Debug, Clone)]
pub struct BuildOptions {
    /// Include entries whose name starts with '.'
    pub show_hidden: bool,
    /// Record byte sizes for non-directory entries
    pub show_size: bool,
    /// Recurse into directories reached through a symlink
    pub follow_symlinks: bool,
    /// Classify links with a missing target as dead links.
    /// Off by default: dead links are otherwise reported as plain links.
    pub detect_dead_links: bool,
    /// Number of workers used to build sibling subtrees.
    /// 0 = auto-detect (rayon's global pool)
    /// 1 = sequential (no parallelism)
    /// N = dedicated pool of N threads
    pub parallel_workers: usize,
}

impl BuildOptions {
    pub fn is_sequential(&self) -> bool {
        self.parallel_workers == 1
    }
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            show_hidden: false,
            show_size: false,
            follow_symlinks: false,
            detect_dead_links: false,
            parallel_workers: 0,
        }
    }
}
