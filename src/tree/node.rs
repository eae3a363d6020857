//! Node and result types produced by the tree builder

use std::ops::{Add, AddAssign};

use serde::Serialize;

/// Classification of a single filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryType {
    File,
    Directory,
    Link,
    /// A link whose target does not exist. Only produced when dead-link
    /// detection is enabled.
    #[serde(rename = "deadlink")]
    DeadLink,
    Executable,
}

/// One classified filesystem entry, possibly with nested children.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Node {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<String>,
    /// Present for directories and for links to directories (empty when the
    /// link was not followed).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contents: Option<Vec<Node>>,
}

impl Node {
    pub fn directory(name: impl Into<String>, contents: Vec<Node>) -> Self {
        Self {
            name: name.into(),
            kind: EntryType::Directory,
            size: None,
            target: None,
            contents: Some(contents),
        }
    }

    pub fn leaf(name: impl Into<String>, kind: EntryType, size: Option<u64>) -> Self {
        Self {
            name: name.into(),
            kind,
            size,
            target: None,
            contents: None,
        }
    }

    pub fn link(
        name: impl Into<String>,
        kind: EntryType,
        target: String,
        size: Option<u64>,
        contents: Option<Vec<Node>>,
    ) -> Self {
        Self {
            name: name.into(),
            kind,
            size,
            target: Some(target),
            contents,
        }
    }

    /// Children in display order; empty for leaf nodes.
    pub fn children(&self) -> &[Node] {
        self.contents.as_deref().unwrap_or(&[])
    }

    pub fn has_contents(&self) -> bool {
        self.contents.is_some()
    }
}

/// Directory and file totals for a subtree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Counts {
    pub directories: usize,
    pub files: usize,
}

impl Counts {
    pub const fn directory() -> Self {
        Self {
            directories: 1,
            files: 0,
        }
    }

    pub const fn file() -> Self {
        Self {
            directories: 0,
            files: 1,
        }
    }
}

impl Add for Counts {
    type Output = Counts;

    fn add(self, rhs: Counts) -> Counts {
        Counts {
            directories: self.directories + rhs.directories,
            files: self.files + rhs.files,
        }
    }
}

impl AddAssign for Counts {
    fn add_assign(&mut self, rhs: Counts) {
        *self = *self + rhs;
    }
}

/// Output of one traversal. The root directory itself is not counted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeResult {
    pub root: Node,
    pub directories: usize,
    pub files: usize,
}

impl TreeResult {
    pub fn new(root: Node, counts: Counts) -> Self {
        Self {
            root,
            directories: counts.directories,
            files: counts.files,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts_fold() {
        let total = Counts::directory() + Counts::file() + Counts::file();
        assert_eq!(
            total,
            Counts {
                directories: 1,
                files: 2
            }
        );

        let mut acc = Counts::default();
        acc += total;
        acc += Counts::directory();
        assert_eq!(acc.directories, 2);
        assert_eq!(acc.files, 2);
    }

    #[test]
    fn test_leaf_has_no_children() {
        let node = Node::leaf("a.txt", EntryType::File, None);
        assert!(!node.has_contents());
        assert!(node.children().is_empty());
    }

    #[test]
    fn test_json_omits_absent_fields() {
        let node = Node::leaf("run.sh", EntryType::Executable, None);
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["name"], "run.sh");
        assert_eq!(json["type"], "executable");
        assert!(json.get("size").is_none());
        assert!(json.get("target").is_none());
        assert!(json.get("contents").is_none());
    }

    #[test]
    fn test_json_link_fields() {
        let node = Node::link("L", EntryType::Link, "A".to_string(), Some(1), Some(vec![]));
        let json = serde_json::to_value(&node).unwrap();
        assert_eq!(json["type"], "link");
        assert_eq!(json["target"], "A");
        assert_eq!(json["size"], 1);
        assert_eq!(json["contents"], serde_json::json!([]));
    }

    #[test]
    fn test_dead_link_serializes_as_deadlink() {
        let json = serde_json::to_value(EntryType::DeadLink).unwrap();
        assert_eq!(json, "deadlink");
    }
}
