//! Tree formatter
//!
//! Lines are produced by a pre-order walk that carries one "was last
//! sibling" flag per depth level. The flag of each ancestor decides whether
//! its column shows a continuation bar or blank filler, so the layout stays
//! correct at any depth.

use std::io::{self, Write};

use termcolor::{ColorChoice, StandardStream, WriteColor};

use crate::tree::{Node, TreeResult};

use super::config::OutputConfig;
use super::report::format_summary;
use super::style::Palette;

const BRANCH: &str = "├── ";
const CORNER: &str = "└── ";
const CONTINUATION: &str = "│   ";
const BLANK: &str = "    ";

/// One display line: connector prefix plus the node it labels.
#[derive(Debug)]
pub struct TreeLine<'a> {
    pub prefix: String,
    pub node: &'a Node,
}

/// Flatten `root` into display order with connector prefixes.
pub fn tree_lines(root: &Node) -> Vec<TreeLine<'_>> {
    let mut lines = Vec::new();
    let mut last_flags = Vec::new();
    collect_lines(root, &mut last_flags, &mut lines);
    lines
}

fn collect_lines<'a>(node: &'a Node, last_flags: &mut Vec<bool>, lines: &mut Vec<TreeLine<'a>>) {
    lines.push(TreeLine {
        prefix: connector_prefix(last_flags),
        node,
    });

    let children = node.children();
    for (i, child) in children.iter().enumerate() {
        last_flags.push(i + 1 == children.len());
        collect_lines(child, last_flags, lines);
        last_flags.pop();
    }
}

/// Prefix for a node at depth `last_flags.len()`.
///
/// `last_flags[i]` is whether the ancestor at depth `i + 1` was the last of
/// its siblings; the final flag belongs to the node itself. An empty slice
/// is the root, which has no prefix.
pub fn connector_prefix(last_flags: &[bool]) -> String {
    let Some((&is_last, ancestors)) = last_flags.split_last() else {
        return String::new();
    };

    let mut prefix = String::with_capacity(last_flags.len() * CONTINUATION.len());
    for &ancestor_last in ancestors {
        prefix.push_str(if ancestor_last { BLANK } else { CONTINUATION });
    }
    prefix.push_str(if is_last { CORNER } else { BRANCH });
    prefix
}

fn size_column(size: u64) -> String {
    format!("[{:>11}]  ", size)
}

/// Uncoloured label: optional size column, name, and `-> target` for links.
pub fn label(node: &Node) -> String {
    let mut text = node.size.map(size_column).unwrap_or_default();
    text.push_str(&node.name);
    if let Some(target) = &node.target {
        text.push_str(" -> ");
        text.push_str(target);
    }
    text
}

/// Formatter for the classic tree layout followed by the summary line.
pub struct TreeFormatter {
    config: OutputConfig,
    palette: Palette,
}

impl TreeFormatter {
    pub fn new(config: OutputConfig) -> Self {
        Self {
            config,
            palette: Palette::new(),
        }
    }

    /// Plain tree lines, root first.
    pub fn render(&self, result: &TreeResult) -> Vec<String> {
        tree_lines(&result.root)
            .iter()
            .map(|line| format!("{}{}", line.prefix, label(line.node)))
            .collect()
    }

    /// Plain tree lines, a blank line and the summary.
    pub fn format(&self, result: &TreeResult) -> String {
        let mut output = String::new();
        for line in self.render(result) {
            output.push_str(&line);
            output.push('\n');
        }
        output.push('\n');
        output.push_str(&format_summary(result.directories, result.files));
        output.push('\n');
        output
    }

    pub fn print(&self, result: &TreeResult) -> io::Result<()> {
        let choice = if self.config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        let stdout = StandardStream::stdout(choice);
        let mut lock = stdout.lock();
        self.write(result, &mut lock)?;
        lock.flush()
    }

    /// Write the tree and summary, colouring names by type.
    pub fn write<W: WriteColor>(&self, result: &TreeResult, out: &mut W) -> io::Result<()> {
        for line in tree_lines(&result.root) {
            write!(out, "{}", line.prefix)?;
            self.write_label(out, line.node)?;
            writeln!(out)?;
        }
        writeln!(out)?;
        writeln!(out, "{}", format_summary(result.directories, result.files))?;
        Ok(())
    }

    fn write_label<W: WriteColor>(&self, out: &mut W, node: &Node) -> io::Result<()> {
        if let Some(size) = node.size {
            write!(out, "{}", size_column(size))?;
        }

        let spec = self.palette.spec(node.kind);
        if !self.config.use_color || spec.is_none() {
            write!(out, "{}", node.name)?;
        } else {
            out.set_color(spec)?;
            write!(out, "{}", node.name)?;
            out.reset()?;
        }

        if let Some(target) = &node.target {
            write!(out, " -> {}", target)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use termcolor::Buffer;

    use crate::tree::{Counts, EntryType};

    use super::*;

    fn plain() -> TreeFormatter {
        TreeFormatter::new(OutputConfig { use_color: false })
    }

    fn colored() -> TreeFormatter {
        TreeFormatter::new(OutputConfig { use_color: true })
    }

    fn file(name: &str) -> Node {
        Node::leaf(name, EntryType::File, None)
    }

    fn result(children: Vec<Node>, directories: usize, files: usize) -> TreeResult {
        TreeResult::new(Node::directory(".", children), Counts { directories, files })
    }

    fn sample() -> TreeResult {
        result(
            vec![
                Node::directory("A", vec![Node::leaf("c.txt", EntryType::File, Some(5))]),
                Node::leaf("b.txt", EntryType::File, Some(10)),
            ],
            1,
            2,
        )
    }

    #[test]
    fn test_connector_prefix() {
        assert_eq!(connector_prefix(&[]), "");
        assert_eq!(connector_prefix(&[false]), "├── ");
        assert_eq!(connector_prefix(&[true]), "└── ");
        assert_eq!(connector_prefix(&[false, true]), "│   └── ");
        assert_eq!(connector_prefix(&[true, false]), "    ├── ");
        assert_eq!(connector_prefix(&[false, true, false]), "│       ├── ");
    }

    #[test]
    fn test_render_sample() {
        let lines = plain().render(&sample());
        assert_eq!(
            lines,
            [
                ".",
                "├── A",
                "│   └── [          5]  c.txt",
                "└── [         10]  b.txt",
            ]
        );
    }

    #[test]
    fn test_format_appends_summary() {
        let output = plain().format(&sample());
        assert!(output.ends_with("\n\n1 directory, 2 files\n"));
    }

    #[test]
    fn test_deep_prefixes_track_each_ancestor() {
        // x (not last) > y (last) > z (not last) > leaf
        let tree = result(
            vec![
                Node::directory(
                    "x",
                    vec![Node::directory(
                        "y",
                        vec![
                            Node::directory("z", vec![file("leaf")]),
                            file("after_z"),
                        ],
                    )],
                ),
                file("tail"),
            ],
            3,
            3,
        );

        let lines = plain().render(&tree);
        assert_eq!(
            lines,
            [
                ".",
                "├── x",
                "│   └── y",
                "│       ├── z",
                "│       │   └── leaf",
                "│       └── after_z",
                "└── tail",
            ]
        );
    }

    #[test]
    fn test_one_corner_per_sibling_list() {
        let tree = result(vec![file("a"), file("b"), file("c"), file("d")], 0, 4);
        let lines = plain().render(&tree);
        let corners = lines.iter().filter(|l| l.starts_with("└── ")).count();
        let branches = lines.iter().filter(|l| l.starts_with("├── ")).count();
        assert_eq!(corners, 1);
        assert_eq!(branches, 3);
        assert_eq!(lines.last().map(String::as_str), Some("└── d"));
    }

    #[test]
    fn test_link_label_and_unfollowed_contents() {
        let tree = result(
            vec![
                Node::link("L", EntryType::Link, "A".to_string(), None, Some(Vec::new())),
                Node::link("l.txt", EntryType::Link, "b.txt".to_string(), None, None),
            ],
            1,
            1,
        );
        let lines = plain().render(&tree);
        assert_eq!(lines, [".", "├── L -> A", "└── l.txt -> b.txt"]);
    }

    #[test]
    fn test_followed_link_is_expanded() {
        let tree = result(
            vec![Node::link(
                "L",
                EntryType::Link,
                "A".to_string(),
                None,
                Some(vec![file("c.txt")]),
            )],
            1,
            1,
        );
        let lines = plain().render(&tree);
        assert_eq!(lines, [".", "└── L -> A", "    └── c.txt"]);
    }

    #[test]
    fn test_colored_output() {
        let tree = result(
            vec![
                Node::directory("A", vec![]),
                Node::leaf("run.sh", EntryType::Executable, None),
                Node::link("L", EntryType::Link, "A".to_string(), None, Some(vec![])),
                file("plain.txt"),
            ],
            2,
            2,
        );

        let mut buffer = Buffer::ansi();
        colored().write(&tree, &mut buffer).unwrap();
        let output = String::from_utf8(buffer.into_inner()).unwrap();

        assert!(output.contains("\x1b[34m"), "directory should be blue");
        assert!(output.contains("\x1b[32m"), "executable should be green");
        assert!(output.contains("\x1b[36m"), "link should be cyan");
        assert!(output.contains("└── plain.txt\n"), "files are unstyled");
        assert!(output.ends_with("\n\n2 directories, 2 files\n"));
    }

    #[test]
    fn test_color_disabled_on_ansi_stream() {
        let tree = sample();
        let mut buffer = Buffer::ansi();
        plain().write(&tree, &mut buffer).unwrap();
        let output = String::from_utf8(buffer.into_inner()).unwrap();

        assert!(!output.contains('\x1b'), "{:?}", output);
        assert_eq!(output, plain().format(&tree));
    }

    #[test]
    fn test_no_color_buffer_matches_format() {
        let tree = sample();
        let mut buffer = Buffer::no_color();
        plain().write(&tree, &mut buffer).unwrap();
        let output = String::from_utf8(buffer.into_inner()).unwrap();
        assert_eq!(output, plain().format(&tree));
    }
}
