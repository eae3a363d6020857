//! Per-type colour palette

use termcolor::{Color, ColorSpec};

use crate::tree::EntryType;

/// Immutable mapping from entry type to display style.
#[derive(Debug, Clone)]
pub struct Palette {
    directory: ColorSpec,
    executable: ColorSpec,
    link: ColorSpec,
    dead_link: ColorSpec,
    file: ColorSpec,
}

impl Palette {
    pub fn new() -> Self {
        let mut dead_link = bold(Color::Red);
        dead_link.set_bg(Some(Color::Black));

        Self {
            directory: bold(Color::Blue),
            executable: bold(Color::Green),
            link: bold(Color::Cyan),
            dead_link,
            file: ColorSpec::new(),
        }
    }

    pub fn spec(&self, kind: EntryType) -> &ColorSpec {
        match kind {
            EntryType::Directory => &self.directory,
            EntryType::Executable => &self.executable,
            EntryType::Link => &self.link,
            EntryType::DeadLink => &self.dead_link,
            EntryType::File => &self.file,
        }
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}

fn bold(color: Color) -> ColorSpec {
    let mut spec = ColorSpec::new();
    spec.set_fg(Some(color)).set_bold(true);
    spec
}
