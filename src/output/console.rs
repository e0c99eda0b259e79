//! Console tree reporter
//!
//! Writes one line per visit event as soon as it arrives:
//!
//! ```text
//! |-project
//! | |-a.txt (3)
//! | |-sub
//! | | |-b.txt (2)
//! | |-.git (ignore)
//! ```

use std::io::{self, Write};
use std::path::Path;

use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

use crate::tree::{VisitEvent, VisitSink, WalkSummary};

use super::config::OutputConfig;

/// Repeated once per depth level.
pub const INDENT_MARKER: &str = "| ";
/// Placed right before the entry name.
pub const ENTRY_MARKER: &str = "|-";

/// Streams the indented tree and the final summary to a color-capable writer.
pub struct TreeReporter<W: WriteColor = StandardStream> {
    out: W,
}

impl TreeReporter<StandardStream> {
    /// Reporter writing to stdout. Color detection is left to the caller.
    pub fn stdout(config: &OutputConfig) -> Self {
        let choice = if config.use_color {
            ColorChoice::Always
        } else {
            ColorChoice::Never
        };
        Self::new(StandardStream::stdout(choice))
    }
}

impl<W: WriteColor> TreeReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Write a single entry line.
    pub fn print_entry(
        &mut self,
        name: &str,
        depth: usize,
        is_dir: bool,
        annotation: Option<&str>,
    ) -> io::Result<()> {
        write!(self.out, "{}{}", INDENT_MARKER.repeat(depth), ENTRY_MARKER)?;
        if is_dir {
            self.out
                .set_color(ColorSpec::new().set_fg(Some(Color::Yellow)))?;
            write!(self.out, "{}", name)?;
            self.out.reset()?;
        } else {
            write!(self.out, "{}", name)?;
        }
        if let Some(info) = annotation {
            write!(self.out, " ({})", info)?;
        }
        writeln!(self.out)
    }
}

impl<W: WriteColor> VisitSink for TreeReporter<W> {
    fn visit(&mut self, event: &VisitEvent<'_>) -> io::Result<()> {
        let annotation = event.outcome.annotation();
        self.print_entry(event.name, event.depth, event.is_dir(), annotation.as_deref())
    }

    fn finish(&mut self, root: &Path, summary: &WalkSummary) -> io::Result<()> {
        writeln!(self.out)?;
        writeln!(self.out, "Directory: {}", root.display())?;
        writeln!(self.out, "Lines: {}", summary.lines)?;
        self.out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tree::{NodeKind, Outcome};
    use termcolor::Buffer;

    fn render(events: &[(&str, usize, NodeKind, Outcome)]) -> String {
        let mut reporter = TreeReporter::new(Buffer::no_color());
        for &(name, depth, kind, outcome) in events {
            reporter
                .visit(&VisitEvent {
                    path: Path::new(name),
                    name,
                    depth,
                    kind,
                    outcome,
                })
                .unwrap();
        }
        String::from_utf8(reporter.into_inner().into_inner()).unwrap()
    }

    #[test]
    fn test_entry_lines() {
        let out = render(&[
            ("project", 0, NodeKind::Directory, Outcome::Entered),
            ("a.txt", 1, NodeKind::File, Outcome::Counted(3)),
            ("sub", 1, NodeKind::Directory, Outcome::Entered),
            ("b.txt", 2, NodeKind::File, Outcome::Counted(2)),
            (".git", 1, NodeKind::Directory, Outcome::Ignored),
        ]);
        assert_eq!(
            out,
            "|-project\n| |-a.txt (3)\n| |-sub\n| | |-b.txt (2)\n| |-.git (ignore)\n"
        );
    }

    #[test]
    fn test_zero_count_still_annotated() {
        let out = render(&[("empty.txt", 2, NodeKind::File, Outcome::Counted(0))]);
        assert_eq!(out, "| | |-empty.txt (0)\n");
    }

    #[test]
    fn test_directory_colored_with_ansi() {
        let mut reporter = TreeReporter::new(Buffer::ansi());
        reporter.print_entry("src", 1, true, None).unwrap();
        reporter.print_entry("main.rs", 2, false, Some("10")).unwrap();
        let out = String::from_utf8(reporter.into_inner().into_inner()).unwrap();

        let mut lines = out.lines();
        let dir_line = lines.next().unwrap();
        assert!(dir_line.starts_with("| |-\x1b["), "directory should be colored: {dir_line:?}");
        assert!(dir_line.contains("src"));
        assert_eq!(lines.next().unwrap(), "| | |-main.rs (10)");
    }

    #[test]
    fn test_finish_prints_summary() {
        let mut reporter = TreeReporter::new(Buffer::no_color());
        let summary = WalkSummary {
            lines: 5,
            ..WalkSummary::default()
        };
        reporter.finish(Path::new("/work/project"), &summary).unwrap();
        let out = String::from_utf8(reporter.into_inner().into_inner()).unwrap();
        assert_eq!(out, "\nDirectory: /work/project\nLines: 5\n");
    }
}
