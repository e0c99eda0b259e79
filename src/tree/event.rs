//! Visit events produced by the walker and the sink trait that consumes them

use std::ops::AddAssign;
use std::path::Path;

use serde::Serialize;

/// Kind of filesystem entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NodeKind {
    Directory,
    File,
}

/// What the walker decided for an entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Directory that is being descended into
    Entered,
    /// File whose lines were counted
    Counted(u64),
    /// Entry matched an ignore rule; not descended or counted
    Ignored,
}

impl Outcome {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Entered => "entered",
            Self::Counted(_) => "counted",
            Self::Ignored => "ignored",
        }
    }

    pub fn lines(&self) -> Option<u64> {
        match self {
            Self::Counted(n) => Some(*n),
            _ => None,
        }
    }

    /// Text shown in parentheses after the entry name, if any.
    pub fn annotation(&self) -> Option<String> {
        match self {
            Self::Entered => None,
            Self::Counted(n) => Some(n.to_string()),
            Self::Ignored => Some("ignore".to_string()),
        }
    }
}

/// One traversal decision, handed to the sink as soon as it is made.
#[derive(Debug, Clone, Copy)]
pub struct VisitEvent<'a> {
    pub path: &'a Path,
    pub name: &'a str,
    /// Distance from the root (root = 0)
    pub depth: usize,
    pub kind: NodeKind,
    pub outcome: Outcome,
}

impl VisitEvent<'_> {
    pub fn is_dir(&self) -> bool {
        self.kind == NodeKind::Directory
    }
}

/// Tallies for a walked subtree. Subtrees are summed into their parent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct WalkSummary {
    /// Total lines across all counted files
    pub lines: u64,
    /// Files whose lines were counted
    pub files: usize,
    /// Directories entered, the root included
    pub directories: usize,
    /// Entries skipped by an ignore rule
    pub ignored: usize,
}

impl WalkSummary {
    pub(crate) fn file(lines: u64) -> Self {
        Self {
            lines,
            files: 1,
            ..Self::default()
        }
    }

    pub(crate) fn directory() -> Self {
        Self {
            directories: 1,
            ..Self::default()
        }
    }

    pub(crate) fn ignored() -> Self {
        Self {
            ignored: 1,
            ..Self::default()
        }
    }
}

impl AddAssign for WalkSummary {
    fn add_assign(&mut self, rhs: Self) {
        self.lines += rhs.lines;
        self.files += rhs.files;
        self.directories += rhs.directories;
        self.ignored += rhs.ignored;
    }
}

/// Receives visit events in traversal order.
pub trait VisitSink {
    fn visit(&mut self, event: &VisitEvent<'_>) -> std::io::Result<()>;

    /// Called once after a successful walk. Never called when the walk fails.
    fn finish(&mut self, root: &Path, summary: &WalkSummary) -> std::io::Result<()>;
}

impl<S: VisitSink + ?Sized> VisitSink for &mut S {
    fn visit(&mut self, event: &VisitEvent<'_>) -> std::io::Result<()> {
        (**self).visit(event)
    }

    fn finish(&mut self, root: &Path, summary: &WalkSummary) -> std::io::Result<()> {
        (**self).finish(root, summary)
    }
}
