//! linetree - count the lines of every file in a project and print them as a tree

use std::path::Path;

pub mod counter;
pub mod error;
pub mod output;
pub mod rules;
pub mod tree;

#[cfg(feature = "test-utils")]
pub mod test_utils;

pub use counter::count_lines;
pub use error::{LinetreeError, Result};
pub use output::{JsonReporter, OutputConfig, TreeReporter};
pub use rules::{IgnorePattern, IgnoreRules, PatternSyntax};
pub use tree::{
    resolve_root, NodeKind, Outcome, TreeWalker, VisitEvent, VisitSink, WalkSummary, WalkerConfig,
};

/// Build the rules for `root` and walk it, streaming events to `sink`.
///
/// The rules, including the root's `.gitignore`, are complete before the
/// first event is emitted, so a bad pattern produces no output at all.
pub fn count_project<S: VisitSink>(
    root: &Path,
    config: &WalkerConfig,
    sink: &mut S,
) -> Result<WalkSummary> {
    TreeWalker::for_root(root, config)?.walk(root, sink)
}
