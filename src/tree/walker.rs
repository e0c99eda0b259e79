//! TreeWalker - depth-first counting walk that streams visit events

use std::fs;
use std::path::Path;

use crate::counter::count_lines;
use crate::error::{LinetreeError, Result};
use crate::rules::IgnoreRules;

use super::config::WalkerConfig;
use super::event::{NodeKind, Outcome, VisitEvent, VisitSink, WalkSummary};

/// Sequential pre-order walker.
///
/// Children are visited in the order the filesystem lists them, and each
/// child's subtree is finished before the next child starts. Every decision
/// is handed to the sink as it is made, so the sink sees the tree in
/// pre-order. The first I/O error aborts the walk.
pub struct TreeWalker {
    rules: IgnoreRules,
}

impl TreeWalker {
    pub fn new(rules: IgnoreRules) -> Self {
        Self { rules }
    }

    /// Build the rule set for `root` from `config`, loading the root's
    /// ignore file before returning.
    pub fn for_root(root: &Path, config: &WalkerConfig) -> Result<Self> {
        let rules = IgnoreRules::for_root(
            root,
            &config.extra_ignores,
            config.read_ignore_file,
            config.pattern_syntax,
        )?;
        Ok(Self::new(rules))
    }

    /// Walk `root`, streaming events to `sink`, and return the tallies.
    ///
    /// The root itself is the depth-0 node. `sink.finish` runs only when the
    /// whole walk succeeds.
    pub fn walk<S: VisitSink>(&self, root: &Path, sink: &mut S) -> Result<WalkSummary> {
        let name = display_name(root);
        let summary = self.walk_dir(root, &name, 0, sink)?;
        tracing::debug!(
            lines = summary.lines,
            files = summary.files,
            ignored = summary.ignored,
            "walk finished"
        );
        sink.finish(root, &summary)?;
        Ok(summary)
    }

    fn walk_dir<S: VisitSink>(
        &self,
        path: &Path,
        name: &str,
        depth: usize,
        sink: &mut S,
    ) -> Result<WalkSummary> {
        if name.is_empty() || name == "." || name == ".." {
            return Ok(WalkSummary::default());
        }

        if self.rules.should_ignore(name) {
            tracing::debug!(path = %path.display(), "ignored directory");
            emit(sink, path, name, depth, NodeKind::Directory, Outcome::Ignored)?;
            return Ok(WalkSummary::ignored());
        }

        emit(sink, path, name, depth, NodeKind::Directory, Outcome::Entered)?;
        tracing::trace!(path = %path.display(), depth, "entering directory");

        let mut summary = WalkSummary::directory();
        let entries = fs::read_dir(path).map_err(|source| LinetreeError::ReadDir {
            path: path.to_path_buf(),
            source,
        })?;

        for entry in entries {
            let entry = entry.map_err(|source| LinetreeError::ReadDir {
                path: path.to_path_buf(),
                source,
            })?;
            let child_path = entry.path();
            let child_name = entry.file_name().to_string_lossy().into_owned();

            // Follows symlinks, so a link to a directory is walked as one.
            let metadata = fs::metadata(&child_path).map_err(|source| LinetreeError::Metadata {
                path: child_path.clone(),
                source,
            })?;

            summary += if metadata.is_dir() {
                self.walk_dir(&child_path, &child_name, depth + 1, sink)?
            } else {
                self.walk_file(&child_path, &child_name, depth + 1, sink)?
            };
        }

        Ok(summary)
    }

    fn walk_file<S: VisitSink>(
        &self,
        path: &Path,
        name: &str,
        depth: usize,
        sink: &mut S,
    ) -> Result<WalkSummary> {
        if self.rules.should_ignore(name) {
            tracing::debug!(path = %path.display(), "ignored file");
            emit(sink, path, name, depth, NodeKind::File, Outcome::Ignored)?;
            return Ok(WalkSummary::ignored());
        }

        let lines = count_lines(path)?;
        tracing::trace!(path = %path.display(), lines, "counted file");
        emit(sink, path, name, depth, NodeKind::File, Outcome::Counted(lines))?;
        Ok(WalkSummary::file(lines))
    }
}

fn emit<S: VisitSink>(
    sink: &mut S,
    path: &Path,
    name: &str,
    depth: usize,
    kind: NodeKind,
    outcome: Outcome,
) -> Result<()> {
    sink.visit(&VisitEvent {
        path,
        name,
        depth,
        kind,
        outcome,
    })?;
    Ok(())
}

/// Final path component, or the empty string for paths like `/`.
fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
