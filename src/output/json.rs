//! JSON output
//!
//! Unlike the console reporter this one buffers: entries are collected during
//! the walk and the whole document is written in `finish`.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::tree::{NodeKind, VisitEvent, VisitSink, WalkSummary};

/// One entry in the JSON document, in visitation order.
#[derive(Debug, Clone, Serialize)]
pub struct JsonEntry {
    pub path: PathBuf,
    pub name: String,
    pub depth: usize,
    pub kind: NodeKind,
    pub outcome: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lines: Option<u64>,
}

#[derive(Serialize)]
struct JsonReport<'a> {
    root: &'a Path,
    summary: &'a WalkSummary,
    entries: &'a [JsonEntry],
}

/// Collects visit events and writes them as one pretty-printed document.
pub struct JsonReporter<W: Write> {
    out: W,
    entries: Vec<JsonEntry>,
}

impl JsonReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> JsonReporter<W> {
    pub fn new(out: W) -> Self {
        Self {
            out,
            entries: Vec::new(),
        }
    }

    pub fn entries(&self) -> &[JsonEntry] {
        &self.entries
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> VisitSink for JsonReporter<W> {
    fn visit(&mut self, event: &VisitEvent<'_>) -> io::Result<()> {
        self.entries.push(JsonEntry {
            path: event.path.to_path_buf(),
            name: event.name.to_string(),
            depth: event.depth,
            kind: event.kind,
            outcome: event.outcome.label(),
            lines: event.outcome.lines(),
        });
        Ok(())
    }

    fn finish(&mut self, root: &Path, summary: &WalkSummary) -> io::Result<()> {
        let report = JsonReport {
            root,
            summary,
            entries: &self.entries,
        };
        serde_json::to_writer_pretty(&mut self.out, &report).map_err(io::Error::other)?;
        writeln!(self.out)?;
        self.out.flush()
    }
}
