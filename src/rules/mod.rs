//! Ignore rules deciding which entries are skipped during a walk
//!
//! Rules come from three sources, in this order:
//!
//! - the fixed defaults `.`, `..` and `.git`
//! - extra tokens given on the command line
//! - non-comment lines of a `.gitignore` file directly under the root
//!
//! Every token is compiled once into an anchored matcher. The resulting
//! [`IgnoreRules`] is immutable and is shared by reference with the walker.

mod pattern;
mod source;

use std::path::Path;

pub use pattern::{normalize, IgnorePattern, PatternSyntax};
pub use source::{load_ignore_file, parse_ignore_lines, IGNORE_FILE_NAME};

use crate::error::Result;

/// Names that are always ignored.
pub const DEFAULT_IGNORES: &[&str] = &[".", "..", ".git"];

/// Compiled, ordered set of ignore patterns.
#[derive(Debug, Clone)]
pub struct IgnoreRules {
    patterns: Vec<IgnorePattern>,
}

impl IgnoreRules {
    /// Compile the given token sources in order.
    pub fn build<D, E, F>(defaults: D, extra: E, file_lines: F, syntax: PatternSyntax) -> Result<Self>
    where
        D: IntoIterator,
        D::Item: AsRef<str>,
        E: IntoIterator,
        E::Item: AsRef<str>,
        F: IntoIterator,
        F::Item: AsRef<str>,
    {
        let mut patterns = Vec::new();
        for token in defaults
            .into_iter()
            .map(|t| t.as_ref().to_string())
            .chain(extra.into_iter().map(|t| t.as_ref().to_string()))
            .chain(file_lines.into_iter().map(|t| t.as_ref().to_string()))
        {
            patterns.push(IgnorePattern::compile(&token, syntax)?);
        }
        Ok(Self { patterns })
    }

    /// Build the rule set for a root directory: defaults, then `extra`, then
    /// the root's ignore file when `read_ignore_file` is set.
    ///
    /// The ignore file is fully read before this returns.
    pub fn for_root(
        root: &Path,
        extra: &[String],
        read_ignore_file: bool,
        syntax: PatternSyntax,
    ) -> Result<Self> {
        let file_lines = if read_ignore_file {
            load_ignore_file(root)?
        } else {
            Vec::new()
        };
        let rules = Self::build(DEFAULT_IGNORES, extra, &file_lines, syntax)?;
        tracing::debug!(
            patterns = rules.len(),
            extra = extra.len(),
            from_file = file_lines.len(),
            "compiled ignore rules"
        );
        Ok(rules)
    }

    /// Whether `name` matches any rule. The empty name never matches.
    pub fn should_ignore(&self, name: &str) -> bool {
        !name.is_empty() && self.patterns.iter().any(|p| p.is_match(name))
    }

    pub fn patterns(&self) -> &[IgnorePattern] {
        &self.patterns
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}

impl Default for IgnoreRules {
    /// Rules made of the defaults only.
    fn default() -> Self {
        Self {
            patterns: DEFAULT_IGNORES
                .iter()
                .filter_map(|t| IgnorePattern::compile(t, PatternSyntax::Legacy).ok())
                .collect(),
        }
    }
}
