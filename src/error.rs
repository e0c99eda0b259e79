//! Error types for linetree

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can abort a counting run.
///
/// Configuration errors (`MissingRoot`, `RootNotFound`, `NotADirectory`,
/// `InvalidPattern`) are raised before any traversal starts. Everything else
/// is an I/O failure during traversal and aborts the walk where it happened.
#[derive(Error, Debug)]
pub enum LinetreeError {
    /// No root directory was given on the command line
    #[error("failed to find the root directory of the project (no path given)")]
    MissingRoot,

    /// Root path does not exist
    #[error("no such directory: {0}")]
    RootNotFound(PathBuf),

    /// Root path exists but is not a directory
    #[error("not a directory: {0}")]
    NotADirectory(PathBuf),

    /// An ignore token did not compile to a valid matcher
    #[error("invalid ignore pattern '{pattern}': {source}")]
    InvalidPattern {
        pattern: String,
        source: regex::Error,
    },

    /// The ignore file exists but could not be read
    #[error("failed to read ignore file '{path}': {source}")]
    IgnoreFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Listing a directory failed
    #[error("failed to read directory '{path}': {source}")]
    ReadDir {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Stat on a directory entry failed
    #[error("failed to stat '{path}': {source}")]
    Metadata {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Reading a file for line counting failed
    #[error("failed to read file '{path}': {source}")]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Writing the report failed
    #[error("error writing output: {0}")]
    Output(#[from] std::io::Error),
}

impl LinetreeError {
    /// Whether this error was detected before traversal started.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Self::MissingRoot
                | Self::RootNotFound(_)
                | Self::NotADirectory(_)
                | Self::InvalidPattern { .. }
        )
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, LinetreeError>;
