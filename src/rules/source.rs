//! Loading raw ignore tokens from an ignore file in the root directory

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{LinetreeError, Result};

/// Name of the ignore file looked up directly under the root.
pub const IGNORE_FILE_NAME: &str = ".gitignore";

/// Read raw tokens from `<dir>/.gitignore`.
///
/// Returns an empty list when the file does not exist. The file is read to
/// completion and closed before this returns.
pub fn load_ignore_file(dir: &Path) -> Result<Vec<String>> {
    let path = dir.join(IGNORE_FILE_NAME);
    if !path.exists() {
        tracing::debug!(path = %path.display(), "no ignore file");
        return Ok(Vec::new());
    }

    let file = File::open(&path).map_err(|source| LinetreeError::IgnoreFile {
        path: path.clone(),
        source,
    })?;
    let tokens = parse_ignore_lines(BufReader::new(file)).map_err(|source| {
        LinetreeError::IgnoreFile {
            path: path.clone(),
            source,
        }
    })?;

    tracing::debug!(path = %path.display(), count = tokens.len(), "loaded ignore file");
    Ok(tokens)
}

/// Collect every line that is neither blank nor a `#` comment.
///
/// Lines break at `\n`, `\r\n` or a lone `\r`, the same as for counting.
pub fn parse_ignore_lines<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut tokens = Vec::new();
    for line in reader.lines() {
        let line = line?;
        for token in line.split('\r') {
            if token.is_empty() || token.starts_with('#') {
                continue;
            }
            tokens.push(token.to_string());
        }
    }
    Ok(tokens)
}
