//! Configuration types for the tree walker

use std::fs;
use std::path::{Component, Path, PathBuf};

use crate::error::{LinetreeError, Result};
use crate::rules::PatternSyntax;

/// Configuration for a counting walk.
#[derive(Debug, Clone)]
pub struct WalkerConfig {
    /// Extra ignore tokens appended after the defaults
    pub extra_ignores: Vec<String>,
    /// Read `.gitignore` from the root directory
    pub read_ignore_file: bool,
    pub pattern_syntax: PatternSyntax,
}

impl Default for WalkerConfig {
    fn default() -> Self {
        Self {
            extra_ignores: Vec::new(),
            read_ignore_file: true,
            pattern_syntax: PatternSyntax::Legacy,
        }
    }
}

/// Resolve the root argument to an absolute directory path.
///
/// Relative paths are resolved against `base`, and `.`/`..` components are
/// folded lexically. Symlinks are not followed, so the last component stays
/// the name the user typed. The result must exist and be a directory; both
/// checks happen before any traversal.
pub fn resolve_root(arg: Option<&Path>, base: &Path) -> Result<PathBuf> {
    let arg = arg.ok_or(LinetreeError::MissingRoot)?;
    let root = normalize(&base.join(arg));

    let metadata = fs::metadata(&root).map_err(|_| LinetreeError::RootNotFound(root.clone()))?;
    if !metadata.is_dir() {
        return Err(LinetreeError::NotADirectory(root));
    }
    Ok(root)
}

/// Fold `.` and `..` out of `path` without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                if !matches!(
                    out.components().next_back(),
                    None | Some(Component::RootDir | Component::Prefix(_))
                ) {
                    out.pop();
                }
            }
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_missing_argument() {
        let err = resolve_root(None, Path::new("/")).unwrap_err();
        assert!(matches!(err, LinetreeError::MissingRoot));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_relative_path_resolved_against_base() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("project")).unwrap();

        let root = resolve_root(Some(Path::new("project")), dir.path()).unwrap();
        assert!(root.is_absolute());
        assert_eq!(root, dir.path().join("project"));
    }

    #[test]
    fn test_dot_components_folded() {
        let dir = TempDir::new().unwrap();
        fs::create_dir_all(dir.path().join("project/src")).unwrap();

        let root = resolve_root(Some(Path::new("./project/src/..")), dir.path()).unwrap();
        assert_eq!(root, dir.path().join("project"));
        assert_eq!(root.file_name().unwrap(), "project");
    }

    #[test]
    fn test_normalize_stops_at_filesystem_root() {
        assert_eq!(normalize(Path::new("/../a/./b/..")), PathBuf::from("/a"));
        assert_eq!(normalize(Path::new("/a/b/../../..")), PathBuf::from("/"));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_root_keeps_link_name() {
        let dir = TempDir::new().unwrap();
        fs::create_dir(dir.path().join("real")).unwrap();
        std::os::unix::fs::symlink(dir.path().join("real"), dir.path().join("build")).unwrap();

        let root = resolve_root(Some(Path::new("build")), dir.path()).unwrap();
        assert_eq!(root, dir.path().join("build"));
    }

    #[cfg(unix)]
    #[test]
    fn test_dangling_symlink_root_not_found() {
        let dir = TempDir::new().unwrap();
        std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("link")).unwrap();

        let err = resolve_root(Some(Path::new("link")), dir.path()).unwrap_err();
        assert!(matches!(err, LinetreeError::RootNotFound(_)));
    }

    #[test]
    fn test_absolute_path_ignores_base() {
        let dir = TempDir::new().unwrap();
        let root = resolve_root(Some(dir.path()), Path::new("/nonexistent-base")).unwrap();
        assert_eq!(root, dir.path());
    }

    #[test]
    fn test_nonexistent_root() {
        let dir = TempDir::new().unwrap();
        let err = resolve_root(Some(Path::new("missing")), dir.path()).unwrap_err();
        assert!(matches!(err, LinetreeError::RootNotFound(_)));
    }

    #[test]
    fn test_file_root_rejected() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("file.txt"), "x").unwrap();
        let err = resolve_root(Some(Path::new("file.txt")), dir.path()).unwrap_err();
        assert!(matches!(err, LinetreeError::NotADirectory(_)));
    }

    #[test]
    fn test_default_config_reads_ignore_file() {
        let config = WalkerConfig::default();
        assert!(config.read_ignore_file);
        assert!(config.extra_ignores.is_empty());
        assert_eq!(config.pattern_syntax, PatternSyntax::Legacy);
    }
}
