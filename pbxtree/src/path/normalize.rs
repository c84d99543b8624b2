//! Lexical path normalization.
//!
//! Real paths are computed from strings stored in project data, so everything
//! here works on path components only and never consults the filesystem:
//! - Expanding tilde (~) to the home directory (configuration values)
//! - Resolving `.` and `..` components
//! - Joining a relative path onto a base the way a shell would

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand tilde (~) to the home directory.
///
/// This function handles `~` and `~/path` but does not support `~user` syntax.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains invalid UTF-8
/// - The home directory cannot be determined
/// - The path uses `~user` syntax (not supported)
///
/// # Examples
///
/// ```
/// use pbxtree::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/Developer")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("Developer"));
///
/// // Leaves other paths unchanged
/// let expanded = expand_tilde(Path::new("/absolute")).unwrap();
/// assert_eq!(expanded, Path::new("/absolute"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Path contains invalid UTF-8".to_string(),
    })?;

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if path_str.starts_with("~/") || path_str.starts_with("~\\") {
        Ok(home.join(&path_str[2..]))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Resolve `.` and `..` components.
///
/// For absolute paths a `..` at the root stays at the root. For relative
/// paths, leading `..` components that cannot be resolved are kept.
///
/// # Examples
///
/// ```
/// use pbxtree::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(resolve_components(Path::new("/a/./b/../c")), PathBuf::from("/a/c"));
/// assert_eq!(resolve_components(Path::new("/../a")), PathBuf::from("/a"));
/// assert_eq!(resolve_components(Path::new("../a/../b")), PathBuf::from("../b"));
/// ```
#[must_use]
pub fn resolve_components(path: &Path) -> PathBuf {
    let mut parts: Vec<Component<'_>> = Vec::new();

    for component in path.components() {
        match component {
            Component::Prefix(_) | Component::RootDir | Component::Normal(_) => {
                parts.push(component);
            }
            Component::CurDir => {}
            Component::ParentDir => match parts.last() {
                Some(Component::Normal(_)) => {
                    parts.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                _ => parts.push(component),
            },
        }
    }

    if parts.is_empty() {
        return PathBuf::from(".");
    }
    parts.iter().collect()
}

/// Join `path` onto `base` and resolve `.` and `..`.
///
/// An absolute `path` replaces `base`, matching [`Path::join`].
///
/// # Examples
///
/// ```
/// use pbxtree::path::normalize::join;
/// use std::path::{Path, PathBuf};
///
/// assert_eq!(join(Path::new("/project_dir"), "Classes"), PathBuf::from("/project_dir/Classes"));
/// assert_eq!(join(Path::new("/project_dir/Parent"), "../Shared"), PathBuf::from("/project_dir/Shared"));
/// assert_eq!(join(Path::new("/project_dir"), "/abs"), PathBuf::from("/abs"));
/// assert_eq!(join(Path::new("/project_dir"), ""), PathBuf::from("/project_dir"));
/// ```
#[must_use]
pub fn join(base: &Path, path: &str) -> PathBuf {
    resolve_components(&base.join(path))
}
