//! Path relationship checking.
//!
//! This module decides how two paths relate in the filesystem hierarchy. The
//! comparison is purely lexical: paths are compared component by component
//! and never touch the filesystem, since real paths computed from a project
//! need not exist on disk.

use std::path::{Component, Path, PathBuf};

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use pbxtree::path::PathRelationship;
/// use std::path::Path;
///
/// let base = Path::new("/project_dir/Parent");
/// let child = Path::new("/project_dir/Parent/Classes");
///
/// assert_eq!(
///     PathRelationship::between(base, child),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,

    /// The first path is a descendant of the second.
    Descendant,

    /// The paths are the same.
    Same,

    /// Neither path contains the other. Also returned when one path is
    /// absolute and the other relative.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths.
    ///
    /// # Examples
    ///
    /// ```
    /// use pbxtree::path::PathRelationship;
    /// use std::path::Path;
    ///
    /// let rel = PathRelationship::between(Path::new("/a/b"), Path::new("/a"));
    /// assert_eq!(rel, PathRelationship::Descendant);
    ///
    /// let rel = PathRelationship::between(Path::new("/a/"), Path::new("/a"));
    /// assert_eq!(rel, PathRelationship::Same);
    ///
    /// let rel = PathRelationship::between(Path::new("/a"), Path::new("a/b"));
    /// assert_eq!(rel, PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(path1: &Path, path2: &Path) -> Self {
        if path1.is_absolute() != path2.is_absolute() {
            return Self::Unrelated;
        }

        // `Path` equality and `starts_with` already compare by component,
        // so trailing separators and repeated slashes do not matter.
        if path1 == path2 {
            Self::Same
        } else if path2.starts_with(path1) {
            Self::Ancestor
        } else if path1.starts_with(path2) {
            Self::Descendant
        } else {
            Self::Unrelated
        }
    }

    /// Check if a path is within a directory (descendant or same).
    ///
    /// # Examples
    ///
    /// ```
    /// use pbxtree::path::PathRelationship;
    /// use std::path::Path;
    ///
    /// let dir = Path::new("/project_dir");
    /// assert!(PathRelationship::is_within(Path::new("/project_dir/a.m"), dir));
    /// assert!(PathRelationship::is_within(dir, dir));
    /// assert!(!PathRelationship::is_within(Path::new("/elsewhere"), dir));
    /// ```
    #[must_use]
    pub fn is_within(path: &Path, directory: &Path) -> bool {
        matches!(
            Self::between(path, directory),
            Self::Descendant | Self::Same
        )
    }

    /// Express `path` relative to `base` when it lies within it.
    ///
    /// Returns `"."` when the paths are the same and `None` when `path` is
    /// not within `base`, including when the remainder climbs out of it
    /// through `..`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pbxtree::path::PathRelationship;
    /// use std::path::{Path, PathBuf};
    ///
    /// let base = Path::new("/project_dir/Parent");
    /// assert_eq!(
    ///     PathRelationship::relative_within(Path::new("/project_dir/Parent/Classes"), base),
    ///     Some(PathBuf::from("Classes"))
    /// );
    /// assert_eq!(
    ///     PathRelationship::relative_within(Path::new("project_dir/Parent/Classes"), base),
    ///     None
    /// );
    /// assert_eq!(
    ///     PathRelationship::relative_within(Path::new("/project_dir/Parent/../Other"), base),
    ///     None
    /// );
    /// ```
    #[must_use]
    pub fn relative_within(path: &Path, base: &Path) -> Option<PathBuf> {
        if !Self::is_within(path, base) {
            return None;
        }
        let remainder = path.strip_prefix(base).ok()?;
        if remainder
            .components()
            .any(|component| component == Component::ParentDir)
        {
            return None;
        }
        if remainder.as_os_str().is_empty() {
            Some(PathBuf::from("."))
        } else {
            Some(remainder.to_path_buf())
        }
    }

    /// Get a human-readable description of the relationship.
    #[must_use]
    pub fn description(&self, path1: &Path, path2: &Path) -> String {
        match self {
            Self::Ancestor => {
                format!("{} is an ancestor of {}", path1.display(), path2.display())
            }
            Self::Descendant => {
                format!("{} is a descendant of {}", path1.display(), path2.display())
            }
            Self::Same => {
                format!(
                    "{} and {} are the same path",
                    path1.display(),
                    path2.display()
                )
            }
            Self::Unrelated => {
                format!(
                    "{} and {} are unrelated paths",
                    path1.display(),
                    path2.display()
                )
            }
        }
    }
}
