//! Translation between symbolic object locations and real paths.
//!
//! An object's location is a source tree plus a path string. Resolving the
//! source tree gives a base directory; joining the path onto it gives the
//! real path. [`set_path_with_source_tree`] goes the other way.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{Error, IntegrityViolation, Result};
use crate::hierarchy::{parent, Parent};
use crate::path::normalize;
use crate::path::relationship::PathRelationship;
use crate::path::source_tree::{BaseRule, SourceTree};
use crate::project::{ObjectId, Project};

/// Parse the stored source tree of an object.
///
/// # Errors
///
/// Returns [`Error::UnresolvableSourceTree`] for symbols outside the
/// recognized set.
pub fn source_tree(project: &Project, id: &ObjectId) -> Result<SourceTree> {
    let object = project.object(id)?;
    SourceTree::from_symbol(&object.source_tree).ok_or_else(|| Error::UnresolvableSourceTree {
        object: project.describe(id),
        source_tree: object.source_tree.clone(),
    })
}

/// The base directory implied by an object's source tree.
///
/// Returns `None` for `<absolute>`, whose path needs no base.
///
/// # Errors
///
/// Returns [`Error::UnresolvableSourceTree`] for unknown symbols and
/// [`Error::Integrity`] when a group-relative object has no single parent.
///
/// # Examples
///
/// ```
/// use pbxtree::path::source_tree_real_path;
/// use pbxtree::Project;
/// use std::path::PathBuf;
///
/// let mut project = Project::new("/project_dir");
/// let main = project.main_group().clone();
/// let group = project.new_group(&main, "Parent").unwrap();
///
/// assert_eq!(
///     source_tree_real_path(&project, &group).unwrap(),
///     Some(PathBuf::from("/project_dir"))
/// );
///
/// project.object_mut(&group).unwrap().source_tree = "<absolute>".to_string();
/// assert_eq!(source_tree_real_path(&project, &group).unwrap(), None);
/// ```
pub fn source_tree_real_path(project: &Project, id: &ObjectId) -> Result<Option<PathBuf>> {
    let mut visited = HashSet::new();
    source_tree_real_path_guarded(project, id, &mut visited)
}

/// The fully resolved path of an object.
///
/// # Errors
///
/// Same as [`source_tree_real_path`], for the object and every group whose
/// real path it depends on.
///
/// # Examples
///
/// ```
/// use pbxtree::path::real_path;
/// use pbxtree::Project;
/// use std::path::PathBuf;
///
/// let mut project = Project::new("/project_dir");
/// let main = project.main_group().clone();
/// let group = project.new_group(&main, "Parent").unwrap();
/// project.object_mut(&group).unwrap().path = Some("Classes".to_string());
///
/// assert_eq!(real_path(&project, &group).unwrap(), PathBuf::from("/project_dir/Classes"));
/// ```
pub fn real_path(project: &Project, id: &ObjectId) -> Result<PathBuf> {
    let mut visited = HashSet::new();
    real_path_guarded(project, id, &mut visited)
}

fn real_path_guarded(
    project: &Project,
    id: &ObjectId,
    visited: &mut HashSet<ObjectId>,
) -> Result<PathBuf> {
    if !visited.insert(id.clone()) {
        return Err(Error::Integrity {
            object: project.describe(id),
            violation: IntegrityViolation::Cycle,
        });
    }

    let path = project.object(id)?.path.as_deref().unwrap_or("");
    match source_tree_real_path_guarded(project, id, visited)? {
        Some(base) => Ok(normalize::join(&base, path)),
        None => Ok(PathBuf::from(path)),
    }
}

fn source_tree_real_path_guarded(
    project: &Project,
    id: &ObjectId,
    visited: &mut HashSet<ObjectId>,
) -> Result<Option<PathBuf>> {
    let tree = source_tree(project, id)?;
    base_path(project, id, tree, visited)
}

/// Base directory of `tree` for object `id`, regardless of the source tree
/// the object currently has.
fn base_path(
    project: &Project,
    id: &ObjectId,
    tree: SourceTree,
    visited: &mut HashSet<ObjectId>,
) -> Result<Option<PathBuf>> {
    match tree.base_rule() {
        BaseRule::None => Ok(None),
        BaseRule::Parent => match parent(project, id)? {
            Parent::Project => Ok(Some(project.root_dir().to_path_buf())),
            Parent::Object(group) => real_path_guarded(project, &group, visited).map(Some),
        },
        BaseRule::ProjectRoot => Ok(Some(project.root_dir().to_path_buf())),
        BaseRule::BuildSetting => Ok(Some(
            project
                .build_settings()
                .base_for(tree)
                .unwrap_or_else(|| project.root_dir())
                .to_path_buf(),
        )),
    }
}

/// Store `full_path` on an object, expressed relative to `tree`.
///
/// - `Absolute`: `full_path` must be absolute and is stored verbatim.
/// - `Group` / `Project`: when `full_path` lies within the parent's real path
///   (or the project root), the remainder below it is stored. Otherwise the
///   path is stored unchanged, since no lossless relative form exists.
/// - Build-variable trees store `full_path` verbatim.
///
/// Nothing is written unless the whole operation succeeds.
///
/// # Errors
///
/// Returns [`Error::UnrecognizedSourceTreeOption`] when `tree` is `None`,
/// [`Error::RelativePathForAbsoluteSourceTree`] for a relative path with
/// `Absolute`, and any error raised while resolving the base directory.
///
/// # Examples
///
/// ```
/// use pbxtree::path::{set_path_with_source_tree, SourceTree};
/// use pbxtree::Project;
///
/// let mut project = Project::new("/project_dir");
/// let main = project.main_group().clone();
/// let group = project.new_group(&main, "Parent").unwrap();
///
/// set_path_with_source_tree(&mut project, &group, "/project_dir/Parent", Some(SourceTree::Project))
///     .unwrap();
/// let object = project.object(&group).unwrap();
/// assert_eq!(object.source_tree, "SOURCE_ROOT");
/// assert_eq!(object.path.as_deref(), Some("Parent"));
/// ```
pub fn set_path_with_source_tree(
    project: &mut Project,
    id: &ObjectId,
    full_path: &str,
    tree: Option<SourceTree>,
) -> Result<()> {
    let Some(tree) = tree else {
        return Err(Error::UnrecognizedSourceTreeOption { option: None });
    };
    project.object(id)?;

    let stored = match tree.base_rule() {
        BaseRule::None => {
            if !Path::new(full_path).is_absolute() {
                return Err(Error::RelativePathForAbsoluteSourceTree {
                    path: full_path.to_string(),
                });
            }
            full_path.to_string()
        }
        BaseRule::Parent | BaseRule::ProjectRoot => {
            let mut visited = HashSet::new();
            let base = base_path(project, id, tree, &mut visited)?;
            let relative = base
                .as_deref()
                .and_then(|base| {
                    let full = normalize::resolve_components(Path::new(full_path));
                    PathRelationship::relative_within(&full, base)
                });
            match relative {
                Some(relative) => relative.to_string_lossy().into_owned(),
                None => {
                    // TODO: decide whether unconvertible paths should be rejected
                    // once callers no longer rely on them being stored as given.
                    log::warn!(
                        "{} is not within the {} base of {}; storing it unchanged",
                        full_path,
                        tree,
                        project.describe(id)
                    );
                    full_path.to_string()
                }
            }
        }
        BaseRule::BuildSetting => full_path.to_string(),
    };

    let object = project.object_mut(id)?;
    object.source_tree = tree.as_str().to_string();
    object.path = Some(stored);
    log::debug!(
        "set path of {} to `{}` relative to {}",
        project.describe(id),
        full_path,
        tree
    );
    Ok(())
}

/// String-keyed variant of [`set_path_with_source_tree`].
///
/// `key` is parsed with [`SourceTree::from_option`], so both option keys
/// (`group`, `sdk_root`, ...) and stored symbols (`<group>`, `SDKROOT`, ...)
/// are accepted.
///
/// # Errors
///
/// Returns [`Error::UnrecognizedSourceTreeOption`] for a missing or unknown
/// key, otherwise the same as [`set_path_with_source_tree`].
pub fn set_path_with_source_tree_key(
    project: &mut Project,
    id: &ObjectId,
    full_path: &str,
    key: Option<&str>,
) -> Result<()> {
    let tree = SourceTree::from_option(key)?;
    set_path_with_source_tree(project, id, full_path, Some(tree))
}
