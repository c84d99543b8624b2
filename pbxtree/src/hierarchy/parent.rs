//! Single-parent view over referrer sets.
//!
//! Objects record every group that claims them. Consumers need exactly one
//! parent, so every question about the hierarchy goes through [`parent`],
//! which folds in project-level role references and rejects objects with
//! zero or several claimants.

use std::collections::HashSet;

use serde::Serialize;

use crate::error::{Error, IntegrityViolation, Result};
use crate::project::{ObjectId, Project};

/// The unique owner of an object.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Parent {
    /// A group in the tree.
    Object(ObjectId),
    /// The project itself, through one of its container roles.
    Project,
}

impl Parent {
    /// The owning group, if the parent is a tree object.
    #[must_use]
    pub fn as_object(&self) -> Option<&ObjectId> {
        match self {
            Self::Object(id) => Some(id),
            Self::Project => None,
        }
    }
}

/// An integrity violation found by [`integrity_report`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IntegrityIssue {
    /// The offending object.
    pub id: ObjectId,
    /// Human readable description of the violation.
    pub message: String,
}

/// Referrers that count towards the single-parent rule.
///
/// Role references are dropped whenever a group also claims the object.
fn effective_parents(project: &Project, id: &ObjectId) -> Result<Vec<Parent>> {
    let object = project.object(id)?;
    let mut parents: Vec<Parent> = object
        .referrers()
        .iter()
        .cloned()
        .map(Parent::Object)
        .collect();
    if project.roles_for(id).next().is_some() {
        parents.push(Parent::Project);
    }
    if parents.len() > 1 {
        parents.retain(|parent| matches!(parent, Parent::Object(_)));
    }
    Ok(parents)
}

/// Return the unique parent of an object.
///
/// # Errors
///
/// Returns [`Error::Integrity`] when the object has no parent or more than
/// one, and [`Error::UnknownObject`] when `id` is not in the project.
///
/// # Examples
///
/// ```
/// use pbxtree::hierarchy::{parent, Parent};
/// use pbxtree::Project;
///
/// let mut project = Project::new("/project_dir");
/// let main = project.main_group().clone();
/// let group = project.new_group(&main, "Parent").unwrap();
///
/// assert_eq!(parent(&project, &group).unwrap(), Parent::Object(main.clone()));
/// assert_eq!(parent(&project, &main).unwrap(), Parent::Project);
/// ```
pub fn parent(project: &Project, id: &ObjectId) -> Result<Parent> {
    let mut parents = effective_parents(project, id)?;
    match parents.len() {
        0 => Err(Error::Integrity {
            object: project.describe(id),
            violation: IntegrityViolation::NoParent,
        }),
        1 => Ok(parents.remove(0)),
        _ => Err(Error::Integrity {
            object: project.describe(id),
            violation: IntegrityViolation::MultipleParents {
                referrers: parents
                    .iter()
                    .filter_map(Parent::as_object)
                    .map(|referrer| project.describe(referrer))
                    .collect(),
            },
        }),
    }
}

/// Check that an object has exactly one identifiable parent.
///
/// # Errors
///
/// Same as [`parent`].
pub fn check_parents_integrity(project: &Project, id: &ObjectId) -> Result<()> {
    parent(project, id).map(|_| ())
}

/// Whether `id` is the project's main group.
#[must_use]
pub fn is_main_group(project: &Project, id: &ObjectId) -> bool {
    project.main_group() == id
}

/// The ancestors of an object, from the main group down to its parent.
///
/// The main group has no ancestors. An object owned directly by the project
/// (other than the main group) has none either.
///
/// # Errors
///
/// Returns [`Error::Integrity`] if any object on the way up violates the
/// single-parent rule or the chain loops back on itself. A loop is reported
/// against the first object reached twice, which lies on the loop.
///
/// # Examples
///
/// ```
/// use pbxtree::hierarchy::parents;
/// use pbxtree::Project;
///
/// let mut project = Project::new("/project_dir");
/// let main = project.main_group().clone();
/// let group = project.new_group(&main, "Parent").unwrap();
/// let child = project.new_group(&group, "Child").unwrap();
///
/// assert_eq!(parents(&project, &child).unwrap(), vec![main.clone(), group]);
/// assert!(parents(&project, &main).unwrap().is_empty());
/// ```
pub fn parents(project: &Project, id: &ObjectId) -> Result<Vec<ObjectId>> {
    let mut chain = Vec::new();
    let mut seen = HashSet::from([id.clone()]);
    let mut current = id.clone();

    while !is_main_group(project, &current) {
        match parent(project, &current)? {
            Parent::Project => break,
            Parent::Object(next) => {
                if !seen.insert(next.clone()) {
                    return Err(Error::Integrity {
                        object: project.describe(&next),
                        violation: IntegrityViolation::Cycle,
                    });
                }
                chain.push(next.clone());
                current = next;
            }
        }
    }

    chain.reverse();
    Ok(chain)
}

/// Render the hierarchy of an object as `/Parent/Child`.
///
/// The main group contributes no segment, so it renders as an empty string.
///
/// # Errors
///
/// Same as [`parents`].
///
/// # Examples
///
/// ```
/// use pbxtree::hierarchy::hierarchy_path;
/// use pbxtree::Project;
///
/// let mut project = Project::new("/project_dir");
/// let main = project.main_group().clone();
/// let group = project.new_group(&main, "Parent").unwrap();
/// let child = project.new_group(&group, "Child").unwrap();
///
/// assert_eq!(hierarchy_path(&project, &child).unwrap(), "/Parent/Child");
/// assert_eq!(hierarchy_path(&project, &main).unwrap(), "");
/// ```
pub fn hierarchy_path(project: &Project, id: &ObjectId) -> Result<String> {
    if is_main_group(project, id) {
        return Ok(String::new());
    }

    let mut rendered = String::new();
    for ancestor in parents(project, id)? {
        if is_main_group(project, &ancestor) {
            continue;
        }
        rendered.push('/');
        rendered.push_str(&project.object(&ancestor)?.display_name());
    }
    rendered.push('/');
    rendered.push_str(&project.object(id)?.display_name());
    Ok(rendered)
}

/// The objects claimed by `group`, in id order.
///
/// This reads raw referrer sets; an object listed here may still violate the
/// single-parent rule.
#[must_use]
pub fn children(project: &Project, group: &ObjectId) -> Vec<ObjectId> {
    project
        .objects()
        .filter(|(_, object)| object.referrers().contains(group))
        .map(|(id, _)| id.clone())
        .collect()
}

/// Find the object rendered as `path` by [`hierarchy_path`].
///
/// Segments are matched against display names; when siblings share a name
/// the one with the smallest id wins. An empty path or `/` is the main group.
///
/// # Errors
///
/// Returns [`Error::NotFound`] if a segment matches no child.
pub fn object_at_hierarchy_path(project: &Project, path: &str) -> Result<ObjectId> {
    let mut current = project.main_group().clone();
    for segment in path.split('/').filter(|segment| !segment.is_empty()) {
        current = children(project, &current)
            .into_iter()
            .find(|child| {
                project
                    .object(child)
                    .is_ok_and(|object| object.display_name() == segment)
            })
            .ok_or_else(|| Error::NotFound {
                resource: format!("object at hierarchy path {path}"),
            })?;
    }
    Ok(current)
}

/// Check every object in the project and collect all integrity violations.
///
/// Each object is reported at most once: either for its own referrers or,
/// if those are fine, for a cycle it is part of. Objects that merely hang
/// below a broken object are not reported.
#[must_use]
pub fn integrity_report(project: &Project) -> Vec<IntegrityIssue> {
    let mut issues = Vec::new();
    for (id, _) in project.objects() {
        let result = match check_parents_integrity(project, id) {
            Ok(()) => parents(project, id).map(|_| ()),
            Err(err) => Err(err),
        };
        if let Err(err) = result {
            let own = matches!(&err, Error::Integrity { object, .. } if *object == project.describe(id));
            if own {
                issues.push(IntegrityIssue {
                    id: id.clone(),
                    message: err.to_string(),
                });
            }
        }
    }
    log::debug!(
        "integrity report: {} issue(s) across {} object(s)",
        issues.len(),
        project.len()
    );
    issues
}
