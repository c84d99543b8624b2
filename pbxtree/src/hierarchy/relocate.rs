//! Moving objects between groups.

use crate::error::{Error, Result};
use crate::hierarchy::parent::{parent, parents, Parent};
use crate::project::{ObjectId, Project};

/// Move `object` into `new_parent`.
///
/// Exactly one referrer link changes: the current parent is replaced by
/// `new_parent`. The object's `path` and `source_tree` are left as they are;
/// use [`crate::path::set_path_with_source_tree`] afterwards to re-base them.
/// Moving an object into its current parent succeeds without changes.
///
/// # Errors
///
/// Returns an argument error when either id is missing or unknown, when the
/// object would become its own parent or a child of one of its descendants,
/// or when `new_parent` is not a group. Returns [`Error::Integrity`] when the
/// object or the destination's ancestors do not have a single parent.
///
/// # Examples
///
/// ```
/// use pbxtree::hierarchy::{move_object, parent, Parent};
/// use pbxtree::Project;
///
/// let mut project = Project::new("/project_dir");
/// let main = project.main_group().clone();
/// let group = project.new_group(&main, "Parent").unwrap();
/// let new_parent = project.new_group(&main, "New Parent").unwrap();
///
/// move_object(&mut project, Some(&group), Some(&new_parent)).unwrap();
/// assert_eq!(parent(&project, &group).unwrap(), Parent::Object(new_parent));
///
/// assert!(move_object(&mut project, None, Some(&group)).is_err());
/// assert!(move_object(&mut project, Some(&group), Some(&group)).is_err());
/// ```
pub fn move_object(
    project: &mut Project,
    object: Option<&ObjectId>,
    new_parent: Option<&ObjectId>,
) -> Result<()> {
    let Some(object) = object else {
        return Err(Error::NilObject);
    };
    let Some(new_parent) = new_parent else {
        return Err(Error::NilParent {
            object: project.describe(object),
        });
    };
    if new_parent == object {
        return Err(Error::MoveToSelf {
            object: project.describe(object),
        });
    }

    project.object(object)?;
    if !project.object(new_parent)?.is_group() {
        return Err(Error::NotAGroup {
            object: project.describe(object),
            target: project.describe(new_parent),
        });
    }
    if parents(project, new_parent)?.contains(object) {
        return Err(Error::MoveToChild {
            object: project.describe(object),
            target: project.describe(new_parent),
        });
    }

    match parent(project, object)? {
        Parent::Object(current) if current == *new_parent => return Ok(()),
        Parent::Object(current) => {
            project.remove_referrer(object, &current)?;
        }
        // The project keeps its role reference; the new group referrer
        // takes precedence over it from now on.
        Parent::Project => {}
    }
    project.add_referrer(object, new_parent)?;

    log::debug!(
        "moved {} into {}",
        project.describe(object),
        project.describe(new_parent)
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IntegrityViolation;

    fn setup() -> (Project, ObjectId, ObjectId) {
        let mut project = Project::new("/project_dir");
        let main = project.main_group().clone();
        let group = project.new_group(&main, "Parent").unwrap();
        (project, main, group)
    }

    #[test]
    fn test_move_between_groups() {
        let (mut project, main, group) = setup();
        let new_parent = project.new_group(&main, "New Parent").unwrap();

        move_object(&mut project, Some(&group), Some(&new_parent)).unwrap();

        let referrers = project.object(&group).unwrap().referrers();
        assert_eq!(referrers.len(), 1);
        assert!(referrers.contains(&new_parent));
        assert_eq!(
            parent(&project, &group).unwrap(),
            Parent::Object(new_parent)
        );
    }

    #[test]
    fn test_move_keeps_path_fields() {
        let (mut project, main, group) = setup();
        let file = project.new_file(&group, "a.m").unwrap();
        move_object(&mut project, Some(&file), Some(&main)).unwrap();
        let object = project.object(&file).unwrap();
        assert_eq!(object.path.as_deref(), Some("a.m"));
        assert_eq!(object.source_tree, "<group>");
    }

    #[test]
    fn test_move_nil_object() {
        let (mut project, _, group) = setup();
        let err = move_object(&mut project, None, Some(&group)).unwrap_err();
        assert_eq!(err.to_string(), "attempt to move nil object");
    }

    #[test]
    fn test_move_nil_parent() {
        let (mut project, _, group) = setup();
        let err = move_object(&mut project, Some(&group), None).unwrap_err();
        assert!(err.to_string().contains("to nil parent"));
        assert!(err.to_string().contains("`Parent`"));
    }

    #[test]
    fn test_move_to_itself() {
        let (mut project, _, group) = setup();
        let err = move_object(&mut project, Some(&group), Some(&group)).unwrap_err();
        assert!(err.to_string().contains("to itself"));
    }

    #[test]
    fn test_move_to_child() {
        let (mut project, _, group) = setup();
        let child = project.new_group(&group, "Child").unwrap();
        let grandchild = project.new_group(&child, "Grandchild").unwrap();

        let err = move_object(&mut project, Some(&group), Some(&child)).unwrap_err();
        assert!(err.to_string().contains("to a child object"));

        let err = move_object(&mut project, Some(&group), Some(&grandchild)).unwrap_err();
        assert!(matches!(err, Error::MoveToChild { .. }));
    }

    #[test]
    fn test_move_into_file_rejected() {
        let (mut project, main, group) = setup();
        let file = project.new_file(&main, "a.m").unwrap();
        let err = move_object(&mut project, Some(&group), Some(&file)).unwrap_err();
        assert!(matches!(err, Error::NotAGroup { .. }));
    }

    #[test]
    fn test_move_unknown_ids() {
        let (mut project, _, group) = setup();
        let ghost = ObjectId::new("ghost");
        assert!(move_object(&mut project, Some(&ghost), Some(&group))
            .unwrap_err()
            .is_not_found());
        assert!(move_object(&mut project, Some(&group), Some(&ghost))
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn test_move_to_current_parent_is_noop() {
        let (mut project, main, group) = setup();
        let before = project.clone();
        move_object(&mut project, Some(&group), Some(&main)).unwrap();
        assert_eq!(project, before);
    }

    #[test]
    fn test_move_object_without_parent_fails() {
        let (mut project, main, group) = setup();
        let other = project.new_group(&main, "Other").unwrap();
        project.remove_referrer(&group, &main).unwrap();
        let err = move_object(&mut project, Some(&group), Some(&other)).unwrap_err();
        assert!(matches!(
            err,
            Error::Integrity {
                violation: IntegrityViolation::NoParent,
                ..
            }
        ));
        assert!(project.object(&group).unwrap().referrers().is_empty());
    }
}
