//! Path handling for project objects.
//!
//! # Key Concepts
//!
//! ## Source trees
//!
//! Every object stores a path string together with a symbolic root, its
//! [`SourceTree`]. The root decides what the path is relative to: the parent
//! group, the project directory, a build variable, or nothing at all for
//! absolute paths.
//!
//! ## Real paths
//!
//! [`real_path`] resolves the root to a base directory and joins the object's
//! path onto it. [`set_path_with_source_tree`] is the inverse: it takes a full
//! path and stores it relative to the requested root when that is possible
//! without loss.
//!
//! All computation is lexical; nothing here touches the filesystem.
//!
//! # Examples
//!
//! ```
//! use pbxtree::path::{real_path, set_path_with_source_tree, SourceTree};
//! use pbxtree::Project;
//! use std::path::PathBuf;
//!
//! let mut project = Project::new("/project_dir");
//! let main = project.main_group().clone();
//! let group = project.new_group(&main, "Parent").unwrap();
//! let classes = project.new_group(&group, "Classes").unwrap();
//! project.object_mut(&group).unwrap().path = Some("Parent".to_string());
//!
//! set_path_with_source_tree(
//!     &mut project,
//!     &classes,
//!     "/project_dir/Parent/Classes",
//!     Some(SourceTree::Group),
//! )
//! .unwrap();
//! assert_eq!(project.object(&classes).unwrap().path.as_deref(), Some("Classes"));
//! assert_eq!(
//!     real_path(&project, &classes).unwrap(),
//!     PathBuf::from("/project_dir/Parent/Classes")
//! );
//! ```

pub mod normalize;
pub mod relationship;
pub mod source_tree;
pub mod translate;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

// Re-export key types
pub use relationship::PathRelationship;
pub use source_tree::{BaseRule, SourceTree, SOURCE_TREES};
pub use translate::{
    real_path, set_path_with_source_tree, set_path_with_source_tree_key, source_tree,
    source_tree_real_path,
};
