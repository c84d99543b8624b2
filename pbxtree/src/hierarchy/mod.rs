//! Ownership and hierarchy of project objects.
//!
//! - [`parent`] and friends turn referrer sets into a single-parent tree
//! - [`move_object`] relocates objects while keeping that tree acyclic

pub mod parent;
pub mod relocate;

pub use parent::{
    check_parents_integrity, children, hierarchy_path, integrity_report, is_main_group,
    object_at_hierarchy_path, parent, parents, IntegrityIssue, Parent,
};
pub use relocate::move_object;
