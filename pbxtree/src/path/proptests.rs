//! Property-based tests for path handling.
//!
//! Note: The normalize module already has property tests for component
//! resolution. This module focuses on path relationships.

use super::relationship::PathRelationship;
use proptest::prelude::*;
use std::path::PathBuf;

// Strategy for generating path-like strings
fn path_component_strategy() -> impl Strategy<Value = String> {
    "[a-z0-9_-]{1,20}"
}

fn absolute_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 1..8).prop_map(|parts| {
        let mut path = PathBuf::from("/");
        for part in parts {
            path.push(part);
        }
        path
    })
}

fn relative_path_strategy() -> impl Strategy<Value = PathBuf> {
    prop::collection::vec(path_component_strategy(), 1..6)
        .prop_map(|parts| parts.iter().collect::<PathBuf>())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        max_shrink_iters: 10000,
        .. ProptestConfig::default()
    })]

    // Path relationship is reflexive: path is always identical to itself
    #[test]
    fn path_relationship_reflexive(path in absolute_path_strategy()) {
        prop_assert_eq!(PathRelationship::between(&path, &path), PathRelationship::Same);
    }

    // Relationship symmetry: if A is ancestor of B, then B is descendant of A
    #[test]
    fn path_relationship_symmetric(path1 in absolute_path_strategy(), path2 in absolute_path_strategy()) {
        let rel_12 = PathRelationship::between(&path1, &path2);
        let rel_21 = PathRelationship::between(&path2, &path1);

        let is_symmetric = matches!(
            (rel_12, rel_21),
            (PathRelationship::Ancestor, PathRelationship::Descendant)
                | (PathRelationship::Descendant, PathRelationship::Ancestor)
                | (PathRelationship::Same, PathRelationship::Same)
                | (PathRelationship::Unrelated, PathRelationship::Unrelated)
        );

        prop_assert!(is_symmetric, "Invalid symmetry: {:?} <-> {:?}", rel_12, rel_21);
    }

    // Joining a relative remainder back onto its base gives the original path
    #[test]
    fn relative_within_joins_back(base in absolute_path_strategy(), rest in relative_path_strategy()) {
        let full = base.join(&rest);
        let relative = PathRelationship::relative_within(&full, &base);
        prop_assert_eq!(relative.as_ref(), Some(&rest));
        prop_assert_eq!(base.join(relative.unwrap()), full);
    }

    // A relative path is never within an absolute base
    #[test]
    fn relative_path_never_within_absolute(base in absolute_path_strategy(), rest in relative_path_strategy()) {
        prop_assert_eq!(PathRelationship::relative_within(&rest, &base), None);
    }
}
