//! Common test utilities for integration tests.
//!
//! The fixture mirrors the layout used throughout the resolver tests: a
//! project rooted at `/project_dir` whose main group holds a `Parent` group
//! with a `Parent` path.

use pbxtree::{ObjectId, Project};

/// A small project and the ids tests reach for most often.
#[allow(dead_code)]
pub struct Fixture {
    pub project: Project,
    pub main: ObjectId,
    pub products: ObjectId,
    pub parent: ObjectId,
}

impl Fixture {
    /// `/project_dir` with `Parent` (path `Parent`) in the main group.
    #[allow(dead_code)]
    pub fn new() -> Self {
        let mut project = Project::new("/project_dir");
        let main = project.main_group().clone();
        let products = project
            .products_group()
            .cloned()
            .expect("new projects have a products group");
        let parent = project.new_group(&main, "Parent").unwrap();
        project.object_mut(&parent).unwrap().path = Some("Parent".to_string());
        Self {
            project,
            main,
            products,
            parent,
        }
    }

    /// Add a group named `name` (with the same path) inside `parent`.
    #[allow(dead_code)]
    pub fn group(&mut self, parent: &ObjectId, name: &str) -> ObjectId {
        let id = self.project.new_group(parent, name).unwrap();
        self.project.object_mut(&id).unwrap().path = Some(name.to_string());
        id
    }

    /// Add a file reference with `path` inside `parent`.
    #[allow(dead_code)]
    pub fn file(&mut self, parent: &ObjectId, path: &str) -> ObjectId {
        self.project.new_file(parent, path).unwrap()
    }
}

/// Creates a temporary directory for testing.
#[allow(dead_code)]
pub fn create_temp_dir() -> std::io::Result<tempfile::TempDir> {
    tempfile::tempdir()
}
