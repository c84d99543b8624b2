#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # pbxtree
//!
//! Ownership and path resolution for project group hierarchies.
//!
//! A project is a tree of groups and file references. Ownership is recorded
//! backwards, as the set of groups referring to each object, and every
//! object's `path` is relative to a symbolic source tree. This library turns
//! that into something usable: the single parent of every object, its
//! hierarchy path, its absolute real path, and safe ways to re-base paths and
//! move objects between groups.
//!
//! ## Core Types
//!
//! - [`Project`], [`Object`] and [`ObjectId`]: the object arena
//! - [`Parent`] and the functions in [`hierarchy`]: the single-parent view
//! - [`SourceTree`] and the functions in [`path`]: path translation
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use pbxtree::hierarchy::{hierarchy_path, move_object};
//! use pbxtree::path::{real_path, set_path_with_source_tree};
//! use pbxtree::{Project, SourceTree};
//! use std::path::PathBuf;
//!
//! let mut project = Project::new("/project_dir");
//! let main = project.main_group().clone();
//! let parent = project.new_group(&main, "Parent").unwrap();
//! let classes = project.new_group(&main, "Classes").unwrap();
//!
//! move_object(&mut project, Some(&classes), Some(&parent)).unwrap();
//! assert_eq!(hierarchy_path(&project, &classes).unwrap(), "/Parent/Classes");
//!
//! set_path_with_source_tree(
//!     &mut project,
//!     &classes,
//!     "/project_dir/Parent/Classes",
//!     Some(SourceTree::Project),
//! )
//! .unwrap();
//! assert_eq!(
//!     real_path(&project, &classes).unwrap(),
//!     PathBuf::from("/project_dir/Parent/Classes")
//! );
//! ```

pub mod config;
pub mod error;
pub mod hierarchy;
pub mod logging;
pub mod path;
pub mod project;

pub use config::{BuildSettings, Config, ConfigBuilder, OutputFormat};
pub use error::{Error, ErrorCategory, IntegrityViolation, Result};
pub use hierarchy::{IntegrityIssue, Parent};
pub use logging::{init_logger, LogLevel, Logger};
pub use path::{PathRelationship, SourceTree};
pub use project::{ContainerRole, DocumentFormat, Object, ObjectId, ObjectKind, Project};
