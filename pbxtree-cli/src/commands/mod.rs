//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `validate`: Check that every object has exactly one parent
//! - `list`: List every object with its hierarchy and real path
//! - `show`: Show the ownership chain and paths of one object
//! - `real_path`: Print the resolved path of one object
//! - `set_path`: Store a path on an object relative to a source tree
//! - `move_object`: Move an object into another group
//! - `completions`: Generate shell completion scripts

pub mod completions;
pub mod list;
pub mod move_object;
pub mod real_path;
pub mod set_path;
pub mod show;
pub mod validate;

pub use completions::CompletionsCommand;
pub use list::ListCommand;
pub use move_object::MoveCommand;
pub use real_path::RealPathCommand;
pub use set_path::SetPathCommand;
pub use show::ShowCommand;
pub use validate::ValidateCommand;
