//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands:
//! configuration loading, snapshot I/O and object selection.

use crate::error::CliError;
use clap::Args;
use pbxtree::hierarchy::object_at_hierarchy_path;
use pbxtree::project::document;
use pbxtree::{Config, ConfigBuilder, ObjectId, Project};
use std::env;
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Additional configuration file.
    pub config: Option<PathBuf>,
}

/// The project snapshot a command operates on.
#[derive(Args, Debug, Clone)]
pub struct ProjectArgs {
    /// Project snapshot file (YAML, or JSON with a `.json` extension)
    #[arg(long, short = 'p', value_name = "FILE", env = "PBXTREE_PROJECT")]
    pub project: PathBuf,
}

impl ProjectArgs {
    /// Load configuration for this snapshot and the snapshot itself, with
    /// configured build settings applied.
    pub fn load(&self, global: &GlobalOptions) -> Result<(Config, Project), CliError> {
        let config = load_configuration(global, self.project.parent())?;
        let project = load_project(&self.project)?
            .with_build_settings(config.effective_build_settings());
        if global.verbose {
            eprintln!(
                "Loaded {} objects from {}",
                project.len(),
                self.project.display()
            );
        }
        Ok((config, project))
    }

    /// Write the snapshot back to where it was loaded from.
    pub fn save(&self, project: &Project) -> Result<(), CliError> {
        document::save(project, &self.project).map_err(CliError::from)
    }
}

/// Load hierarchical configuration.
///
/// Project configuration files are searched from `start_dir` (the snapshot's
/// directory), falling back to the current directory. Precedence, highest
/// first: environment variables, `--config`, project files, user file,
/// built-in defaults.
pub fn load_configuration(
    global: &GlobalOptions,
    start_dir: Option<&Path>,
) -> Result<Config, CliError> {
    let working_dir = match start_dir.filter(|dir| dir.is_dir()) {
        Some(dir) => dir.to_path_buf(),
        None => env::current_dir()?,
    };

    let mut builder = ConfigBuilder::new().with_working_dir(&working_dir);
    if let Some(ref path) = global.config {
        if !path.exists() {
            return Err(CliError::Config(format!(
                "configuration file not found: {}",
                path.display()
            )));
        }
        builder = builder.with_file(path);
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Load a project snapshot.
pub fn load_project(path: &Path) -> Result<Project, CliError> {
    if !path.exists() {
        return Err(CliError::InvalidArguments(format!(
            "project file not found: {}",
            path.display()
        )));
    }
    document::load(path).map_err(CliError::from)
}

/// Resolve an object selector.
///
/// A selector starting with `/` is a hierarchy path (`/Parent/Child`; `/`
/// alone is the main group), anything else is an object id.
pub fn resolve_object(project: &Project, selector: &str) -> Result<ObjectId, CliError> {
    if selector.starts_with('/') {
        return object_at_hierarchy_path(project, selector).map_err(CliError::from);
    }
    let id = ObjectId::new(selector);
    project.object(&id)?;
    Ok(id)
}
