//! Move command implementation.

use crate::error::CliError;
use crate::utils::{resolve_object, GlobalOptions, ProjectArgs};
use clap::Args;
use pbxtree::hierarchy::{hierarchy_path, move_object};
use pbxtree::path::{real_path, set_path_with_source_tree, source_tree};

/// Move an object into another group.
#[derive(Args)]
pub struct MoveCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Object to move: id, or hierarchy path starting with `/`
    #[arg(value_name = "OBJECT")]
    pub object: String,

    /// Destination group: id, or hierarchy path starting with `/`
    #[arg(value_name = "GROUP")]
    pub destination: String,

    /// Re-express the object's path so its real path stays the same
    #[arg(long)]
    pub keep_real_path: bool,

    /// Print the result without writing the snapshot
    #[arg(long)]
    pub dry_run: bool,
}

impl MoveCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, mut project) = self.project.load(global)?;
        let id = resolve_object(&project, &self.object)?;
        let destination = resolve_object(&project, &self.destination)?;

        let previous = if self.keep_real_path {
            Some((real_path(&project, &id)?, source_tree(&project, &id)?))
        } else {
            None
        };

        move_object(&mut project, Some(&id), Some(&destination))?;

        if let Some((path, tree)) = previous {
            let path = path.to_str().ok_or_else(|| {
                CliError::InvalidArguments(format!("path is not valid UTF-8: {}", path.display()))
            })?;
            set_path_with_source_tree(&mut project, &id, path, Some(tree))?;
        }

        if !global.quiet {
            println!(
                "{} -> {}",
                project.describe(&id),
                hierarchy_path(&project, &id)?
            );
        }

        if !self.dry_run {
            self.project.save(&project)?;
        }
        Ok(())
    }
}
