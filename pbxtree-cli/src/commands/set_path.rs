//! Set path command implementation.

use crate::error::CliError;
use crate::utils::{resolve_object, GlobalOptions, ProjectArgs};
use clap::Args;
use pbxtree::path::set_path_with_source_tree_key;

/// Store a path on an object relative to a source tree.
#[derive(Args)]
pub struct SetPathCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Object id, or hierarchy path starting with `/`
    #[arg(value_name = "OBJECT")]
    pub object: String,

    /// Full path to store
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Source tree to express the path against (absolute, group, project,
    /// built_products, developer_dir, sdk_root)
    #[arg(long, short = 's', value_name = "TREE")]
    pub source_tree: String,

    /// Print the result without writing the snapshot
    #[arg(long)]
    pub dry_run: bool,
}

impl SetPathCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, mut project) = self.project.load(global)?;
        let id = resolve_object(&project, &self.object)?;

        set_path_with_source_tree_key(&mut project, &id, &self.path, Some(&self.source_tree))?;

        let object = project.object(&id)?;
        if !global.quiet {
            println!(
                "{}: source_tree = {}, path = {}",
                project.describe(&id),
                object.source_tree,
                object.path.as_deref().unwrap_or("")
            );
        }

        if !self.dry_run {
            self.project.save(&project)?;
        }
        Ok(())
    }
}
