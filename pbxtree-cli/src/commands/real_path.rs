//! Real path command implementation.

use crate::error::CliError;
use crate::utils::{resolve_object, GlobalOptions, ProjectArgs};
use clap::Args;
use pbxtree::path::{real_path, source_tree_real_path};

/// Print the resolved path of one object.
#[derive(Args)]
pub struct RealPathCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Object id, or hierarchy path starting with `/`
    #[arg(value_name = "OBJECT")]
    pub object: String,

    /// Print the base directory of the object's source tree instead
    #[arg(long)]
    pub source_tree: bool,
}

impl RealPathCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, project) = self.project.load(global)?;
        let id = resolve_object(&project, &self.object)?;

        if self.source_tree {
            match source_tree_real_path(&project, &id)? {
                Some(base) => println!("{}", base.display()),
                None => {
                    if !global.quiet {
                        eprintln!("{} has an absolute source tree", project.describe(&id));
                    }
                }
            }
        } else {
            println!("{}", real_path(&project, &id)?.display());
        }
        Ok(())
    }
}
