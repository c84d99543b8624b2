//! Command to check the parent integrity of a project snapshot.

use crate::error::CliError;
use crate::utils::{GlobalOptions, ProjectArgs};
use clap::Args;
use pbxtree::hierarchy::integrity_report;

/// Check that every object has exactly one parent.
#[derive(Args)]
pub struct ValidateCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, project) = self.project.load(global)?;
        let issues = integrity_report(&project);

        if self.json {
            serde_json::to_writer_pretty(std::io::stdout().lock(), &issues)?;
            println!();
        } else {
            for issue in &issues {
                println!("{}: {}", issue.id, issue.message);
            }
            if issues.is_empty() && !global.quiet {
                println!("Project is consistent ({} objects)", project.len());
            }
        }

        if issues.is_empty() {
            Ok(())
        } else {
            Err(CliError::SemanticFailure(format!(
                "{} integrity issue(s) found",
                issues.len()
            )))
        }
    }
}
