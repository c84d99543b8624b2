//! Show command implementation.

use crate::error::CliError;
use crate::utils::{resolve_object, GlobalOptions, ProjectArgs};
use clap::Args;
use pbxtree::hierarchy::{hierarchy_path, parent, parents, Parent};
use pbxtree::path::{real_path, source_tree_real_path};
use pbxtree::{ObjectId, Project};
use serde::Serialize;

/// Show the ownership chain and paths of one object.
#[derive(Args)]
pub struct ShowCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Object id, or hierarchy path starting with `/`
    #[arg(value_name = "OBJECT")]
    pub object: String,

    /// Print as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Serialize)]
struct Details {
    id: String,
    kind: &'static str,
    name: String,
    parent: String,
    parents: Vec<String>,
    hierarchy_path: String,
    roles: Vec<String>,
    source_tree: String,
    path: Option<String>,
    source_tree_base: Option<String>,
    real_path: String,
}

impl ShowCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (_, project) = self.project.load(global)?;
        let id = resolve_object(&project, &self.object)?;
        let details = describe(&project, &id)?;

        if self.json {
            serde_json::to_writer_pretty(std::io::stdout().lock(), &details)?;
            println!();
            return Ok(());
        }

        println!("id:               {}", details.id);
        println!("kind:             {}", details.kind);
        println!("name:             {}", details.name);
        println!("parent:           {}", details.parent);
        println!("parents:          {}", details.parents.join(" > "));
        println!("hierarchy path:   {}", details.hierarchy_path);
        if !details.roles.is_empty() {
            println!("roles:            {}", details.roles.join(", "));
        }
        println!("source tree:      {}", details.source_tree);
        println!(
            "path:             {}",
            details.path.as_deref().unwrap_or("-")
        );
        println!(
            "source tree base: {}",
            details.source_tree_base.as_deref().unwrap_or("-")
        );
        println!("real path:        {}", details.real_path);
        Ok(())
    }
}

fn describe(project: &Project, id: &ObjectId) -> Result<Details, CliError> {
    let object = project.object(id)?;
    let parent = match parent(project, id)? {
        Parent::Object(group) => project.describe(&group),
        Parent::Project => "project".to_string(),
    };

    Ok(Details {
        id: id.to_string(),
        kind: object.kind.label(),
        name: object.display_name(),
        parent,
        parents: parents(project, id)?
            .iter()
            .map(|ancestor| project.describe(ancestor))
            .collect(),
        hierarchy_path: hierarchy_path(project, id)?,
        roles: project.roles_for(id).map(|role| role.to_string()).collect(),
        source_tree: object.source_tree.clone(),
        path: object.path.clone(),
        source_tree_base: source_tree_real_path(project, id)?
            .map(|base| base.display().to_string()),
        real_path: real_path(project, id)?.display().to_string(),
    })
}
