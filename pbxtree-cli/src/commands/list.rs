//! List command implementation.
//!
//! This module implements the `list` command, which displays every object of
//! a snapshot in various formats (text, JSON, YAML, CSV).

use crate::error::CliError;
use crate::utils::{GlobalOptions, ProjectArgs};
use clap::Args;
use pbxtree::hierarchy::hierarchy_path;
use pbxtree::path::real_path;
use pbxtree::{OutputFormat, Project};
use serde::Serialize;
use std::io::Write;

/// Column headers for text/CSV output.
const COLUMN_HEADERS: [&str; 6] = [
    "id",
    "kind",
    "hierarchy_path",
    "source_tree",
    "path",
    "real_path",
];

/// List every object with its hierarchy and real path.
#[derive(Args)]
pub struct ListCommand {
    #[command(flatten)]
    pub project: ProjectArgs,

    /// Output format (text, json, yaml, csv); defaults to the configured one
    #[arg(long, value_name = "FORMAT")]
    pub format: Option<OutputFormat>,

    /// Only list objects at or below this hierarchy path
    #[arg(long, value_name = "PATH")]
    pub filter_path: Option<String>,
}

/// One listed object. Fields that cannot be resolved are `None`.
#[derive(Debug, Serialize)]
struct Row {
    id: String,
    kind: &'static str,
    hierarchy_path: Option<String>,
    source_tree: String,
    path: Option<String>,
    real_path: Option<String>,
}

impl ListCommand {
    /// Execute the list command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let (config, project) = self.project.load(global)?;
        let format = self
            .format
            .unwrap_or_else(|| config.effective_output_format());

        let mut rows = collect_rows(&project);
        if let Some(ref prefix) = self.filter_path {
            let prefix = prefix.trim_end_matches('/');
            rows.retain(|row| {
                row.hierarchy_path.as_deref().is_some_and(|path| {
                    path == prefix || path.starts_with(&format!("{prefix}/"))
                })
            });
        }

        match format {
            OutputFormat::Text => format_as_text(&rows),
            OutputFormat::Json => format_as_json(&rows),
            OutputFormat::Yaml => format_as_yaml(&rows),
            OutputFormat::Csv => format_as_csv(&rows),
        }
    }
}

fn collect_rows(project: &Project) -> Vec<Row> {
    project
        .objects()
        .map(|(id, object)| Row {
            id: id.to_string(),
            kind: object.kind.label(),
            hierarchy_path: hierarchy_path(project, id).ok(),
            source_tree: object.source_tree.clone(),
            path: object.path.clone(),
            real_path: real_path(project, id)
                .ok()
                .map(|path| path.display().to_string()),
        })
        .collect()
}

fn fields(row: &Row, missing: &str) -> [String; 6] {
    [
        row.id.clone(),
        row.kind.to_string(),
        row.hierarchy_path.clone().unwrap_or_else(|| missing.to_string()),
        row.source_tree.clone(),
        row.path.clone().unwrap_or_else(|| missing.to_string()),
        row.real_path.clone().unwrap_or_else(|| missing.to_string()),
    ]
}

/// Format rows as a tab-separated table.
fn format_as_text(rows: &[Row]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();

    let header_line = COLUMN_HEADERS
        .iter()
        .map(|s| s.to_uppercase())
        .collect::<Vec<_>>()
        .join("\t");
    writeln!(handle, "{header_line}")?;

    for row in rows {
        writeln!(handle, "{}", fields(row, "-").join("\t"))?;
    }

    Ok(())
}

fn format_as_json(rows: &[Row]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    serde_json::to_writer_pretty(&mut handle, rows)?;
    writeln!(handle)?;
    Ok(())
}

fn format_as_yaml(rows: &[Row]) -> Result<(), CliError> {
    let yaml = serde_yaml::to_string(rows).map_err(|e| CliError::Library(e.into()))?;
    print!("{yaml}");
    Ok(())
}

fn format_as_csv(rows: &[Row]) -> Result<(), CliError> {
    let stdout = std::io::stdout();
    let mut writer = csv::Writer::from_writer(stdout.lock());

    writer.write_record(COLUMN_HEADERS)?;
    for row in rows {
        writer.write_record(fields(row, ""))?;
    }
    writer.flush()?;

    Ok(())
}
