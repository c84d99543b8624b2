//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, ListCommand, MoveCommand, RealPathCommand, SetPathCommand, ShowCommand,
    ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Inspect and edit the group hierarchy of a project snapshot.
#[derive(Parser)]
#[command(name = "pbxtree")]
#[command(
    version,
    about = "Inspect and edit the group hierarchy of a project snapshot",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Additional configuration file
    #[arg(long, value_name = "PATH", global = true, env = "PBXTREE_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Check that every object has exactly one parent
    Validate(ValidateCommand),

    /// List every object with its hierarchy and real path
    List(ListCommand),

    /// Show the ownership chain and paths of one object
    Show(ShowCommand),

    /// Print the resolved path of one object
    RealPath(RealPathCommand),

    /// Store a path on an object relative to a source tree
    SetPath(SetPathCommand),

    /// Move an object into another group
    Move(MoveCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
