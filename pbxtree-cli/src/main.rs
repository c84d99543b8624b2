//! Main entry point for the pbxtree CLI.
//!
//! This is the command-line interface for inspecting and editing the group
//! hierarchy stored in a project snapshot:
//! - `validate`: Check that every object has exactly one parent
//! - `list`: List every object with its hierarchy and real path
//! - `show`: Show the ownership chain of one object
//! - `real-path`, `set-path`: Translate between real and stored paths
//! - `move`: Move an object into another group

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    let cli = Cli::parse();

    let logger = pbxtree::init_logger(cli.verbose, cli.quiet);
    if let Err(e) = logger.install() {
        eprintln!("warning: could not install logger: {e}");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
    };

    let result = match cli.command {
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::List(cmd) => cmd.execute(&global),
        cli::Command::Show(cmd) => cmd.execute(&global),
        cli::Command::RealPath(cmd) => cmd.execute(&global),
        cli::Command::SetPath(cmd) => cmd.execute(&global),
        cli::Command::Move(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            if !global.quiet || e.exit_code() != 1 {
                eprintln!("Error: {e}");
            }
            std::process::exit(e.exit_code());
        }
    }
}
