//! Build script for pbxtree-cli.
//!
//! This script generates the man page at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// IMPORTANT: Keep this structure synchronized with src/cli.rs
fn build_cli() -> Command {
    Command::new("pbxtree")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Inspect and edit the group hierarchy of a project snapshot")
        .long_about(
            "Resolve parents, hierarchy paths and real paths of the objects in a project \
             snapshot, re-base stored paths and move objects between groups",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Additional configuration file")
                .value_name("PATH")
                .global(true)
                .env("PBXTREE_CONFIG"),
        )
        .subcommands(vec![
            Command::new("validate")
                .about("Check that every object has exactly one parent")
                .long_about("Report every object whose referrers do not form a single parent"),
            Command::new("list")
                .about("List every object with its hierarchy and real path")
                .long_about("Display all objects of a snapshot as text, JSON, YAML or CSV"),
            Command::new("show")
                .about("Show the ownership chain and paths of one object")
                .long_about("Display parent, ancestors, source tree and real path of an object"),
            Command::new("real-path")
                .about("Print the resolved path of one object")
                .long_about("Resolve an object's source tree and path to an absolute path"),
            Command::new("set-path")
                .about("Store a path on an object relative to a source tree")
                .long_about("Convert a full path to the form stored for the given source tree"),
            Command::new("move")
                .about("Move an object into another group")
                .long_about("Replace the parent of an object, refusing moves that create cycles"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").unwrap());
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir).unwrap();

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer).unwrap();

    fs::write(man_dir.join("pbxtree.1"), buffer).unwrap();

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
}
