//! Common test utilities for CLI integration tests.
//!
//! This module provides shared helpers for CLI testing:
//! - An isolated environment (temporary `HOME`, no `PBXTREE_*` variables)
//! - A snapshot fixture written into that environment
//! - Helpers to read the snapshot back after mutating commands

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Snapshot used by most tests.
///
/// ```text
/// <main>
/// ├── Products          (products group)
/// ├── Parent            path Parent
/// │   └── Classes       path Classes
/// │       └── App.m
/// └── Other             path Other
/// ```
pub const SNAPSHOT: &str = r"root_dir: /project_dir
roles:
  main_group: MAIN
  products_group: PRODUCTS
objects:
  MAIN:
    kind: group
  PRODUCTS:
    kind: group
    name: Products
    referrers: [MAIN]
  PARENT:
    kind: group
    name: Parent
    path: Parent
    referrers: [MAIN]
  CLASSES:
    kind: group
    name: Classes
    path: Classes
    referrers: [PARENT]
  APP:
    kind: file_reference
    path: App.m
    referrers: [CLASSES]
  OTHER:
    kind: group
    name: Other
    path: Other
    referrers: [MAIN]
";

/// Variables that must not leak from the developer's shell into tests.
const ISOLATED_VARS: [&str; 8] = [
    "PBXTREE_PROJECT",
    "PBXTREE_CONFIG",
    "PBXTREE_LOG_MODE",
    "PBXTREE_OUTPUT_FORMAT",
    "PBXTREE_BUILT_PRODUCTS_DIR",
    "PBXTREE_DEVELOPER_DIR",
    "PBXTREE_SDKROOT",
    "XDG_CONFIG_HOME",
];

/// Test environment with an isolated home directory and a snapshot file.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Path to the temporary directory
    pub temp_path: PathBuf,
    /// Path to the snapshot file
    pub snapshot: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create an environment holding [`SNAPSHOT`] as `App.yaml`.
    pub fn new() -> Self {
        Self::with_snapshot("App.yaml", SNAPSHOT)
    }

    /// Create an environment holding `contents` under `name`.
    pub fn with_snapshot(name: &str, contents: &str) -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let temp_path = temp_dir.path().to_path_buf();
        std::fs::create_dir_all(temp_path.join("home")).expect("Failed to create home dir");
        let snapshot = temp_path.join(name);
        std::fs::write(&snapshot, contents).expect("Failed to write snapshot");

        Self {
            temp_dir,
            temp_path,
            snapshot,
        }
    }

    /// A command with only the isolated environment applied.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("pbxtree").expect("Failed to find pbxtree binary");
        cmd.env("HOME", self.temp_path.join("home"));
        cmd.current_dir(&self.temp_path);
        for var in ISOLATED_VARS {
            cmd.env_remove(var);
        }
        cmd
    }

    /// A command for `subcommand` with `--project` pointing at the snapshot.
    pub fn command(&self, subcommand: &str) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg(subcommand).arg("--project").arg(&self.snapshot);
        cmd
    }

    /// Get the temp path.
    pub fn path(&self) -> &Path {
        &self.temp_path
    }

    /// Write a file relative to the environment root.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.temp_path.join(name);
        std::fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Read the snapshot back as a YAML value.
    pub fn snapshot_value(&self) -> serde_yaml::Value {
        let contents = std::fs::read_to_string(&self.snapshot).expect("Failed to read snapshot");
        serde_yaml::from_str(&contents).expect("Snapshot is not valid YAML")
    }

    /// Field `field` of object `id` in the saved snapshot, as a string.
    pub fn object_field(&self, id: &str, field: &str) -> Option<String> {
        self.snapshot_value()["objects"][id][field]
            .as_str()
            .map(str::to_string)
    }

    /// Referrers of object `id` in the saved snapshot.
    pub fn referrers(&self, id: &str) -> Vec<String> {
        self.snapshot_value()["objects"][id]["referrers"]
            .as_sequence()
            .map(|seq| {
                seq.iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}
