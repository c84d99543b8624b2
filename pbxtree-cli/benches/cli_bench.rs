use std::fmt::Write as _;
use std::process::Command;

use assert_cmd::prelude::*;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tempfile::TempDir;

/// A snapshot with `groups` groups of ten files each below the main group.
fn write_snapshot(dir: &TempDir, groups: usize) -> std::path::PathBuf {
    let mut yaml = String::from(
        "root_dir: /project_dir\nroles:\n  main_group: MAIN\nobjects:\n  MAIN:\n    kind: group\n",
    );
    for group in 0..groups {
        write!(
            yaml,
            "  G{group}:\n    kind: group\n    name: Group{group}\n    path: Group{group}\n    referrers: [MAIN]\n"
        )
        .unwrap();
        for file in 0..10 {
            write!(
                yaml,
                "  G{group}F{file}:\n    kind: file_reference\n    path: File{file}.m\n    referrers: [G{group}]\n"
            )
            .unwrap();
        }
    }
    let path = dir.path().join("App.yaml");
    std::fs::write(&path, yaml).unwrap();
    path
}

fn pbxtree(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pbxtree").expect("failed to locate pbxtree binary");
    cmd.env("HOME", dir.path()).env_remove("PBXTREE_OUTPUT_FORMAT");
    cmd
}

fn bench_cli_startup(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    c.bench_function("cli_startup_version", |b| {
        b.iter(|| {
            let output = pbxtree(&dir).arg("--version").output().unwrap();
            black_box(output);
        });
    });
}

fn bench_commands(c: &mut Criterion) {
    let dir = TempDir::new().unwrap();
    let snapshot = write_snapshot(&dir, 50);
    let mut group = c.benchmark_group("commands");

    group.bench_function("validate", |b| {
        b.iter(|| {
            let output = pbxtree(&dir)
                .args(["validate", "--project"])
                .arg(&snapshot)
                .output()
                .unwrap();
            black_box(output);
        });
    });

    group.bench_function("list_json", |b| {
        b.iter(|| {
            let output = pbxtree(&dir)
                .args(["list", "--format", "json", "--project"])
                .arg(&snapshot)
                .output()
                .unwrap();
            black_box(output);
        });
    });

    group.bench_function("real_path", |b| {
        b.iter(|| {
            let output = pbxtree(&dir)
                .args(["real-path", "/Group42/File7.m", "--project"])
                .arg(&snapshot)
                .output()
                .unwrap();
            black_box(output);
        });
    });

    group.finish();
}

criterion_group!(benches, bench_cli_startup, bench_commands);
criterion_main!(benches);
