use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pbxtree::hierarchy::{hierarchy_path, integrity_report, move_object, parent, parents};
use pbxtree::path::{normalize, real_path, set_path_with_source_tree, PathRelationship};
use pbxtree::{ObjectId, Project, SourceTree};
use std::path::Path;

/// A chain of `depth` nested groups below the main group, each with a path.
fn nested_project(depth: usize) -> (Project, ObjectId) {
    let mut project = Project::new("/project_dir");
    let mut current = project.main_group().clone();
    for level in 0..depth {
        let name = format!("Level{level}");
        let next = project.new_group(&current, &name).unwrap();
        project.object_mut(&next).unwrap().path = Some(name);
        current = next;
    }
    (project, current)
}

/// A main group with `count` groups of ten files each.
fn wide_project(count: usize) -> Project {
    let mut project = Project::new("/project_dir");
    let main = project.main_group().clone();
    for group_index in 0..count {
        let group = project
            .new_group(&main, &format!("Group{group_index}"))
            .unwrap();
        for file_index in 0..10 {
            project
                .new_file(&group, &format!("File{file_index}.m"))
                .unwrap();
        }
    }
    project
}

fn bench_parent_resolution(c: &mut Criterion) {
    let mut group = c.benchmark_group("parent_resolution");

    for depth in [1, 8, 32] {
        let (project, leaf) = nested_project(depth);

        group.bench_with_input(BenchmarkId::new("parent", depth), &depth, |b, _| {
            b.iter(|| parent(black_box(&project), black_box(&leaf)));
        });

        group.bench_with_input(BenchmarkId::new("parents", depth), &depth, |b, _| {
            b.iter(|| parents(black_box(&project), black_box(&leaf)));
        });

        group.bench_with_input(BenchmarkId::new("hierarchy_path", depth), &depth, |b, _| {
            b.iter(|| hierarchy_path(black_box(&project), black_box(&leaf)));
        });
    }

    group.finish();
}

fn bench_real_path(c: &mut Criterion) {
    let mut group = c.benchmark_group("real_path");

    for depth in [1, 8, 32] {
        let (project, leaf) = nested_project(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, _| {
            b.iter(|| real_path(black_box(&project), black_box(&leaf)));
        });
    }

    group.bench_function("join", |b| {
        b.iter(|| normalize::join(black_box(Path::new("/project_dir/Parent")), "../Shared/a.m"));
    });

    group.bench_function("relative_within", |b| {
        b.iter(|| {
            PathRelationship::relative_within(
                black_box(Path::new("/project_dir/Parent/Classes")),
                black_box(Path::new("/project_dir")),
            )
        });
    });

    group.finish();
}

fn bench_mutations(c: &mut Criterion) {
    let mut group = c.benchmark_group("mutations");

    let (project, leaf) = nested_project(8);
    group.bench_function("set_path_group", |b| {
        b.iter_batched(
            || project.clone(),
            |mut project| {
                set_path_with_source_tree(
                    &mut project,
                    &leaf,
                    "/project_dir/Level0/Level1/Level2/Level3/Level4/Level5/Level6/Level7",
                    Some(SourceTree::Group),
                )
            },
            criterion::BatchSize::SmallInput,
        );
    });

    let main = project.main_group().clone();
    group.bench_function("move_object", |b| {
        b.iter_batched(
            || project.clone(),
            |mut project| move_object(&mut project, Some(&leaf), Some(&main)),
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn bench_integrity_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("integrity_report");

    for count in [10, 100] {
        let project = wide_project(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| integrity_report(black_box(&project)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_parent_resolution,
    bench_real_path,
    bench_mutations,
    bench_integrity_report
);
criterion_main!(benches);
