//! Benchmarks for status aggregation and context cloning.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use execflow::prelude::*;

fn aggregate_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("aggregate");
    for size in [4usize, 64, 1024] {
        let positive: Vec<Status> = (0..size)
            .map(|i| if i % 3 == 0 { Status::Skipped } else { Status::Succeeded })
            .collect();
        let mut mixed = positive.clone();
        mixed[size / 2] = Status::Running;
        mixed[size - 1] = Status::Failed;

        group.bench_with_input(BenchmarkId::new("positive", size), &positive, |b, s| {
            b.iter(|| aggregate(black_box(s)));
        });
        group.bench_with_input(BenchmarkId::new("mixed", size), &mixed, |b, s| {
            b.iter(|| aggregate(black_box(s)));
        });
    }
    group.finish();
}

fn clone_benchmark(c: &mut Criterion) {
    let frames = (0..8).map(|i| {
        Frame::new(
            format!("level{i}"),
            format!("runtime{i}"),
            format!("setup{i}"),
            StepType::new("HTTP", StepCategory::Step),
            i64::from(i),
        )
    });
    let ctx = ExecutionContext::new("plan-exec")
        .with_setup_abstraction("accountId", "acc")
        .with_frames(frames);
    let child = Frame::new("child", "r", "s", StepType::new("HTTP", StepCategory::Step), 9);

    c.bench_function("clone_for_child", |b| {
        b.iter(|| black_box(&ctx).clone_for_child());
    });
    c.bench_function("clone_for_child_with", |b| {
        b.iter(|| black_box(&ctx).clone_for_child_with(child.clone()));
    });
    c.bench_function("clone_for_finish", |b| {
        b.iter(|| black_box(&ctx).clone_for_finish());
    });
}

criterion_group!(benches, aggregate_benchmark, clone_benchmark);
criterion_main!(benches);
