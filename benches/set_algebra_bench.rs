//! ExtendedSet algebra benchmark.
//!
//! Every operation is a linear scan per element, so binary operations are
//! quadratic. Sizes stay small enough to finish quickly while still showing
//! the growth curve.
//!
//! Also compares the two strategies offered for difference, intersection
//! and flatten.

use criterion::{BatchSize, BenchmarkId, Criterion, criterion_group, criterion_main};
use eqset::{ExtendedSet, Nested};
use std::hint::black_box;

const SIZES: [i32; 3] = [16, 128, 512];

/// Builds a pair of sets overlapping in half of their elements.
fn overlapping_sets(size: i32) -> (ExtendedSet<i32>, ExtendedSet<i32>) {
    let left: ExtendedSet<i32> = (0..size).collect();
    let right: ExtendedSet<i32> = (size / 2..size + size / 2).collect();
    (left, right)
}

/// Builds a chain of sets nested `depth` levels deep, with one atom per level.
fn nested_chain(depth: i32) -> ExtendedSet<Nested<i32>> {
    let mut set: ExtendedSet<Nested<i32>> = ExtendedSet::new();
    for level in 0..depth {
        let mut outer = ExtendedSet::new();
        outer.add(Nested::atom(level));
        outer.add(Nested::set(set));
        set = outer;
    }
    set
}

fn benchmark_add(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("extended_set_add");

    for size in SIZES {
        group.bench_with_input(BenchmarkId::new("add", size), &size, |bencher, &size| {
            bencher.iter(|| {
                let mut set = ExtendedSet::new();
                for value in 0..size {
                    set.add(black_box(value));
                }
                black_box(set)
            });
        });
    }

    group.finish();
}

fn benchmark_union(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("extended_set_union");

    for size in SIZES {
        let (left, right) = overlapping_sets(size);
        group.bench_with_input(BenchmarkId::new("union", size), &size, |bencher, _| {
            bencher.iter(|| black_box(left.union(black_box(&right))));
        });
        group.bench_with_input(
            BenchmarkId::new("union_in_place", size),
            &size,
            |bencher, _| {
                bencher.iter_batched(
                    || left.clone(),
                    |mut merged| {
                        merged.union_in_place(black_box(&right));
                        merged
                    },
                    BatchSize::SmallInput,
                );
            },
        );
    }

    group.finish();
}

fn benchmark_difference_strategies(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("extended_set_difference");

    for size in SIZES {
        let (left, right) = overlapping_sets(size);
        group.bench_with_input(BenchmarkId::new("inclusion", size), &size, |bencher, _| {
            bencher.iter(|| black_box(left.difference(black_box(&right))));
        });
        group.bench_with_input(BenchmarkId::new("removal", size), &size, |bencher, _| {
            bencher.iter(|| black_box(left.difference_by_removal(black_box(&right))));
        });
    }

    group.finish();
}

fn benchmark_intersection_strategies(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("extended_set_intersection");

    for size in SIZES {
        let (left, right) = overlapping_sets(size);
        group.bench_with_input(BenchmarkId::new("inclusion", size), &size, |bencher, _| {
            bencher.iter(|| black_box(left.intersection(black_box(&right))));
        });
        group.bench_with_input(BenchmarkId::new("removal", size), &size, |bencher, _| {
            bencher.iter(|| black_box(left.intersection_by_removal(black_box(&right))));
        });
    }

    group.finish();
}

fn benchmark_power_set(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("extended_set_power_set");

    for size in [4, 8, 12] {
        let set: ExtendedSet<i32> = (0..size).collect();
        group.bench_with_input(BenchmarkId::new("power_set", size), &size, |bencher, _| {
            bencher.iter(|| black_box(set.power_set()));
        });
    }

    group.finish();
}

fn benchmark_flatten_strategies(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("nested_flatten");

    for depth in [8, 64, 256] {
        let set = nested_chain(depth);
        group.bench_with_input(BenchmarkId::new("recursive", depth), &depth, |bencher, _| {
            bencher.iter(|| black_box(set.flatten()));
        });
        group.bench_with_input(BenchmarkId::new("stack", depth), &depth, |bencher, _| {
            bencher.iter(|| black_box(set.flatten_with_stack()));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    benchmark_add,
    benchmark_union,
    benchmark_difference_strategies,
    benchmark_intersection_strategies,
    benchmark_power_set,
    benchmark_flatten_strategies
);
criterion_main!(benches);
