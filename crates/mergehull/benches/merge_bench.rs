//! Criterion benchmarks for the divide-and-conquer hull.
//! Focus sizes: n in {100, 1_000, 10_000, 100_000}.
//! Results: by default under target/criterion; to store under data/bench, run:
//!   CARGO_TARGET_DIR=data/bench cargo bench -p mergehull

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use mergehull::hull::{compute_hull, divide, merge, XSorted};
use mergehull::rand::{sample_points, ReplayToken, SampleCfg, Shape};

fn points(n: usize, shape: Shape, seed: u64) -> Vec<mergehull::Pt2> {
    sample_points(SampleCfg { n, shape }, ReplayToken { seed, index: 0 })
}

fn bench_hull(c: &mut Criterion) {
    let mut group = c.benchmark_group("hull");
    for &n in &[100usize, 1_000, 10_000, 100_000] {
        group.bench_with_input(BenchmarkId::new("compute_disk", n), &n, |b, &n| {
            let pts = points(n, Shape::Disk { radius: 1.0 }, 41);
            b.iter(|| {
                let _h = compute_hull(&pts).unwrap();
            })
        });

        // worst case for the merge: every point is a vertex
        if n > 10_000 {
            continue;
        }
        group.bench_with_input(BenchmarkId::new("divide_circle", n), &n, |b, &n| {
            b.iter_batched(
                || XSorted::new(&points(n, Shape::Circle { radius: 1.0 }, 42)),
                |sorted| {
                    let _h = divide(&sorted).unwrap();
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge");
    for &n in &[100usize, 1_000, 10_000] {
        group.bench_with_input(BenchmarkId::new("halves_circle", n), &n, |b, &n| {
            let sorted = XSorted::new(&points(n, Shape::Circle { radius: 1.0 }, 43));
            let (lo, hi) = sorted.as_slice().split_at(sorted.len() / 2);
            let left = divide(&XSorted::new(lo)).unwrap();
            let right = divide(&XSorted::new(hi)).unwrap();
            b.iter(|| {
                let _m = merge(&left, &right).unwrap();
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_hull, bench_merge);
criterion_main!(benches);
