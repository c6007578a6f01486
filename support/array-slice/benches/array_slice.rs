//! Benchmarks for ArraySlice vs native slices vs Vec
//!
//! Run with: `cargo bench --bench array_slice`

use array_slice::{ArraySlice, SharedArray};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};

fn backing(size: usize) -> SharedArray<u64> {
    (0..size as u64).collect()
}

fn bench_indexed_read(c: &mut Criterion) {
    let mut group = c.benchmark_group("indexed_read");

    for size in [16, 256, 4096] {
        let slice = ArraySlice::from_range(backing(size + 2), 1, size).unwrap();
        let vec: Vec<u64> = slice.to_vec();

        group.bench_with_input(BenchmarkId::new("ArraySlice::get", size), &size, |b, &size| {
            b.iter(|| {
                let mut sum = 0u64;
                for i in 0..size {
                    sum += *slice.get(black_box(i)).unwrap();
                }
                black_box(sum);
            });
        });

        group.bench_with_input(BenchmarkId::new("ArraySlice::borrow", size), &size, |b, &size| {
            b.iter(|| {
                let values = slice.borrow();
                let mut sum = 0u64;
                for i in 0..size {
                    sum += values[black_box(i)];
                }
                black_box(sum);
            });
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &size, |b, &size| {
            b.iter(|| {
                let mut sum = 0u64;
                for i in 0..size {
                    sum += vec[black_box(i)];
                }
                black_box(sum);
            });
        });
    }

    group.finish();
}

fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");

    for size in [16, 256, 4096] {
        let slice = ArraySlice::from_range(backing(size + 2), 1, size).unwrap();
        let vec: Vec<u64> = slice.to_vec();

        group.bench_with_input(BenchmarkId::new("ArraySlice::iter", size), &slice, |b, slice| {
            b.iter(|| black_box(slice.iter().sum::<u64>()));
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &vec, |b, vec| {
            b.iter(|| black_box(vec.iter().sum::<u64>()));
        });
    }

    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let mut group = c.benchmark_group("index_of_miss");

    for size in [16, 256, 4096] {
        let slice = ArraySlice::from_range(backing(size + 2), 1, size).unwrap();
        let vec: Vec<u64> = slice.to_vec();
        let missing = u64::MAX;

        group.bench_with_input(BenchmarkId::new("ArraySlice", size), &slice, |b, slice| {
            b.iter(|| black_box(slice.index_of(black_box(&missing))));
        });

        group.bench_with_input(BenchmarkId::new("Vec", size), &vec, |b, vec| {
            b.iter(|| black_box(vec.iter().position(|v| v == black_box(&missing))));
        });
    }

    group.finish();
}

fn bench_reslice(c: &mut Criterion) {
    let slice = ArraySlice::from(backing(1024));

    c.bench_function("reslice", |b| {
        b.iter(|| black_box(slice.reslice(black_box(8), black_box(512)).unwrap()));
    });
}

criterion_group!(
    benches,
    bench_indexed_read,
    bench_iterate,
    bench_search,
    bench_reslice
);
criterion_main!(benches);
