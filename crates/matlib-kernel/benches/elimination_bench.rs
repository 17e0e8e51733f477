// -------------------------------------------------------------------------
// SCPN MatLib -- Elimination Benchmark
// Gauss-Jordan inversion vs Gaussian elimination + back substitution on
// diagonally dominant systems at 16x16, 64x64 and 128x128.
// -------------------------------------------------------------------------

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use matlib_kernel::elimination::{determinant, invert_matrix, solve};
use matlib_kernel::Matrix;
use ndarray::Array2;
use std::hint::black_box;

fn dominant(n: usize) -> Matrix {
    let mut a = Array2::from_shape_fn((n, n), |(i, j)| ((i * 31 + j * 17) % 13) as f64 - 6.0);
    for i in 0..n {
        a[[i, i]] = 7.0 * n as f64;
    }
    a
}

fn bench_elimination(c: &mut Criterion) {
    let mut group = c.benchmark_group("elimination");
    group.sample_size(20);

    for &n in &[16usize, 64, 128] {
        let a = dominant(n);
        let b = Array2::from_elem((n, 1), 1.0);

        group.bench_with_input(BenchmarkId::new("solve", n), &n, |bench, _| {
            bench.iter(|| black_box(solve(&a, &b).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("invert", n), &n, |bench, _| {
            bench.iter(|| black_box(invert_matrix(&a).unwrap()))
        });
        group.bench_with_input(BenchmarkId::new("determinant", n), &n, |bench, _| {
            bench.iter(|| black_box(determinant(&a).unwrap()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_elimination);
criterion_main!(benches);
