use criterion::{criterion_group, criterion_main, Criterion};
use matlib_kernel::spectral::{fft_convolution, forward_fft, normalized_cross_correlation};
use matlib_kernel::Complex64;
use std::hint::black_box;

fn bench_fft_1024(c: &mut Criterion) {
    let z: Vec<Complex64> = (0..1024)
        .map(|i| Complex64::new((i as f64 * 0.01).sin(), 0.0))
        .collect();

    c.bench_function("forward_fft_1024", |b| {
        b.iter(|| black_box(forward_fft(&z).unwrap()))
    });
}

fn bench_convolution_4096(c: &mut Criterion) {
    let signal: Vec<f64> = (0..4096).map(|i| (i as f64 * 0.02).cos()).collect();

    c.bench_function("fft_convolution_4096_w10", |b| {
        b.iter(|| black_box(fft_convolution(&signal, 10).unwrap()))
    });
}

fn bench_direct_correlation(c: &mut Criterion) {
    let pulse: Vec<f64> = (0..64).map(|i| (i as f64 * 0.3).sin()).collect();
    let signal: Vec<f64> = (0..2048).map(|i| (i as f64 * 0.05).sin()).collect();

    let mut group = c.benchmark_group("correlation");
    group.sample_size(20);
    group.bench_function("normalized_64_vs_2048", |b| {
        b.iter(|| black_box(normalized_cross_correlation(&pulse, &signal).unwrap()))
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_fft_1024,
    bench_convolution_4096,
    bench_direct_correlation
);
criterion_main!(benches);
