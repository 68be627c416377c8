//! Benchmarks for the dense matrix core.
//!
//! The determinant bench documents the factorial growth of cofactor
//! expansion; it is a characteristic of the algorithm, not a target to
//! optimize.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use matriz::prelude::*;

fn sample_matrix(rows: usize, cols: usize) -> Matrix {
    let data: Vec<f64> = (0..rows * cols)
        .map(|i| ((i as f64) * 0.37).sin() * 10.0)
        .collect();
    Matrix::from_vec(rows, cols, data).unwrap()
}

fn bench_matmul(c: &mut Criterion) {
    let mut group = c.benchmark_group("matmul");

    for size in [8, 16, 32, 64].iter() {
        let a = sample_matrix(*size, *size);
        let b = sample_matrix(*size, *size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |bench, _| {
            bench.iter(|| black_box(&a).matmul(black_box(&b)).unwrap());
        });
    }

    group.finish();
}

fn bench_det(c: &mut Criterion) {
    let mut group = c.benchmark_group("det_cofactor");

    for size in [2, 4, 6, 8].iter() {
        let m = sample_matrix(*size, *size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |bench, _| {
            bench.iter(|| black_box(&m).det().unwrap());
        });
    }

    group.finish();
}

fn bench_inv(c: &mut Criterion) {
    let mut group = c.benchmark_group("inv_adjugate");

    for size in [2, 3, 4, 5].iter() {
        let m = sample_matrix(*size, *size);

        group.bench_with_input(BenchmarkId::from_parameter(size), size, |bench, _| {
            bench.iter(|| black_box(&m).inv().unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_matmul, bench_det, bench_inv);
criterion_main!(benches);
