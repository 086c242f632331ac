//! Save/load round-trip benchmark

use criterion::{criterion_group, criterion_main, Criterion};
use matfile::DenseMatrix;
use std::path::PathBuf;

fn bench_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("matfile-bench-{}.matrix", std::process::id()));
    path
}

fn bench_roundtrip(c: &mut Criterion) {
    let rows = 512;
    let cols = 512;
    let data: Vec<f64> = (0..rows * cols).map(|i| (i as f64) * 0.5 - 1000.0).collect();
    let matrix = DenseMatrix::from_vec(data, rows, cols).unwrap();
    let path = bench_path();

    c.bench_function("save_dense_512x512_f64", |b| {
        b.iter(|| matfile::save_dense(&matrix, &path).unwrap())
    });

    matfile::save_dense(&matrix, &path).unwrap();
    c.bench_function("load_dense_512x512_f64", |b| {
        b.iter(|| matfile::load_dense(&path).unwrap())
    });

    let _ = std::fs::remove_file(&path);
}

criterion_group!(benches, bench_roundtrip);
criterion_main!(benches);
