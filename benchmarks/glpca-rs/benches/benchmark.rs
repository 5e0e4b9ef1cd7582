//! gLPCA benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Scalability of a single fit (50 to 400 samples)
//! - Number of components
//! - Similarity graph construction (kNN, kernels, metrics)
//! - Beta sweeps against repeated batch fits
//! - Laplacian spectra of reference graphs
//!
//! Run with: `cargo bench`

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use glpca_rs::prelude::*;
use rand::prelude::*;
use rand_distr::Normal;
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Samples on two noisy concentric rings embedded in `features` dimensions.
fn generate_ring_data(features: usize, samples: usize, seed: u64) -> DMatrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise = Normal::new(0.0, 0.05).unwrap();

    DMatrix::from_fn(features, samples, |i, j| {
        let radius = if j % 2 == 0 { 1.0 } else { 2.0 };
        let angle = j as f64 * 2.0 * std::f64::consts::PI / samples as f64;
        let base = match i {
            0 => radius * angle.cos(),
            1 => radius * angle.sin(),
            _ => 0.0,
        };
        base + noise.sample(&mut rng)
    })
}

fn knn_similarity(x: &DMatrix<f64>, k: usize) -> DMatrix<f64> {
    KnnGraph::new(k).kernel(Heat(0.5)).build(x).unwrap()
}

// ============================================================================
// Fit Benchmarks
// ============================================================================

fn bench_scalability(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalability");
    group.sample_size(10);

    for &n in &[50, 100, 200, 400] {
        let x = generate_ring_data(10, n, 42);
        let w = knn_similarity(&x, 8);
        let model = Glpca::new()
            .beta(0.5)
            .components(2)
            .adapter(Batch)
            .build()
            .unwrap();

        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::from_parameter(n), &n, |b, _| {
            b.iter(|| model.fit(black_box(&x), black_box(&w)).unwrap())
        });
    }
    group.finish();
}

fn bench_components(c: &mut Criterion) {
    let mut group = c.benchmark_group("components");
    let x = generate_ring_data(10, 150, 7);
    let w = knn_similarity(&x, 8);

    for &k in &[1, 2, 5, 10] {
        let model = Glpca::new()
            .components(k)
            .return_diagnostics()
            .adapter(Batch)
            .build()
            .unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(k), &k, |b, _| {
            b.iter(|| model.fit(black_box(&x), black_box(&w)).unwrap())
        });
    }
    group.finish();
}

fn bench_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("beta_sweep");
    group.sample_size(10);
    let x = generate_ring_data(10, 150, 3);
    let w = knn_similarity(&x, 8);
    let betas: Vec<f64> = (0..=10).map(|i| i as f64 / 10.0).collect();

    let sweep = Glpca::new()
        .betas(&betas)
        .adapter(Sweep)
        .build()
        .unwrap();
    group.bench_function("sweep_adapter", |b| {
        b.iter(|| sweep.fit(black_box(&x), black_box(&w)).unwrap())
    });

    group.bench_function("repeated_batch", |b| {
        b.iter(|| {
            for &beta in &betas {
                Glpca::new()
                    .beta(beta)
                    .adapter(Batch)
                    .build()
                    .unwrap()
                    .fit(black_box(&x), black_box(&w))
                    .unwrap();
            }
        })
    });
    group.finish();
}

// ============================================================================
// Graph Benchmarks
// ============================================================================

fn bench_similarity(c: &mut Criterion) {
    let mut group = c.benchmark_group("knn_graph");
    let x = generate_ring_data(20, 300, 11);

    let cases: [(&str, KnnGraph<f64>); 4] = [
        ("binary_euclidean", KnnGraph::new(10)),
        ("heat_euclidean", KnnGraph::new(10).kernel(Heat(0.5))),
        ("binary_manhattan", KnnGraph::new(10).metric(Manhattan)),
        (
            "mutual_minkowski",
            KnnGraph::new(10)
                .metric(Minkowski(3.0))
                .symmetrization(Mutual),
        ),
    ];

    for (name, knn) in cases.iter() {
        group.bench_function(*name, |b| b.iter(|| knn.build(black_box(&x)).unwrap()));
    }
    group.finish();
}

fn bench_spectra(c: &mut Criterion) {
    let mut group = c.benchmark_group("laplacian_spectrum");

    let graphs = [
        ("path_200", Graph::path(200)),
        ("cycle_200", Graph::cycle(200)),
        ("grid_14x14", Graph::grid(14, 14)),
        ("complete_100", Graph::complete(100)),
    ];

    for (name, graph) in graphs.iter() {
        let matrices = GraphMatrices::<f64>::from_graph(graph);
        group.bench_function(*name, |b| {
            b.iter(|| black_box(&matrices).spectrum().unwrap())
        });
    }

    group.bench_function("continuum_path_200", |b| {
        b.iter(|| ContinuumComparison::<f64>::path(black_box(200), 1.0, 10).unwrap())
    });
    group.finish();
}

criterion_group!(
    benches,
    bench_scalability,
    bench_components,
    bench_sweep,
    bench_similarity,
    bench_spectra,
);

criterion_main!(benches);
