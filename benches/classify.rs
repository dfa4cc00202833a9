//! Benchmarks for viewport classification.
//!
//! These benchmarks measure the performance of:
//! - Classifying widths with the compact split and the grid tiers
//! - Resize dispatch to many observations, with and without class changes
//!
//! Run with: cargo bench --bench classify

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use floem_viewport::{
    Classify, CompactBreakpoint, GridBreakpoints, ManualSurface, ViewportClassifier,
};

fn bench_classify(c: &mut Criterion) {
    let compact = CompactBreakpoint::default();
    let grid = GridBreakpoints::default();
    let widths: Vec<f64> = (0..2000).map(f64::from).collect();

    let mut group = c.benchmark_group("classify");
    group.bench_function("compact", |b| {
        b.iter(|| {
            for width in &widths {
                black_box(compact.classify(black_box(*width)));
            }
        })
    });
    group.bench_function("grid", |b| {
        b.iter(|| {
            for width in &widths {
                black_box(grid.classify(black_box(*width)));
            }
        })
    });
    group.finish();
}

fn bench_dispatch(c: &mut Criterion) {
    let mut group = c.benchmark_group("dispatch");
    for observers in [1, 10, 100] {
        let surface = ManualSurface::with_width(500.0);
        let classifier = ViewportClassifier::new(surface.clone());
        let observations: Vec<_> = (0..observers).map(|_| classifier.observe()).collect();
        let _disposers: Vec<_> = observations
            .iter()
            .map(|o| {
                o.subscribe(|class| {
                    black_box(class);
                })
            })
            .collect();

        group.bench_with_input(
            BenchmarkId::new("same_class", observers),
            &observers,
            |b, _| b.iter(|| surface.resize(black_box(600.0))),
        );
        group.bench_with_input(
            BenchmarkId::new("crossing", observers),
            &observers,
            |b, _| {
                b.iter(|| {
                    surface.resize(black_box(900.0));
                    surface.resize(black_box(500.0));
                })
            },
        );
    }
    group.finish();
}

criterion_group!(benches, bench_classify, bench_dispatch);
criterion_main!(benches);
