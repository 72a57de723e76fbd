//! Climatix Performance Benchmarks
//!
//! Critical paths:
//! - Full HVAC optimization run
//! - Swarm iteration cost by population and dimensionality
//! - Fuzzy recommendation latency

use climatix_common::Bounds;
use climatix_fuzzy::{ControlRecommender, FuzzyController};
use climatix_swarm::{HvacObjective, HvacScenario, Swarm, SwarmConfig};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

// ============ OPTIMIZER BENCHMARKS ============

/// Benchmark a full default-scenario run
fn bench_hvac_optimization(c: &mut Criterion) {
    let mut group = c.benchmark_group("hvac");
    group.measurement_time(Duration::from_secs(10));

    for population in [10usize, 30, 100].iter() {
        group.throughput(Throughput::Elements((*population * 100) as u64));

        group.bench_with_input(
            BenchmarkId::new("run", population),
            population,
            |b, &population| {
                let config = SwarmConfig {
                    population,
                    seed: Some(42),
                    ..Default::default()
                };
                b.iter(|| {
                    let objective = HvacObjective::new(HvacScenario::default()).unwrap();
                    let mut swarm =
                        Swarm::new(Bounds::unit(), config.clone(), objective).unwrap();
                    black_box(swarm.run())
                });
            },
        );
    }

    group.finish();
}

/// Benchmark single iterations on a sphere objective of growing dimension
fn bench_swarm_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for dims in [1usize, 8, 32].iter() {
        group.bench_with_input(BenchmarkId::new("sphere", dims), dims, |b, &dims| {
            let bounds = Bounds::new(vec![(-5.0, 5.0); dims]).unwrap();
            let config = SwarmConfig {
                seed: Some(7),
                ..Default::default()
            };
            let sphere = |x: &[f64]| x.iter().map(|v| v * v).sum::<f64>();
            let mut swarm = Swarm::new(bounds, config, sphere).unwrap();
            b.iter(|| black_box(swarm.step()));
        });
    }

    group.finish();
}

// ============ FUZZY BENCHMARKS ============

/// Benchmark rule evaluation and centroid defuzzification
fn bench_fuzzy_recommend(c: &mut Criterion) {
    let controller = FuzzyController::hvac();

    c.bench_function("fuzzy/recommend", |b| {
        b.iter(|| controller.recommend(black_box(26.0), black_box(15.0)))
    });
}

criterion_group!(
    benches,
    bench_hvac_optimization,
    bench_swarm_step,
    bench_fuzzy_recommend,
);
criterion_main!(benches);
