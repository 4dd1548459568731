//! Criterion benchmarks for the Monte Carlo simulator.
//!
//! Compares sequential and parallel block execution across trial counts.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_pricing::mc::{MonteCarloSimulator, RandomWalkParams, SimulationConfig};

fn simulator(n_trials: usize, parallel: bool) -> MonteCarloSimulator {
    let config = SimulationConfig::builder()
        .n_trials(n_trials)
        .horizon(252)
        .seed(42)
        .parallel(parallel)
        .build()
        .unwrap();
    let params = RandomWalkParams::new(0.0004, 0.012, 1_000_000.0).unwrap();
    MonteCarloSimulator::new(config, params).unwrap()
}

/// Benchmark a one-year daily simulation.
fn bench_simulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("monte_carlo_252_steps");
    group.sample_size(10);

    for n_trials in [1_000, 10_000, 100_000] {
        for (label, parallel) in [("sequential", false), ("parallel", true)] {
            let sim = simulator(n_trials, parallel);
            group.bench_with_input(BenchmarkId::new(label, n_trials), &sim, |b, sim| {
                b.iter(|| black_box(sim.run()))
            });
        }
    }

    group.finish();
}

/// Benchmark summary statistics on a finished run.
fn bench_summary(c: &mut Criterion) {
    let result = simulator(100_000, true).run();
    c.bench_function("simulation_summary_100k", |b| {
        b.iter(|| black_box(&result).summary())
    });
}

criterion_group!(benches, bench_simulation, bench_summary);
criterion_main!(benches);
