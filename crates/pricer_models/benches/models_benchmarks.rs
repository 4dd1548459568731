//! Criterion benchmarks for pricer_models analytical pricing.
//!
//! Measures single-contract pricing, full Greeks evaluation, and a
//! strike grid priced from one model instance.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_models::analytical::{greeks, price, BlackScholes};
use pricer_models::instruments::{OptionContract, OptionType};
use pricer_models::strategies::OptionStrategy;

/// Benchmark price and Greeks of one contract.
fn bench_single_contract(c: &mut Criterion) {
    let mut group = c.benchmark_group("black_scholes_single");
    let call = OptionContract::call(150.0, 155.0, 0.25, 0.05, 0.25).unwrap();

    group.bench_function("price", |b| b.iter(|| price(black_box(&call))));
    group.bench_function("greeks", |b| b.iter(|| greeks(black_box(&call))));

    group.finish();
}

/// Benchmark a strike grid priced from a single model.
fn bench_strike_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("black_scholes_grid");
    let bs = BlackScholes::new(100.0_f64, 0.05, 0.2).unwrap();

    for size in [10, 100, 1000] {
        let strikes: Vec<f64> = (0..size)
            .map(|i| 50.0 + 100.0 * i as f64 / size as f64)
            .collect();

        group.bench_with_input(BenchmarkId::new("price", size), &strikes, |b, strikes| {
            b.iter(|| {
                strikes
                    .iter()
                    .map(|&k| bs.price(black_box(k), 1.0, OptionType::Call))
                    .sum::<f64>()
            });
        });
    }

    group.finish();
}

/// Benchmark a four-leg strategy.
fn bench_strategy(c: &mut Criterion) {
    let condor =
        OptionStrategy::iron_condor(100.0, 85.0, 95.0, 105.0, 115.0, 0.25, 0.03, 0.2).unwrap();
    c.bench_function("iron_condor_net_greeks", |b| {
        b.iter(|| black_box(&condor).net_greeks())
    });
}

criterion_group!(benches, bench_single_contract, bench_strike_grid, bench_strategy);
criterion_main!(benches);
