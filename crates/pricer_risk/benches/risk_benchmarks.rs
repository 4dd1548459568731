//! Criterion benchmarks for pricer_risk metrics and batch pricing.
//!
//! Benchmarks cover:
//! - Full-series risk report
//! - Rolling metrics over multi-year daily series
//! - Portfolio aggregation across asset counts
//! - Batch pricing, sequential vs parallel

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use pricer_core::market_data::ReturnSeries;
use pricer_models::instruments::OptionContract;
use pricer_risk::metrics::{RiskMetrics, RollingMetric};
use pricer_risk::parallel::{price_batch_with, ParallelConfig};
use pricer_risk::portfolio::{combine, AssetReturns, WeightVector};

/// Deterministic pseudo-returns in roughly ±2%.
fn synthetic_returns(n: usize, salt: usize) -> Vec<f64> {
    (0..n)
        .map(|i| (((i * 31 + salt * 17) % 97) as f64 - 48.0) * 0.0004)
        .collect()
}

fn bench_report(c: &mut Criterion) {
    let mut group = c.benchmark_group("risk_report");
    for n in [252, 2520, 25200] {
        let returns = ReturnSeries::new(synthetic_returns(n, 0)).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(n), &returns, |b, returns| {
            b.iter(|| RiskMetrics::with_defaults(black_box(returns)).report())
        });
    }
    group.finish();
}

fn bench_rolling(c: &mut Criterion) {
    let returns = ReturnSeries::new(synthetic_returns(2520, 1)).unwrap();
    let metrics = RiskMetrics::with_defaults(&returns);
    let mut group = c.benchmark_group("rolling_30d");
    for (name, metric) in [
        ("var", RollingMetric::Var(0.05)),
        ("sharpe", RollingMetric::Sharpe(0.03)),
        ("max_drawdown", RollingMetric::MaxDrawdown),
    ] {
        group.bench_function(name, |b| b.iter(|| metrics.rolling(30, black_box(metric))));
    }
    group.finish();
}

fn bench_combine(c: &mut Criterion) {
    let mut group = c.benchmark_group("portfolio_combine");
    for n_assets in [5, 50, 500] {
        let mut panel = AssetReturns::new();
        for a in 0..n_assets {
            let series = ReturnSeries::new(synthetic_returns(1260, a)).unwrap();
            panel.insert(format!("ASSET{a:03}"), series).unwrap();
        }
        let weights = WeightVector::equal(panel.asset_ids());
        group.bench_with_input(
            BenchmarkId::from_parameter(n_assets),
            &(panel, weights),
            |b, (panel, weights)| b.iter(|| combine(black_box(panel), black_box(weights))),
        );
    }
    group.finish();
}

fn bench_price_batch(c: &mut Criterion) {
    let contracts: Vec<OptionContract> = (0..10_000)
        .map(|i| OptionContract::call(100.0, 50.0 + i as f64 * 0.01, 1.0, 0.05, 0.2).unwrap())
        .collect();
    let mut group = c.benchmark_group("price_batch_10k");
    for (label, config) in [
        ("sequential", ParallelConfig::new(1, usize::MAX)),
        ("parallel", ParallelConfig::default()),
    ] {
        group.bench_with_input(BenchmarkId::new(label, contracts.len()), &config, |b, config| {
            b.iter(|| price_batch_with(config, black_box(&contracts)))
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_report,
    bench_rolling,
    bench_combine,
    bench_price_batch
);
criterion_main!(benches);
