//! End-to-end Monte Carlo tests from historical returns to summary.
//!
//! # Test Categories
//!
//! 1. **Reproducibility**: seed determinism across execution modes
//! 2. **Convergence**: sample moments against the random-walk model
//! 3. **Settings**: configuration from the `[simulation]` section

use approx::assert_relative_eq;
use infra_config::{SettingsLoader, SimulationSettings};
use pricer_core::market_data::{PriceSeries, ReturnSeries};
use pricer_pricing::mc::{
    MonteCarloSimulator, RandomWalkParams, SimulationConfig, SimulationError, BLOCK_SIZE,
};
use proptest::prelude::*;

fn run(n_trials: usize, horizon: usize, seed: u64, parallel: bool, params: RandomWalkParams) -> Vec<f64> {
    let config = SimulationConfig::builder()
        .n_trials(n_trials)
        .horizon(horizon)
        .seed(seed)
        .parallel(parallel)
        .build()
        .unwrap();
    MonteCarloSimulator::new(config, params)
        .unwrap()
        .run()
        .terminal_values()
        .to_vec()
}

// ============================================================================
// Reproducibility
// ============================================================================

#[test]
fn test_block_boundaries_do_not_change_prefix() {
    // Trials in complete blocks are unaffected by how many trials follow
    let params = RandomWalkParams::new(0.0, 0.01, 100.0).unwrap();
    let short = run(BLOCK_SIZE, 20, 11, true, params);
    let long = run(3 * BLOCK_SIZE + 17, 20, 11, true, params);
    assert_eq!(&long[..BLOCK_SIZE], &short[..]);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn prop_parallel_equals_sequential(
        n_trials in 1usize..3000,
        horizon in 1usize..40,
        seed in any::<u64>(),
    ) {
        let params = RandomWalkParams::new(0.0002, 0.015, 50.0).unwrap();
        prop_assert_eq!(
            run(n_trials, horizon, seed, true, params),
            run(n_trials, horizon, seed, false, params)
        );
    }
}

// ============================================================================
// Convergence
// ============================================================================

#[test]
fn test_mean_matches_compounded_drift() {
    // E[V_H] = V0 (1 + μ)^H for independent increments
    let params = RandomWalkParams::new(0.001, 0.01, 100.0).unwrap();
    let values = run(20_000, 100, 42, true, params);
    let mean = values.iter().sum::<f64>() / values.len() as f64;
    let expected = 100.0 * 1.001_f64.powi(100);
    assert_relative_eq!(mean, expected, max_relative = 0.01);
}

#[test]
fn test_from_price_history() {
    let prices = PriceSeries::new(vec![100.0, 101.0, 100.5, 102.0, 101.0, 103.0]).unwrap();
    let returns = ReturnSeries::from_prices(&prices).unwrap();
    let params = RandomWalkParams::from_return_series(&returns, 10_000.0).unwrap();

    let config = SimulationConfig::builder()
        .n_trials(5_000)
        .horizon(10)
        .build()
        .unwrap();
    let result = MonteCarloSimulator::new(config, params).unwrap().run();
    let summary = result.summary();

    assert!(summary.min <= summary.p5);
    assert!(summary.p95 <= summary.max);
    assert!(summary.loss_probability >= 0.0 && summary.loss_probability <= 1.0);
    assert_relative_eq!(
        summary.expected_return,
        summary.mean / 10_000.0 - 1.0,
        epsilon = 1e-12
    );
}

// ============================================================================
// Settings
// ============================================================================

#[test]
fn test_config_from_loaded_settings() {
    let settings = SettingsLoader::new()
        .toml_str("[simulation]\nn_trials = 256\nhorizon = 5\nseed = 3\nparallel = false")
        .env_source(Default::default())
        .load()
        .unwrap();
    let config = SimulationConfig::from_settings(&settings.simulation).unwrap();
    assert_eq!(config.n_trials(), 256);
    assert_eq!(config.seed(), 3);
    assert!(!config.parallel());
}

#[test]
fn test_trial_cap_enforced_from_settings() {
    let settings = SimulationSettings {
        n_trials: 11,
        max_trials: 10,
        ..Default::default()
    };
    assert!(matches!(
        SimulationConfig::from_settings(&settings),
        Err(SimulationError::TrialLimitExceeded { .. })
    ));
}
