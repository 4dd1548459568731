//! Monte Carlo simulator for portfolio value paths.
//!
//! Trials are partitioned into fixed blocks of [`BLOCK_SIZE`]. Block `b`
//! draws from its own [`PricerRng`] seeded with
//! `derive_stream_seed(seed, b)`, so the terminal values depend only on
//! the base seed, never on thread count or scheduling.

use rayon::prelude::*;
use tracing::{debug, info, info_span};

use super::config::SimulationConfig;
use super::error::SimulationError;
use super::params::RandomWalkParams;
use super::result::SimulationResult;
use crate::rng::PricerRng;

/// Number of trials sharing one generator stream.
pub const BLOCK_SIZE: usize = 1024;

/// Seeded random-walk simulator.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::{MonteCarloSimulator, RandomWalkParams, SimulationConfig};
///
/// let config = SimulationConfig::builder()
///     .n_trials(2_000)
///     .horizon(21)
///     .seed(42)
///     .build()
///     .unwrap();
/// let params = RandomWalkParams::new(0.0, 0.01, 100.0).unwrap();
///
/// let simulator = MonteCarloSimulator::new(config, params).unwrap();
/// let result = simulator.run();
/// assert_eq!(result.n_trials(), 2_000);
/// assert!((result.mean() / 100.0 - 1.0).abs() < 0.02);
///
/// // Same seed, same answer
/// assert_eq!(simulator.run().terminal_values(), result.terminal_values());
/// ```
#[derive(Clone, Debug)]
pub struct MonteCarloSimulator {
    config: SimulationConfig,
    params: RandomWalkParams,
}

impl MonteCarloSimulator {
    /// Creates a simulator after validating both inputs.
    ///
    /// # Errors
    ///
    /// Any `SimulationError` raised by [`SimulationConfig::validate`] or
    /// [`RandomWalkParams::validate`].
    pub fn new(config: SimulationConfig, params: RandomWalkParams) -> Result<Self, SimulationError> {
        config.validate()?;
        params.validate()?;
        Ok(Self { config, params })
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Returns the random-walk parameters.
    #[inline]
    pub fn params(&self) -> &RandomWalkParams {
        &self.params
    }

    /// Runs all trials and collects the terminal values.
    pub fn run(&self) -> SimulationResult {
        let span = info_span!(
            "monte_carlo",
            n_trials = self.config.n_trials(),
            horizon = self.config.horizon(),
            seed = self.config.seed()
        );
        let _guard = span.enter();

        let mut terminal = vec![0.0; self.config.n_trials()];
        let n_blocks = terminal.len().div_ceil(BLOCK_SIZE);
        debug!(n_blocks, parallel = self.config.parallel(), "Simulating trial blocks");

        if self.config.parallel() {
            terminal
                .par_chunks_mut(BLOCK_SIZE)
                .enumerate()
                .for_each(|(block, chunk)| self.simulate_block(block as u64, chunk));
        } else {
            terminal
                .chunks_mut(BLOCK_SIZE)
                .enumerate()
                .for_each(|(block, chunk)| self.simulate_block(block as u64, chunk));
        }

        // n_trials >= 1 is enforced by the validated config
        let result = SimulationResult::from_non_empty(terminal, self.params.initial_value);

        info!(
            mean = result.mean(),
            loss_probability = result.loss_probability(),
            "Simulation complete"
        );
        result
    }

    /// Fills one block of terminal values from its own generator stream.
    fn simulate_block(&self, block: u64, out: &mut [f64]) {
        let mut rng = PricerRng::for_stream(self.config.seed(), block);
        let mut shocks = vec![0.0; self.config.horizon()];
        let RandomWalkParams {
            mean,
            volatility,
            initial_value,
        } = self.params;

        for value in out.iter_mut() {
            rng.fill_normal(&mut shocks);
            *value = shocks
                .iter()
                .fold(initial_value, |v, z| v * (1.0 + mean + volatility * z));
        }
    }
}
