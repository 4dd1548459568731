//! Rayon-based batch pricing.
//!
//! Pricing is a pure function of each contract, so batches are mapped on
//! the rayon pool without shared state. Output order always matches input
//! order, and small batches stay on the calling thread.

use pricer_models::analytical::{greeks, price, Greeks};
use pricer_models::instruments::OptionContract;
use pricer_models::strategies::OptionLeg;
use rayon::prelude::*;
use tracing::debug;

/// Minimum number of contracts handed to one rayon task.
pub const DEFAULT_BATCH_SIZE: usize = 64;

/// Default item count at which batches switch to parallel execution.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 100;

/// Configuration for parallel execution.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParallelConfig {
    /// Minimum items per rayon task
    pub batch_size: usize,
    /// Minimum items before using parallelism
    pub parallel_threshold: usize,
}

impl Default for ParallelConfig {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl ParallelConfig {
    /// Creates a new parallel configuration.
    pub fn new(batch_size: usize, parallel_threshold: usize) -> Self {
        Self {
            batch_size: batch_size.max(1),
            parallel_threshold,
        }
    }

    /// Returns whether to use parallel processing for the given item count.
    #[inline]
    pub fn should_parallelize(&self, n_items: usize) -> bool {
        n_items >= self.parallel_threshold
    }

    /// Maps `items` through `mapper`, in parallel above the threshold.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_risk::parallel::ParallelConfig;
    ///
    /// let items: Vec<i32> = (0..1000).collect();
    /// let doubled = ParallelConfig::default().map(&items, |&x| x * 2);
    /// assert_eq!(doubled[500], 1000);
    /// ```
    pub fn map<T, R, F>(&self, items: &[T], mapper: F) -> Vec<R>
    where
        T: Sync,
        R: Send,
        F: Fn(&T) -> R + Sync + Send,
    {
        if self.should_parallelize(items.len()) {
            items
                .par_iter()
                .with_min_len(self.batch_size)
                .map(mapper)
                .collect()
        } else {
            items.iter().map(mapper).collect()
        }
    }
}

/// Prices every contract with the default configuration.
///
/// # Examples
///
/// ```
/// use pricer_models::instruments::OptionContract;
/// use pricer_risk::parallel::price_batch;
///
/// let contracts: Vec<_> = [90.0, 100.0, 110.0]
///     .iter()
///     .map(|&k| OptionContract::call(100.0, k, 1.0, 0.05, 0.2).unwrap())
///     .collect();
/// let prices = price_batch(&contracts);
/// assert!(prices[0] > prices[1] && prices[1] > prices[2]);
/// ```
pub fn price_batch(contracts: &[OptionContract]) -> Vec<f64> {
    price_batch_with(&ParallelConfig::default(), contracts)
}

/// Prices every contract, preserving input order.
pub fn price_batch_with(config: &ParallelConfig, contracts: &[OptionContract]) -> Vec<f64> {
    debug!(
        contracts = contracts.len(),
        parallel = config.should_parallelize(contracts.len()),
        "Pricing batch"
    );
    config.map(contracts, price)
}

/// Computes price and Greeks for every contract with the default configuration.
pub fn greeks_batch(contracts: &[OptionContract]) -> Vec<Greeks> {
    greeks_batch_with(&ParallelConfig::default(), contracts)
}

/// Computes price and Greeks for every contract, preserving input order.
pub fn greeks_batch_with(config: &ParallelConfig, contracts: &[OptionContract]) -> Vec<Greeks> {
    debug!(
        contracts = contracts.len(),
        parallel = config.should_parallelize(contracts.len()),
        "Computing Greeks batch"
    );
    config.map(contracts, greeks)
}

/// Position-weighted sum of Greeks over option legs.
pub fn aggregate_greeks(config: &ParallelConfig, legs: &[OptionLeg]) -> Greeks {
    if config.should_parallelize(legs.len()) {
        legs.par_iter()
            .with_min_len(config.batch_size)
            .map(OptionLeg::greeks)
            .reduce(Greeks::zero, |a, b| a + b)
    } else {
        legs.iter()
            .map(OptionLeg::greeks)
            .fold(Greeks::zero(), |a, b| a + b)
    }
}
