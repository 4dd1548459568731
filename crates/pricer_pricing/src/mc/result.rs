//! Simulation output and summary statistics.
//!
//! [`SimulationResult`] keeps every terminal value in trial order plus an
//! ascending copy for percentile queries. Statistics are derived on demand
//! from the full sample, never accumulated incrementally.

use pricer_core::math::statistics::{mean, quantile_sorted, sample_std_dev, sorted};

use super::error::SimulationError;

/// Snapshot of the headline statistics of one simulation.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimulationSummary {
    /// Mean terminal value
    pub mean: f64,
    /// Median terminal value
    pub median: f64,
    /// 5th percentile terminal value
    pub p5: f64,
    /// 95th percentile terminal value
    pub p95: f64,
    /// Fraction of trials ending strictly below the initial value
    pub loss_probability: f64,
    /// Largest terminal value
    pub max: f64,
    /// Smallest terminal value
    pub min: f64,
    /// mean / initial value - 1
    pub expected_return: f64,
}

/// Terminal values of a completed simulation.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::SimulationResult;
///
/// let result = SimulationResult::new(vec![90.0, 110.0, 100.0, 120.0], 100.0).unwrap();
/// assert_eq!(result.mean(), 105.0);
/// assert_eq!(result.median(), 105.0);
/// assert_eq!(result.loss_probability(), 0.25);
/// assert!((result.expected_return() - 0.05).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct SimulationResult {
    terminal_values: Vec<f64>,
    #[cfg_attr(feature = "serde", serde(skip))]
    sorted: Vec<f64>,
    initial_value: f64,
}

impl SimulationResult {
    /// Wraps terminal values produced from `initial_value`.
    ///
    /// # Errors
    ///
    /// - `InvalidTrialCount` if `terminal_values` is empty
    /// - `InvalidParameter` if `initial_value` is not a positive finite
    ///   number or any terminal value is non-finite
    pub fn new(terminal_values: Vec<f64>, initial_value: f64) -> Result<Self, SimulationError> {
        if terminal_values.is_empty() {
            return Err(SimulationError::InvalidTrialCount(0));
        }
        if !initial_value.is_finite() || initial_value <= 0.0 {
            return Err(SimulationError::InvalidParameter {
                name: "initial_value",
                value: format!("must be finite and positive, got {}", initial_value),
            });
        }
        if let Some(bad) = terminal_values.iter().find(|v| !v.is_finite()) {
            return Err(SimulationError::InvalidParameter {
                name: "terminal_values",
                value: format!("must be finite, got {}", bad),
            });
        }
        Ok(Self::from_non_empty(terminal_values, initial_value))
    }

    pub(crate) fn from_non_empty(terminal_values: Vec<f64>, initial_value: f64) -> Self {
        debug_assert!(!terminal_values.is_empty());
        let sorted = sorted(&terminal_values);
        Self {
            terminal_values,
            sorted,
            initial_value,
        }
    }

    /// Terminal values in trial order.
    #[inline]
    pub fn terminal_values(&self) -> &[f64] {
        &self.terminal_values
    }

    /// Starting value of every trial.
    #[inline]
    pub fn initial_value(&self) -> f64 {
        self.initial_value
    }

    /// Number of trials.
    #[inline]
    pub fn n_trials(&self) -> usize {
        self.terminal_values.len()
    }

    /// Mean terminal value.
    pub fn mean(&self) -> f64 {
        mean(&self.terminal_values)
    }

    /// Sample standard deviation of terminal values (0 for a single trial).
    pub fn std_dev(&self) -> f64 {
        sample_std_dev(&self.terminal_values).unwrap_or(0.0)
    }

    /// Median terminal value.
    pub fn median(&self) -> f64 {
        self.quantile(0.5)
    }

    /// Terminal value at percentile `p` in [0, 100], linearly interpolated.
    ///
    /// # Errors
    ///
    /// `SimulationError::InvalidParameter` if `p` lies outside [0, 100].
    pub fn percentile(&self, p: f64) -> Result<f64, SimulationError> {
        if !(0.0..=100.0).contains(&p) {
            return Err(SimulationError::InvalidParameter {
                name: "percentile",
                value: format!("must be in [0, 100], got {}", p),
            });
        }
        Ok(self.quantile(p / 100.0))
    }

    /// Fraction of trials ending strictly below the initial value.
    pub fn loss_probability(&self) -> f64 {
        let losses = self
            .terminal_values
            .iter()
            .filter(|&&v| v < self.initial_value)
            .count();
        losses as f64 / self.n_trials() as f64
    }

    /// Largest terminal value.
    pub fn max(&self) -> f64 {
        self.sorted[self.sorted.len() - 1]
    }

    /// Smallest terminal value.
    pub fn min(&self) -> f64 {
        self.sorted[0]
    }

    /// Mean terminal value relative to the initial value, minus one.
    pub fn expected_return(&self) -> f64 {
        self.mean() / self.initial_value - 1.0
    }

    /// Computes the headline statistics.
    pub fn summary(&self) -> SimulationSummary {
        SimulationSummary {
            mean: self.mean(),
            median: self.median(),
            p5: self.quantile(0.05),
            p95: self.quantile(0.95),
            loss_probability: self.loss_probability(),
            max: self.max(),
            min: self.min(),
            expected_return: self.expected_return(),
        }
    }

    /// Quantile for `q` in [0, 1]; the sample is non-empty by construction.
    fn quantile(&self, q: f64) -> f64 {
        quantile_sorted(&self.sorted, q).unwrap_or(f64::NAN)
    }
}
