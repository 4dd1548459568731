//! Random-walk parameters for portfolio value simulation.
//!
//! Each period the value is compounded by one Normal(μ, σ) return:
//!
//! ```text
//! V(t+1) = V(t) × (1 + μ + σ × Z),   Z ~ N(0, 1)
//! ```
//!
//! Draws below -100% are not truncated, so terminal values may turn
//! negative for large σ.

use pricer_core::market_data::ReturnSeries;
use pricer_core::math::statistics::{mean, sample_std_dev};

use super::error::SimulationError;

/// Per-period return distribution and starting value.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::RandomWalkParams;
///
/// let params = RandomWalkParams {
///     mean: 0.0005,
///     volatility: 0.01,
///     initial_value: 1_000_000.0,
/// };
/// assert!(params.validate().is_ok());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RandomWalkParams {
    /// Mean periodic return (μ).
    pub mean: f64,
    /// Standard deviation of the periodic return (σ).
    pub volatility: f64,
    /// Portfolio value at the start of every trial (V₀).
    pub initial_value: f64,
}

impl RandomWalkParams {
    /// Creates validated parameters.
    ///
    /// # Errors
    ///
    /// `SimulationError::InvalidParameter` if `mean` is non-finite,
    /// `volatility` is negative or non-finite, or `initial_value` is not a
    /// positive finite number.
    pub fn new(mean: f64, volatility: f64, initial_value: f64) -> Result<Self, SimulationError> {
        let params = Self {
            mean,
            volatility,
            initial_value,
        };
        params.validate()?;
        Ok(params)
    }

    /// Estimates μ and σ (sample, n-1) from observed periodic returns.
    ///
    /// # Errors
    ///
    /// `SimulationError::InvalidParameter` if the series has fewer than two
    /// observations or `initial_value` is invalid.
    pub fn from_return_series(
        returns: &ReturnSeries,
        initial_value: f64,
    ) -> Result<Self, SimulationError> {
        let values = returns.values();
        let volatility = sample_std_dev(values).ok_or_else(|| SimulationError::InvalidParameter {
            name: "returns",
            value: format!("at least 2 observations required, got {}", values.len()),
        })?;
        Self::new(mean(values), volatility, initial_value)
    }

    /// Validates the parameters.
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.mean.is_finite() {
            return Err(SimulationError::InvalidParameter {
                name: "mean",
                value: format!("must be finite, got {}", self.mean),
            });
        }
        if !self.volatility.is_finite() || self.volatility < 0.0 {
            return Err(SimulationError::InvalidParameter {
                name: "volatility",
                value: format!("must be finite and non-negative, got {}", self.volatility),
            });
        }
        if !self.initial_value.is_finite() || self.initial_value <= 0.0 {
            return Err(SimulationError::InvalidParameter {
                name: "initial_value",
                value: format!("must be finite and positive, got {}", self.initial_value),
            });
        }
        Ok(())
    }
}
