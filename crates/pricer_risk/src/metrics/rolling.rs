//! Rolling-window risk metrics.
//!
//! Output `i` is computed over observations `[i, i + window)` for
//! `i in 0..(n − window)`, giving `n − window` values. The window ending at
//! the final observation is not emitted, so each value only uses returns
//! strictly before the observation at index `i + window`.

use pricer_core::math::statistics::sorted;
use rayon::prelude::*;
use tracing::debug;

use super::config::validate_confidence;
use super::engine::RiskMetrics;
use super::error::RiskError;
use super::measures;

/// Outputs at or above this count are computed on the rayon pool.
pub const PARALLEL_ROLLING_THRESHOLD: usize = 512;

/// Statistic evaluated on each rolling window.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RollingMetric {
    /// Historical VaR at the given tail probability
    Var(f64),
    /// Expected shortfall at the given tail probability
    ExpectedShortfall(f64),
    /// Annualised Sharpe ratio against the given annual risk-free rate
    Sharpe(f64),
    /// Maximum drawdown within the window
    MaxDrawdown,
    /// Annualised volatility
    Volatility,
}

impl RollingMetric {
    fn validate(&self) -> Result<(), RiskError> {
        match *self {
            RollingMetric::Var(c) | RollingMetric::ExpectedShortfall(c) => validate_confidence(c),
            RollingMetric::Sharpe(rf) if !rf.is_finite() => Err(RiskError::InvalidRiskFreeRate(rf)),
            _ => Ok(()),
        }
    }

    fn evaluate(&self, window: &[f64], periods: f64) -> Result<f64, RiskError> {
        match *self {
            RollingMetric::Var(c) => measures::historical_var(&sorted(window), c),
            RollingMetric::ExpectedShortfall(c) => {
                let sorted = sorted(window);
                let var = measures::historical_var(&sorted, c)?;
                measures::expected_shortfall(&sorted, var)
            }
            RollingMetric::Sharpe(rf) => measures::sharpe(window, periods, rf),
            RollingMetric::MaxDrawdown => Ok(measures::max_drawdown(window)),
            RollingMetric::Volatility => measures::annualised_volatility(window, periods),
        }
    }

    /// Same as `evaluate`, with a flat window mapped to `None`.
    fn evaluate_or_flat(&self, window: &[f64], periods: f64) -> Result<Option<f64>, RiskError> {
        match self.evaluate(window, periods) {
            Ok(value) => Ok(Some(value)),
            Err(RiskError::ZeroVolatility) => Ok(None),
            Err(err) => Err(err),
        }
    }
}

impl RiskMetrics<'_> {
    /// Evaluates `metric` over each trailing window of `window` observations.
    ///
    /// A window whose statistic is undefined for lack of dispersion (a flat
    /// Sharpe window) yields `None` in its slot; the other windows are
    /// unaffected. Every other metric always yields `Some`.
    ///
    /// # Errors
    ///
    /// - `InvalidWindow` if `window` is 0
    /// - `InsufficientData` if `window` exceeds the series length, or a
    ///   window is too short for the statistic (Sharpe, volatility)
    /// - `InvalidConfidenceLevel` / `InvalidRiskFreeRate` for bad metric
    ///   parameters
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::market_data::ReturnSeries;
    /// use pricer_risk::metrics::{RiskMetrics, RollingMetric};
    ///
    /// let returns = ReturnSeries::new(vec![0.01, -0.02, 0.03, -0.01, 0.02]).unwrap();
    /// let metrics = RiskMetrics::with_defaults(&returns);
    ///
    /// let dd = metrics.rolling(3, RollingMetric::MaxDrawdown).unwrap();
    /// assert_eq!(dd.len(), 2);
    /// assert!(dd.iter().all(Option::is_some));
    /// ```
    pub fn rolling(
        &self,
        window: usize,
        metric: RollingMetric,
    ) -> Result<Vec<Option<f64>>, RiskError> {
        let periods = self.config().periods();
        self.map_windows(window, metric, |w| metric.evaluate_or_flat(w, periods))
    }

    /// Rolling historical VaR at tail probability `c`.
    pub fn rolling_var(&self, window: usize, c: f64) -> Result<Vec<f64>, RiskError> {
        self.rolling_values(window, RollingMetric::Var(c))
    }

    /// Rolling expected shortfall at tail probability `c`.
    pub fn rolling_expected_shortfall(&self, window: usize, c: f64) -> Result<Vec<f64>, RiskError> {
        self.rolling_values(window, RollingMetric::ExpectedShortfall(c))
    }

    /// Rolling Sharpe ratio against annual risk-free rate `rf`.
    ///
    /// Windows with no dispersion are `None`, matching
    /// [`RiskReport::sharpe_ratio`](super::RiskReport::sharpe_ratio).
    pub fn rolling_sharpe(&self, window: usize, rf: f64) -> Result<Vec<Option<f64>>, RiskError> {
        self.rolling(window, RollingMetric::Sharpe(rf))
    }

    /// Rolling maximum drawdown.
    pub fn rolling_max_drawdown(&self, window: usize) -> Result<Vec<f64>, RiskError> {
        self.rolling_values(window, RollingMetric::MaxDrawdown)
    }

    /// Rolling annualised volatility.
    pub fn rolling_volatility(&self, window: usize) -> Result<Vec<f64>, RiskError> {
        self.rolling_values(window, RollingMetric::Volatility)
    }

    /// Rolling metric that is defined on every window.
    fn rolling_values(&self, window: usize, metric: RollingMetric) -> Result<Vec<f64>, RiskError> {
        let periods = self.config().periods();
        self.map_windows(window, metric, |w| metric.evaluate(w, periods))
    }

    fn map_windows<R, F>(
        &self,
        window: usize,
        metric: RollingMetric,
        eval: F,
    ) -> Result<Vec<R>, RiskError>
    where
        R: Send,
        F: Fn(&[f64]) -> Result<R, RiskError> + Sync,
    {
        metric.validate()?;
        let values = self.returns().values();
        if window == 0 {
            return Err(RiskError::InvalidWindow(window));
        }
        if window > values.len() {
            return Err(RiskError::InsufficientData {
                required: window,
                available: values.len(),
            });
        }

        let count = values.len() - window;
        debug!(window, count, ?metric, "Computing rolling metric");

        if count >= PARALLEL_ROLLING_THRESHOLD {
            values.par_windows(window).take(count).map(&eval).collect()
        } else {
            values.windows(window).take(count).map(&eval).collect()
        }
    }
}
