//! Historical risk metrics over one return series.
//!
//! # Sign Convention
//!
//! VaR and expected shortfall are reported in return space: a 2.3% loss
//! threshold is `-0.023`. Max drawdown is likewise a non-positive fraction.

use pricer_core::market_data::ReturnSeries;
use pricer_core::math::statistics::{mean, sorted};
use tracing::{debug, info};

use super::config::{validate_confidence, RiskConfig};
use super::error::RiskError;
use super::measures;
use super::report::RiskReport;

/// Risk metrics engine bound to one (already portfolio-weighted) series.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::ReturnSeries;
/// use pricer_risk::metrics::{RiskConfig, RiskMetrics};
///
/// let returns = ReturnSeries::new(vec![0.01, -0.02, 0.015, -0.005, 0.02, -0.03]).unwrap();
/// let metrics = RiskMetrics::new(&returns, RiskConfig::default()).unwrap();
///
/// let var = metrics.var_historical(0.05).unwrap();
/// let es = metrics.expected_shortfall(0.05).unwrap();
/// assert!(es <= var && var < 0.0);
///
/// let dd = metrics.max_drawdown();
/// assert!((-1.0..=0.0).contains(&dd));
/// ```
#[derive(Clone, Debug)]
pub struct RiskMetrics<'a> {
    returns: &'a ReturnSeries,
    sorted: Vec<f64>,
    config: RiskConfig,
}

impl<'a> RiskMetrics<'a> {
    /// Creates an engine after validating `config`.
    pub fn new(returns: &'a ReturnSeries, config: RiskConfig) -> Result<Self, RiskError> {
        config.validate()?;
        debug!(
            observations = returns.len(),
            periods_per_year = config.periods_per_year,
            "Risk metrics engine created"
        );
        Ok(Self {
            returns,
            sorted: sorted(returns.values()),
            config,
        })
    }

    /// Creates an engine with [`RiskConfig::default`].
    pub fn with_defaults(returns: &'a ReturnSeries) -> Self {
        Self {
            returns,
            sorted: sorted(returns.values()),
            config: RiskConfig::default(),
        }
    }

    /// Underlying return series.
    #[inline]
    pub fn returns(&self) -> &'a ReturnSeries {
        self.returns
    }

    /// Engine configuration.
    #[inline]
    pub fn config(&self) -> &RiskConfig {
        &self.config
    }

    /// Number of observations.
    #[inline]
    pub fn len(&self) -> usize {
        self.returns.len()
    }

    /// Always false; see [`ReturnSeries::is_empty`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.returns.is_empty()
    }

    /// Historical VaR: the return at tail probability `c`.
    ///
    /// Linearly interpolated between the order statistics bracketing rank
    /// `c·(n−1)` of the ascending returns.
    ///
    /// # Errors
    ///
    /// `RiskError::InvalidConfidenceLevel` unless 0 < c < 1.
    pub fn var_historical(&self, c: f64) -> Result<f64, RiskError> {
        validate_confidence(c)?;
        measures::historical_var(&self.sorted, c)
    }

    /// Expected shortfall: mean of the returns at or below VaR(c).
    ///
    /// Never exceeds VaR(c). If no observation qualifies the worst
    /// observation is returned.
    ///
    /// # Errors
    ///
    /// `RiskError::InvalidConfidenceLevel` unless 0 < c < 1.
    pub fn expected_shortfall(&self, c: f64) -> Result<f64, RiskError> {
        let var = self.var_historical(c)?;
        measures::expected_shortfall(&self.sorted, var)
    }

    /// Annualised Sharpe ratio against the annual risk-free rate `rf`.
    ///
    /// # Errors
    ///
    /// - `InsufficientData` with fewer than two observations
    /// - `ZeroVolatility` if the returns have no dispersion
    /// - `InvalidRiskFreeRate` if `rf` is not finite
    pub fn sharpe_ratio(&self, rf: f64) -> Result<f64, RiskError> {
        if !rf.is_finite() {
            return Err(RiskError::InvalidRiskFreeRate(rf));
        }
        measures::sharpe(self.returns.values(), self.config.periods(), rf)
    }

    /// Sharpe ratio at the configured risk-free rate.
    pub fn sharpe(&self) -> Result<f64, RiskError> {
        self.sharpe_ratio(self.config.risk_free_rate)
    }

    /// Maximum drawdown in [−1, 0] (below −1 only after a ≥100% period loss).
    pub fn max_drawdown(&self) -> f64 {
        measures::max_drawdown(self.returns.values())
    }

    /// Mean periodic return.
    pub fn mean(&self) -> f64 {
        mean(self.returns.values())
    }

    /// Sample standard deviation of periodic returns.
    pub fn std_dev(&self) -> Result<f64, RiskError> {
        measures::std_dev(self.returns.values())
    }

    /// Mean return scaled by periods per year.
    pub fn annualised_return(&self) -> f64 {
        self.mean() * self.config.periods()
    }

    /// Standard deviation scaled by √(periods per year).
    pub fn annualised_volatility(&self) -> Result<f64, RiskError> {
        measures::annualised_volatility(self.returns.values(), self.config.periods())
    }

    /// Full report at the configured confidence level.
    pub fn report(&self) -> Result<RiskReport, RiskError> {
        self.report_at(self.config.confidence_level)
    }

    /// Full report at tail probability `c`.
    ///
    /// The Sharpe ratio is `None` when the series has zero volatility.
    ///
    /// # Errors
    ///
    /// - `InvalidConfidenceLevel` unless 0 < c < 1
    /// - `InsufficientData` with fewer than two observations
    pub fn report_at(&self, c: f64) -> Result<RiskReport, RiskError> {
        let var = self.var_historical(c)?;
        let expected_shortfall = measures::expected_shortfall(&self.sorted, var)?;
        let annualised_volatility = self.annualised_volatility()?;
        let sharpe_ratio = match self.sharpe() {
            Ok(sharpe) => Some(sharpe),
            Err(RiskError::ZeroVolatility) => None,
            Err(err) => return Err(err),
        };

        let report = RiskReport {
            observations: self.len(),
            confidence_level: c,
            var,
            expected_shortfall,
            sharpe_ratio,
            max_drawdown: self.max_drawdown(),
            annualised_return: self.annualised_return(),
            annualised_volatility,
        };

        info!(
            observations = report.observations,
            var = report.var,
            expected_shortfall = report.expected_shortfall,
            max_drawdown = report.max_drawdown,
            "Risk report computed"
        );
        Ok(report)
    }
}
