//! Risk metric error types.

use pricer_core::market_data::MarketDataError;
use pricer_core::types::PricingError;
use thiserror::Error;

use crate::portfolio::PortfolioError;

/// Errors raised by the risk metrics engine.
///
/// # Examples
///
/// ```
/// use pricer_risk::metrics::RiskError;
///
/// let err = RiskError::InsufficientData { required: 2, available: 1 };
/// assert_eq!(err.to_string(), "Insufficient data: 2 observations required, 1 available");
/// ```
#[derive(Debug, Error, Clone, PartialEq)]
pub enum RiskError {
    /// Too few observations for the statistic or window.
    #[error("Insufficient data: {required} observations required, {available} available")]
    InsufficientData {
        /// Minimum number of observations
        required: usize,
        /// Observations supplied
        available: usize,
    },

    /// Tail probability outside the open interval (0, 1).
    #[error("Invalid confidence level {0}: must be in (0, 1)")]
    InvalidConfidenceLevel(f64),

    /// Rolling window of zero observations.
    #[error("Invalid rolling window {0}: must be at least 1")]
    InvalidWindow(usize),

    /// Sharpe ratio undefined for a series with no dispersion.
    #[error("Zero volatility: Sharpe ratio undefined")]
    ZeroVolatility,

    /// Annualisation factor of zero.
    #[error("Invalid periods per year {0}: must be at least 1")]
    InvalidPeriodsPerYear(u32),

    /// Non-finite risk-free rate.
    #[error("Invalid risk-free rate {0}: must be finite")]
    InvalidRiskFreeRate(f64),

    /// Portfolio assembly failed.
    #[error(transparent)]
    Portfolio(#[from] PortfolioError),

    /// Series construction failed.
    #[error(transparent)]
    MarketData(#[from] MarketDataError),
}

impl From<RiskError> for PricingError {
    fn from(err: RiskError) -> Self {
        match err {
            RiskError::Portfolio(inner) => inner.into(),
            RiskError::MarketData(inner) => inner.into(),
            RiskError::InsufficientData { .. } => PricingError::InsufficientData(err.to_string()),
            RiskError::ZeroVolatility => PricingError::NumericalInstability(err.to_string()),
            _ => PricingError::InvalidInput(err.to_string()),
        }
    }
}
