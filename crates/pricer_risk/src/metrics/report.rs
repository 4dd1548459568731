//! Point-in-time risk report.

/// Headline risk statistics of one return series, computed together.
///
/// VaR, expected shortfall and max drawdown follow the return-space sign
/// convention (losses negative).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RiskReport {
    /// Number of return observations
    pub observations: usize,
    /// Tail probability used for VaR and ES
    pub confidence_level: f64,
    /// Historical value at risk
    pub var: f64,
    /// Expected shortfall
    pub expected_shortfall: f64,
    /// Annualised Sharpe ratio; `None` for a zero-volatility series
    pub sharpe_ratio: Option<f64>,
    /// Maximum drawdown
    pub max_drawdown: f64,
    /// Mean return × periods per year
    pub annualised_return: f64,
    /// Standard deviation × √(periods per year)
    pub annualised_volatility: f64,
}
