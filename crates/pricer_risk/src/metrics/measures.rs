//! Slice-level risk kernels shared by the full-series engine and the
//! rolling-window variants.
//!
//! Inputs are validated by the callers: slices are non-empty, confidence
//! levels lie in (0, 1) and `periods` is at least one.

use pricer_core::math::statistics::{mean, quantile_sorted, sample_std_dev};

use super::error::RiskError;

/// Standard deviations at or below this are treated as zero.
pub(crate) const MIN_VOLATILITY: f64 = 1e-14;

/// Empirical quantile at tail probability `c` of an ascending sample.
pub(crate) fn historical_var(sorted: &[f64], c: f64) -> Result<f64, RiskError> {
    quantile_sorted(sorted, c).ok_or(RiskError::InsufficientData {
        required: 1,
        available: sorted.len(),
    })
}

/// Mean of the returns at or below `var`, never above `var`.
///
/// Falls back to the worst observation when no return qualifies.
pub(crate) fn expected_shortfall(sorted: &[f64], var: f64) -> Result<f64, RiskError> {
    let worst = *sorted.first().ok_or(RiskError::InsufficientData {
        required: 1,
        available: 0,
    })?;
    let tail_len = sorted.partition_point(|&r| r <= var);
    if tail_len == 0 {
        return Ok(worst);
    }
    Ok(mean(&sorted[..tail_len]).min(var))
}

/// Sample standard deviation, requiring two observations.
pub(crate) fn std_dev(values: &[f64]) -> Result<f64, RiskError> {
    sample_std_dev(values).ok_or(RiskError::InsufficientData {
        required: 2,
        available: values.len(),
    })
}

/// `(mean·P − rf) / (std·√P)`.
pub(crate) fn sharpe(values: &[f64], periods: f64, risk_free_rate: f64) -> Result<f64, RiskError> {
    let sd = std_dev(values)?;
    if sd <= MIN_VOLATILITY {
        return Err(RiskError::ZeroVolatility);
    }
    Ok((mean(values) * periods - risk_free_rate) / (sd * periods.sqrt()))
}

/// `std·√P`.
pub(crate) fn annualised_volatility(values: &[f64], periods: f64) -> Result<f64, RiskError> {
    Ok(std_dev(values)? * periods.sqrt())
}

/// Deepest fall of the compounded growth index below its running peak.
///
/// The index starts at 1.0 before the first return, so an opening loss
/// counts as a drawdown.
pub(crate) fn max_drawdown(values: &[f64]) -> f64 {
    let mut value = 1.0;
    let mut peak = 1.0;
    let mut worst: f64 = 0.0;
    for r in values {
        value *= 1.0 + r;
        if value > peak {
            peak = value;
        }
        worst = worst.min(value / peak - 1.0);
    }
    worst
}
