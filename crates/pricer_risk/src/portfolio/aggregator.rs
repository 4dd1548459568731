//! Weighted combination of asset returns into one portfolio series.
//!
//! The combined return at index t is `Σ_a w_a · r_a[t]`. All key and
//! alignment checks run before the first multiplication.

use pricer_core::market_data::ReturnSeries;
use tracing::{debug, warn};

use super::error::PortfolioError;
use super::returns::AssetReturns;
use super::weights::WeightVector;

/// Default tolerance for the fully-invested check.
pub const DEFAULT_WEIGHT_TOLERANCE: f64 = 1e-6;

/// Combines a return panel with a weight vector.
///
/// Weights that do not sum to one are accepted (leveraged or partially
/// invested portfolios) but logged at `warn` level.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::ReturnSeries;
/// use pricer_risk::portfolio::{AssetReturns, PortfolioAggregator, WeightVector};
///
/// let mut panel = AssetReturns::new();
/// panel.insert("A", ReturnSeries::new(vec![0.01, 0.02]).unwrap()).unwrap();
/// panel.insert("B", ReturnSeries::new(vec![0.03, -0.02]).unwrap()).unwrap();
/// let weights = WeightVector::from_pairs([("A", 0.5), ("B", 0.5)]).unwrap();
///
/// let combined = PortfolioAggregator::default().combine(&panel, &weights).unwrap();
/// assert!((combined.values()[0] - 0.02).abs() < 1e-12);
/// assert!(combined.values()[1].abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PortfolioAggregator {
    weight_tolerance: f64,
}

impl Default for PortfolioAggregator {
    fn default() -> Self {
        Self {
            weight_tolerance: DEFAULT_WEIGHT_TOLERANCE,
        }
    }
}

impl PortfolioAggregator {
    /// Creates an aggregator with a custom fully-invested tolerance.
    pub fn with_weight_tolerance(weight_tolerance: f64) -> Self {
        Self {
            weight_tolerance: weight_tolerance.abs(),
        }
    }

    /// Returns the fully-invested tolerance.
    #[inline]
    pub fn weight_tolerance(&self) -> f64 {
        self.weight_tolerance
    }

    /// Combines per-asset returns into the weighted portfolio series.
    ///
    /// The result carries the shared date index of the inputs.
    ///
    /// # Errors
    ///
    /// - `EmptyPortfolio` if the panel has no assets
    /// - `MissingWeight` for an asset without a weight
    /// - `UnknownAsset` for a weight without an asset
    /// - `Misaligned` if the series differ in length or date index
    pub fn combine(
        &self,
        returns: &AssetReturns,
        weights: &WeightVector,
    ) -> Result<ReturnSeries, PortfolioError> {
        if returns.is_empty() {
            return Err(PortfolioError::EmptyPortfolio);
        }
        if let Some(id) = returns.asset_ids().find(|id| !weights.contains(id)) {
            return Err(PortfolioError::MissingWeight(id.to_string()));
        }
        if let Some((id, _)) = weights.iter().find(|(id, _)| !returns.contains(id)) {
            return Err(PortfolioError::UnknownAsset(id.to_string()));
        }
        let reference = returns.check_aligned()?;

        if !weights.is_fully_invested(self.weight_tolerance) {
            warn!(
                total = weights.total(),
                "Portfolio weights do not sum to one"
            );
        }

        let mut combined = vec![0.0; reference.len()];
        for (id, series) in returns.iter() {
            let w = weights.get(id).unwrap_or(0.0);
            for (acc, r) in combined.iter_mut().zip(series.values()) {
                *acc += w * r;
            }
        }

        debug!(
            assets = returns.len(),
            observations = combined.len(),
            "Combined portfolio returns"
        );

        let series = match reference.dates() {
            Some(dates) => ReturnSeries::with_dates(dates.to_vec(), combined)?,
            None => ReturnSeries::new(combined)?,
        };
        Ok(series)
    }
}

/// Combines with the default aggregator. See [`PortfolioAggregator::combine`].
pub fn combine(
    returns: &AssetReturns,
    weights: &WeightVector,
) -> Result<ReturnSeries, PortfolioError> {
    PortfolioAggregator::default().combine(returns, weights)
}
