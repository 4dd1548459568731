//! Correlation and diversification analytics over a return panel.

use pricer_core::math::statistics::{correlation, population_variance, sample_variance};

use super::aggregator::combine;
use super::error::PortfolioError;
use super::ids::AssetId;
use super::returns::AssetReturns;
use super::weights::WeightVector;

/// Symmetric Pearson correlation matrix with asset labels.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::ReturnSeries;
/// use pricer_risk::portfolio::{correlation_matrix, AssetId, AssetReturns};
///
/// let mut panel = AssetReturns::new();
/// panel.insert("A", ReturnSeries::new(vec![0.01, 0.02, 0.03]).unwrap()).unwrap();
/// panel.insert("B", ReturnSeries::new(vec![0.03, 0.02, 0.01]).unwrap()).unwrap();
///
/// let corr = correlation_matrix(&panel).unwrap();
/// let rho = corr.get(&AssetId::new("A"), &AssetId::new("B")).unwrap();
/// assert!((rho + 1.0).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CorrelationMatrix {
    labels: Vec<AssetId>,
    values: Vec<f64>,
}

impl CorrelationMatrix {
    /// Asset labels in row order.
    #[inline]
    pub fn labels(&self) -> &[AssetId] {
        &self.labels
    }

    /// Number of assets.
    #[inline]
    pub fn size(&self) -> usize {
        self.labels.len()
    }

    /// Correlation between two assets, if both are present.
    pub fn get(&self, a: &AssetId, b: &AssetId) -> Option<f64> {
        let i = self.labels.iter().position(|id| id == a)?;
        let j = self.labels.iter().position(|id| id == b)?;
        Some(self.values[i * self.size() + j])
    }

    /// Row `i` of the matrix.
    pub fn row(&self, i: usize) -> Option<&[f64]> {
        let n = self.size();
        (i < n).then(|| &self.values[i * n..(i + 1) * n])
    }
}

/// Pearson correlation of every asset pair (sample statistics).
///
/// # Errors
///
/// - `EmptyPortfolio` / `Misaligned` from [`AssetReturns::check_aligned`]
/// - `ZeroVariance` if a series is constant or has a single observation
pub fn correlation_matrix(returns: &AssetReturns) -> Result<CorrelationMatrix, PortfolioError> {
    returns.check_aligned()?;

    let labels: Vec<AssetId> = returns.asset_ids().cloned().collect();
    let series: Vec<&[f64]> = returns.iter().map(|(_, s)| s.values()).collect();
    let n = labels.len();

    for (id, values) in labels.iter().zip(&series) {
        if !sample_variance(values).is_some_and(|v| v > 0.0) {
            return Err(PortfolioError::ZeroVariance(format!(
                "{} is constant or has a single observation",
                id
            )));
        }
    }

    let mut values = vec![0.0; n * n];

    for i in 0..n {
        values[i * n + i] = 1.0;
        for j in (i + 1)..n {
            let rho = correlation(series[i], series[j]).ok_or_else(|| {
                PortfolioError::ZeroVariance(format!(
                    "correlation of {} and {} undefined",
                    labels[i], labels[j]
                ))
            })?;
            values[i * n + j] = rho;
            values[j * n + i] = rho;
        }
    }

    Ok(CorrelationMatrix { labels, values })
}

/// Diversification ratio `1 − Var(portfolio) / Σ w_a²·Var(a)`.
///
/// Variances are population variances. Zero means no diversification
/// benefit; values near one mean the weighted stand-alone risks largely
/// cancel.
///
/// # Errors
///
/// Any error from [`combine`], or `ZeroVariance` when every weighted
/// stand-alone variance is zero.
pub fn diversification_ratio(
    returns: &AssetReturns,
    weights: &WeightVector,
) -> Result<f64, PortfolioError> {
    let portfolio = combine(returns, weights)?;
    let portfolio_var = population_variance(portfolio.values()).unwrap_or(0.0);

    let weighted_var: f64 = returns
        .iter()
        .map(|(id, series)| {
            let w = weights.get(id).unwrap_or(0.0);
            w * w * population_variance(series.values()).unwrap_or(0.0)
        })
        .sum();

    if weighted_var <= 0.0 {
        return Err(PortfolioError::ZeroVariance(
            "weighted stand-alone variance is zero".to_string(),
        ));
    }
    Ok(1.0 - portfolio_var / weighted_var)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::market_data::ReturnSeries;

    fn panel(entries: &[(&str, &[f64])]) -> AssetReturns {
        let mut panel = AssetReturns::new();
        for (id, values) in entries {
            panel
                .insert(*id, ReturnSeries::new(values.to_vec()).unwrap())
                .unwrap();
        }
        panel
    }

    #[test]
    fn test_correlation_matrix_symmetric() {
        let returns = panel(&[
            ("A", &[0.01, -0.02, 0.03, 0.00]),
            ("B", &[0.02, -0.01, 0.01, 0.01]),
            ("C", &[-0.01, 0.02, -0.02, 0.00]),
        ]);
        let corr = correlation_matrix(&returns).unwrap();
        assert_eq!(corr.size(), 3);
        for i in 0..3 {
            let row = corr.row(i).unwrap();
            assert_eq!(row[i], 1.0);
            for j in 0..3 {
                assert_eq!(row[j], corr.row(j).unwrap()[i]);
                assert!(row[j].abs() <= 1.0 + 1e-12);
            }
        }
        assert!(corr.row(3).is_none());
        assert!(corr.get(&AssetId::new("A"), &AssetId::new("Z")).is_none());
    }

    #[test]
    fn test_constant_series_rejected() {
        let returns = panel(&[("A", &[0.25, 0.25, 0.25]), ("B", &[0.01, 0.02, 0.03])]);
        assert!(matches!(
            correlation_matrix(&returns),
            Err(PortfolioError::ZeroVariance(_))
        ));
    }

    #[test]
    fn test_single_degenerate_asset_rejected() {
        let constant = panel(&[("A", &[0.25, 0.25, 0.25])]);
        assert!(matches!(
            correlation_matrix(&constant),
            Err(PortfolioError::ZeroVariance(_))
        ));

        let single = panel(&[("A", &[0.01])]);
        assert!(matches!(
            correlation_matrix(&single),
            Err(PortfolioError::ZeroVariance(_))
        ));
    }

    #[test]
    fn test_single_asset_matrix() {
        let returns = panel(&[("A", &[0.01, 0.02])]);
        let corr = correlation_matrix(&returns).unwrap();
        assert_eq!(corr.row(0).unwrap(), &[1.0]);
    }

    #[test]
    fn test_diversification_perfectly_correlated() {
        // Identical assets: Var(p) = (Σw)² Var, weighted = Σw² Var
        let values = [0.01, -0.02, 0.015, 0.005];
        let returns = panel(&[("A", &values), ("B", &values)]);
        let weights = WeightVector::from_pairs([("A", 0.5), ("B", 0.5)]).unwrap();
        let ratio = diversification_ratio(&returns, &weights).unwrap();
        assert_relative_eq!(ratio, 1.0 - 1.0 / 0.5, epsilon = 1e-12);
    }

    #[test]
    fn test_diversification_perfect_hedge() {
        let returns = panel(&[("A", &[0.01, -0.01, 0.02]), ("B", &[-0.01, 0.01, -0.02])]);
        let weights = WeightVector::from_pairs([("A", 0.5), ("B", 0.5)]).unwrap();
        let ratio = diversification_ratio(&returns, &weights).unwrap();
        assert_relative_eq!(ratio, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_diversification_zero_variance() {
        let returns = panel(&[("A", &[0.25, 0.25])]);
        let weights = WeightVector::from_pairs([("A", 1.0)]).unwrap();
        assert!(matches!(
            diversification_ratio(&returns, &weights),
            Err(PortfolioError::ZeroVariance(_))
        ));
    }
}
