//! Multi-asset return panel.

use std::collections::btree_map::{self, BTreeMap};

use pricer_core::market_data::{PriceSeries, ReturnSeries};

use super::error::PortfolioError;
use super::ids::AssetId;

/// Return series keyed by asset, iterated in asset order.
///
/// Alignment is not enforced on insertion; it is checked by the operations
/// that need it (see [`AssetReturns::check_aligned`]).
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::ReturnSeries;
/// use pricer_risk::portfolio::{AssetId, AssetReturns};
///
/// let mut panel = AssetReturns::new();
/// panel.insert("AAPL", ReturnSeries::new(vec![0.01, -0.02]).unwrap()).unwrap();
/// panel.insert("MSFT", ReturnSeries::new(vec![0.00, 0.015]).unwrap()).unwrap();
///
/// assert_eq!(panel.len(), 2);
/// assert!(panel.get(&AssetId::new("AAPL")).is_some());
/// assert!(panel.check_aligned().is_ok());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct AssetReturns {
    series: BTreeMap<AssetId, ReturnSeries>,
}

impl AssetReturns {
    /// Creates an empty panel.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a panel from closing prices, deriving simple returns per asset.
    ///
    /// # Errors
    ///
    /// - `PortfolioError::MarketData` if any price series is too short
    /// - `PortfolioError::DuplicateAsset` if an asset appears twice
    pub fn from_prices<I, K>(prices: I) -> Result<Self, PortfolioError>
    where
        I: IntoIterator<Item = (K, PriceSeries)>,
        K: Into<AssetId>,
    {
        let mut panel = Self::new();
        for (id, series) in prices {
            panel.insert(id, ReturnSeries::from_prices(&series)?)?;
        }
        Ok(panel)
    }

    /// Adds a return series.
    ///
    /// # Errors
    ///
    /// `PortfolioError::DuplicateAsset` if the asset is already present.
    pub fn insert(
        &mut self,
        id: impl Into<AssetId>,
        returns: ReturnSeries,
    ) -> Result<(), PortfolioError> {
        match self.series.entry(id.into()) {
            btree_map::Entry::Occupied(entry) => {
                Err(PortfolioError::DuplicateAsset(entry.key().to_string()))
            }
            btree_map::Entry::Vacant(entry) => {
                entry.insert(returns);
                Ok(())
            }
        }
    }

    /// Returns the series for `id`.
    #[inline]
    pub fn get(&self, id: &AssetId) -> Option<&ReturnSeries> {
        self.series.get(id)
    }

    /// Returns true if `id` is in the panel.
    #[inline]
    pub fn contains(&self, id: &AssetId) -> bool {
        self.series.contains_key(id)
    }

    /// Number of assets.
    #[inline]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    /// Returns true if the panel has no assets.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Asset IDs in order.
    pub fn asset_ids(&self) -> impl Iterator<Item = &AssetId> {
        self.series.keys()
    }

    /// (asset, series) pairs in asset order.
    pub fn iter(&self) -> impl Iterator<Item = (&AssetId, &ReturnSeries)> {
        self.series.iter()
    }

    /// Verifies that every series shares the length and date index of the
    /// first asset, returning that reference series.
    ///
    /// # Errors
    ///
    /// - `PortfolioError::EmptyPortfolio` for an empty panel
    /// - `PortfolioError::Misaligned` naming the first deviating asset
    pub fn check_aligned(&self) -> Result<&ReturnSeries, PortfolioError> {
        let mut iter = self.series.iter();
        let (_, reference) = iter.next().ok_or(PortfolioError::EmptyPortfolio)?;

        for (id, series) in iter {
            if series.len() != reference.len() {
                return Err(PortfolioError::Misaligned {
                    asset: id.to_string(),
                    reason: format!(
                        "expected {} observations, got {}",
                        reference.len(),
                        series.len()
                    ),
                });
            }
            if !series.is_aligned_with(reference) {
                return Err(PortfolioError::Misaligned {
                    asset: id.to_string(),
                    reason: "date index differs".to_string(),
                });
            }
        }
        Ok(reference)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn returns(values: &[f64]) -> ReturnSeries {
        ReturnSeries::new(values.to_vec()).unwrap()
    }

    fn dated(start_day: u32, values: &[f64]) -> ReturnSeries {
        let dates = (0..values.len() as u32)
            .map(|i| NaiveDate::from_ymd_opt(2024, 1, start_day + i).unwrap())
            .collect();
        ReturnSeries::with_dates(dates, values.to_vec()).unwrap()
    }

    #[test]
    fn test_duplicate_rejected() {
        let mut panel = AssetReturns::new();
        panel.insert("A", returns(&[0.01])).unwrap();
        assert_eq!(
            panel.insert("A", returns(&[0.02])),
            Err(PortfolioError::DuplicateAsset("A".to_string()))
        );
    }

    #[test]
    fn test_iteration_in_asset_order() {
        let mut panel = AssetReturns::new();
        panel.insert("MSFT", returns(&[0.01])).unwrap();
        panel.insert("AAPL", returns(&[0.02])).unwrap();
        let ids: Vec<&str> = panel.asset_ids().map(AssetId::as_str).collect();
        assert_eq!(ids, vec!["AAPL", "MSFT"]);
    }

    #[test]
    fn test_empty_panel_not_aligned() {
        assert_eq!(
            AssetReturns::new().check_aligned(),
            Err(PortfolioError::EmptyPortfolio)
        );
    }

    #[test]
    fn test_length_mismatch() {
        let mut panel = AssetReturns::new();
        panel.insert("A", returns(&[0.01, 0.02])).unwrap();
        panel.insert("B", returns(&[0.01])).unwrap();
        assert!(matches!(
            panel.check_aligned(),
            Err(PortfolioError::Misaligned { asset, .. }) if asset == "B"
        ));
    }

    #[test]
    fn test_date_mismatch() {
        let mut panel = AssetReturns::new();
        panel.insert("A", dated(1, &[0.01, 0.02])).unwrap();
        panel.insert("B", dated(2, &[0.01, 0.02])).unwrap();
        assert!(matches!(
            panel.check_aligned(),
            Err(PortfolioError::Misaligned { reason, .. }) if reason.contains("date")
        ));
    }

    #[test]
    fn test_from_prices() {
        let panel = AssetReturns::from_prices([
            ("A", PriceSeries::new(vec![100.0, 110.0]).unwrap()),
            ("B", PriceSeries::new(vec![50.0, 45.0]).unwrap()),
        ])
        .unwrap();
        let b = panel.get(&AssetId::new("B")).unwrap();
        assert!((b.values()[0] + 0.1).abs() < 1e-12);

        let short = AssetReturns::from_prices([("A", PriceSeries::new(vec![100.0]).unwrap())]);
        assert!(matches!(short, Err(PortfolioError::MarketData(_))));
    }
}
