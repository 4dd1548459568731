//! Portfolio weights.

use std::collections::BTreeMap;

use super::error::PortfolioError;
use super::ids::AssetId;

/// Finite weights keyed by asset.
///
/// Weights may be negative (short positions) and need not sum to one;
/// [`WeightVector::is_fully_invested`] reports whether they do.
///
/// # Examples
///
/// ```
/// use pricer_risk::portfolio::WeightVector;
///
/// let weights = WeightVector::from_pairs([("AAPL", 0.6), ("MSFT", 0.4)]).unwrap();
/// assert!((weights.total() - 1.0).abs() < 1e-12);
/// assert!(weights.is_fully_invested(1e-9));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct WeightVector {
    weights: BTreeMap<AssetId, f64>,
}

impl WeightVector {
    /// Creates an empty weight vector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a weight vector from (asset, weight) pairs.
    ///
    /// # Errors
    ///
    /// As [`WeightVector::insert`].
    pub fn from_pairs<I, K>(pairs: I) -> Result<Self, PortfolioError>
    where
        I: IntoIterator<Item = (K, f64)>,
        K: Into<AssetId>,
    {
        let mut weights = Self::new();
        for (id, weight) in pairs {
            weights.insert(id, weight)?;
        }
        Ok(weights)
    }

    /// Equal weights of `1 / n` over the given assets.
    pub fn equal<'a>(ids: impl IntoIterator<Item = &'a AssetId>) -> Self {
        let ids: Vec<&AssetId> = ids.into_iter().collect();
        let w = 1.0 / ids.len().max(1) as f64;
        Self {
            weights: ids.into_iter().map(|id| (id.clone(), w)).collect(),
        }
    }

    /// Sets the weight of one asset.
    ///
    /// # Errors
    ///
    /// - `PortfolioError::InvalidWeight` for NaN or infinite weights
    /// - `PortfolioError::DuplicateAsset` if the asset already has a weight
    pub fn insert(&mut self, id: impl Into<AssetId>, weight: f64) -> Result<(), PortfolioError> {
        let id = id.into();
        if !weight.is_finite() {
            return Err(PortfolioError::InvalidWeight {
                asset: id.to_string(),
                weight,
            });
        }
        if self.weights.contains_key(&id) {
            return Err(PortfolioError::DuplicateAsset(id.to_string()));
        }
        self.weights.insert(id, weight);
        Ok(())
    }

    /// Weight of `id`, if present.
    #[inline]
    pub fn get(&self, id: &AssetId) -> Option<f64> {
        self.weights.get(id).copied()
    }

    /// Returns true if `id` has a weight.
    #[inline]
    pub fn contains(&self, id: &AssetId) -> bool {
        self.weights.contains_key(id)
    }

    /// Number of weights.
    #[inline]
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Returns true if no weights are set.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    /// (asset, weight) pairs in asset order.
    pub fn iter(&self) -> impl Iterator<Item = (&AssetId, f64)> {
        self.weights.iter().map(|(id, &w)| (id, w))
    }

    /// Sum of all weights.
    pub fn total(&self) -> f64 {
        self.weights.values().sum()
    }

    /// Returns true if the weights sum to one within `tolerance`.
    pub fn is_fully_invested(&self, tolerance: f64) -> bool {
        (self.total() - 1.0).abs() <= tolerance
    }
}
