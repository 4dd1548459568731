//! Multi-asset portfolio construction and aggregation.
//!
//! - [`AssetId`]: asset key
//! - [`AssetReturns`]: return panel keyed by asset
//! - [`WeightVector`]: per-asset weights
//! - [`PortfolioAggregator`] / [`combine`]: weighted portfolio return series
//! - [`correlation_matrix`] and [`diversification_ratio`]

mod aggregator;
mod diversification;
mod error;
mod ids;
mod returns;
mod weights;

pub use aggregator::{combine, PortfolioAggregator, DEFAULT_WEIGHT_TOLERANCE};
pub use diversification::{correlation_matrix, diversification_ratio, CorrelationMatrix};
pub use error::PortfolioError;
pub use ids::AssetId;
pub use returns::AssetReturns;
pub use weights::WeightVector;
