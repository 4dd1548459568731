//! Portfolio error types.
//!
//! Weight and alignment problems are detected before any arithmetic, so a
//! failed aggregation never yields a partially combined series.

use pricer_core::market_data::MarketDataError;
use pricer_core::types::PricingError;
use thiserror::Error;

/// Errors that can occur while assembling or combining a portfolio.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum PortfolioError {
    /// An asset in the return panel has no weight.
    #[error("Missing weight for asset: {0}")]
    MissingWeight(String),

    /// A weight refers to an asset absent from the return panel.
    #[error("Weight supplied for unknown asset: {0}")]
    UnknownAsset(String),

    /// Return series do not share length or date index.
    #[error("Misaligned returns for asset {asset}: {reason}")]
    Misaligned {
        /// Asset whose series differs from the reference
        asset: String,
        /// What differs
        reason: String,
    },

    /// Weight is NaN or infinite.
    #[error("Invalid weight for asset {asset}: {weight}")]
    InvalidWeight {
        /// Asset the weight belongs to
        asset: String,
        /// The offending weight
        weight: f64,
    },

    /// Asset inserted twice.
    #[error("Duplicate asset ID: {0}")]
    DuplicateAsset(String),

    /// Statistic undefined because a series has zero variance.
    #[error("Zero variance in returns: {0}")]
    ZeroVariance(String),

    /// Empty portfolio (no assets).
    #[error("Portfolio is empty")]
    EmptyPortfolio,

    /// Series construction failed.
    #[error(transparent)]
    MarketData(#[from] MarketDataError),
}

impl From<PortfolioError> for PricingError {
    fn from(err: PortfolioError) -> Self {
        match err {
            PortfolioError::MarketData(inner) => inner.into(),
            PortfolioError::InvalidWeight { .. } => PricingError::InvalidInput(err.to_string()),
            PortfolioError::ZeroVariance(_) => PricingError::NumericalInstability(err.to_string()),
            PortfolioError::EmptyPortfolio => PricingError::InsufficientData(err.to_string()),
            _ => PricingError::Alignment(err.to_string()),
        }
    }
}
