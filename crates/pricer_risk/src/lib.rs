//! # Pricer Risk (L4: Application)
//!
//! Portfolio aggregation, historical risk metrics and batch option pricing.
//!
//! This crate provides:
//! - Multi-asset return panels and weighted portfolio series
//! - Correlation and diversification analytics
//! - Historical VaR, expected shortfall, Sharpe ratio and max drawdown
//! - Rolling-window variants of every metric
//! - Rayon-based batch pricing and Greeks
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L4)             │
//! ├─────────────────────────────────────────┤
//! │  portfolio/  - AssetReturns, weights,   │
//! │               aggregation, correlation  │
//! │  metrics/    - VaR, ES, Sharpe, DD,     │
//! │               rolling, reports          │
//! │  parallel/   - Rayon batch pricing      │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │  pricer_models (L2)  pricer_core (L1)   │
//! │  Black-Scholes       Series, statistics │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_core::market_data::PriceSeries;
//! use pricer_risk::metrics::{RiskConfig, RiskMetrics};
//! use pricer_risk::portfolio::{combine, AssetReturns, WeightVector};
//!
//! let panel = AssetReturns::from_prices([
//!     ("AAPL", PriceSeries::new(vec![190.0, 192.5, 189.0, 193.2, 195.0]).unwrap()),
//!     ("MSFT", PriceSeries::new(vec![410.0, 408.0, 415.5, 414.0, 420.1]).unwrap()),
//! ])
//! .unwrap();
//! let weights = WeightVector::from_pairs([("AAPL", 0.5), ("MSFT", 0.5)]).unwrap();
//!
//! let portfolio = combine(&panel, &weights).unwrap();
//! let metrics = RiskMetrics::new(&portfolio, RiskConfig::default()).unwrap();
//! let report = metrics.report().unwrap();
//!
//! assert_eq!(report.observations, 4);
//! assert!(report.max_drawdown <= 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod metrics;
pub mod parallel;
pub mod portfolio;

// Re-export commonly used types
pub use metrics::{RiskConfig, RiskError, RiskMetrics, RiskReport, RollingMetric};
pub use parallel::{greeks_batch, price_batch, ParallelConfig, DEFAULT_BATCH_SIZE};
pub use portfolio::{
    combine, correlation_matrix, diversification_ratio, AssetId, AssetReturns,
    CorrelationMatrix, PortfolioAggregator, PortfolioError, WeightVector,
};
