//! Historical risk metrics on a portfolio return series.
//!
//! - [`RiskMetrics`]: VaR, expected shortfall, Sharpe ratio, max drawdown,
//!   annualised moments and rolling variants
//! - [`RiskConfig`]: annualisation and tail parameters
//! - [`RiskReport`]: all headline statistics at once
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::ReturnSeries;
//! use pricer_risk::metrics::{RiskConfig, RiskMetrics};
//!
//! let returns = ReturnSeries::new(vec![0.012, -0.008, 0.004, -0.015, 0.009, 0.002]).unwrap();
//! let metrics = RiskMetrics::new(&returns, RiskConfig::default()).unwrap();
//! let report = metrics.report().unwrap();
//!
//! assert_eq!(report.observations, 6);
//! assert!(report.expected_shortfall <= report.var);
//! ```

mod config;
mod engine;
mod error;
mod measures;
mod report;
mod rolling;

pub use config::{RiskConfig, DEFAULT_CONFIDENCE_LEVEL, DEFAULT_PERIODS_PER_YEAR};
pub use engine::RiskMetrics;
pub use error::RiskError;
pub use report::RiskReport;
pub use rolling::{RollingMetric, PARALLEL_ROLLING_THRESHOLD};
