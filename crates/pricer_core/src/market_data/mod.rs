//! Market data structures for risk analytics.
//!
//! This module provides the time-indexed series the risk and simulation
//! layers consume. Historical prices arrive from an external collaborator;
//! everything here is pure construction and validation.
//!
//! # Components
//!
//! - [`series`]: [`PriceSeries`] and [`ReturnSeries`]
//! - [`error`]: Market data error types ([`MarketDataError`])
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use pricer_core::market_data::{PriceSeries, ReturnSeries};
//!
//! let dates = vec![
//!     NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 1, 3).unwrap(),
//!     NaiveDate::from_ymd_opt(2024, 1, 4).unwrap(),
//! ];
//! let prices = PriceSeries::with_dates(dates, vec![100.0, 101.0, 100.0]).unwrap();
//! let returns = ReturnSeries::from_prices(&prices).unwrap();
//!
//! // Returns are indexed by the later date of each price pair
//! assert_eq!(returns.len(), 2);
//! assert_eq!(returns.dates().unwrap()[0], NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
//! ```

pub mod error;
pub mod series;

pub use error::MarketDataError;
pub use series::{PriceSeries, ReturnSeries};
