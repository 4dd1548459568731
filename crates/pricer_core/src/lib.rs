//! # pricer_core: Foundation Types for Pricing and Risk Analytics
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the pricer workspace, providing:
//! - Time-indexed return and price series (`market_data`)
//! - Descriptive statistics over return samples (`math::statistics`)
//! - The umbrella `PricingError` type (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - chrono: Date index for series alignment
//! - thiserror: Error derivation
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::market_data::{PriceSeries, ReturnSeries};
//! use pricer_core::math::statistics::mean;
//!
//! let prices = PriceSeries::new(vec![100.0, 102.0, 99.96]).unwrap();
//! let returns = ReturnSeries::from_prices(&prices).unwrap();
//!
//! assert_eq!(returns.len(), 2);
//! assert!((returns.values()[0] - 0.02).abs() < 1e-12);
//! assert!((mean(returns.values()) - 0.0).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for series types

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod math;
pub mod types;
