//! # pricer_models: European Option Contracts and Analytical Pricing
//!
//! ## Layer 2 (Models) Role
//!
//! - [`instruments`]: Validated [`OptionContract`](instruments::OptionContract) terms,
//!   [`OptionType`](instruments::OptionType) and moneyness
//! - [`analytical`]: Closed-form Black-Scholes-Merton price and Greeks
//! - [`strategies`]: Multi-leg option positions (spreads, condors)
//!
//! ## Example
//!
//! ```
//! use pricer_models::analytical::{greeks, price};
//! use pricer_models::instruments::{OptionContract, OptionType};
//!
//! let call = OptionContract::new(150.0, 155.0, 0.25, 0.05, 0.25, OptionType::Call).unwrap();
//! let put = call.with_option_type(OptionType::Put);
//!
//! // Put-call parity: C - P = S - K*exp(-rT)
//! let forward = 150.0 - 155.0 * (-0.05_f64 * 0.25).exp();
//! assert!((price(&call) - price(&put) - forward).abs() < 1e-6);
//!
//! let g = greeks(&call);
//! assert!(g.delta > 0.4 && g.delta < 0.5);
//! ```

#![warn(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod strategies;
