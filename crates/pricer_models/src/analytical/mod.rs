//! Analytical pricing formulas for European options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Black-Scholes model for lognormal dynamics
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Supports both `f64` and `f32`
//! - **Total on the valid domain**: T = 0 and σ = 0 have explicit branches,
//!   so every validated contract yields finite outputs
//! - **Exact symmetry**: Φ(x) + Φ(-x) = 1, keeping put-call parity tight

pub mod black_scholes;
pub mod distributions;

pub use black_scholes::{greeks, price, BlackScholes, Greeks};
pub use distributions::{norm_cdf, norm_pdf};
