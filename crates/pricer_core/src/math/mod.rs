//! Numerical helpers shared by the risk and simulation layers.
//!
//! - [`statistics`]: Sample moments, empirical quantiles and correlation

pub mod statistics;
