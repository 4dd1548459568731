//! Shared error types.
//!
//! This module provides:
//! - `error`: The umbrella [`PricingError`] every crate-level error converts into

pub mod error;

pub use error::PricingError;
