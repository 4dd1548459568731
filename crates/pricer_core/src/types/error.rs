//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Categorised errors surfaced by pricing and risk operations

use std::fmt;

/// Categorised pricing errors.
///
/// Provides structured error handling for pricing and risk operations with
/// descriptive context for each failure mode. Crate-specific errors
/// (`ContractError`, `RiskError`, `SimulationError`, ...) convert into this
/// type so callers can handle every layer through one enum.
///
/// # Variants
/// - `InvalidInput`: Invalid contract terms, series values or parameters
/// - `InsufficientData`: Not enough observations for the requested statistic
/// - `Alignment`: Asset keys or time indices do not line up
/// - `NumericalInstability`: Computation produced an undefined result
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    InvalidInput(String),

    /// Too few observations for the requested computation
    InsufficientData(String),

    /// Mismatched asset keys or time indices
    Alignment(String),

    /// Numerical instability during computation
    NumericalInstability(String),
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PricingError::InsufficientData(msg) => write!(f, "Insufficient data: {}", msg),
            PricingError::Alignment(msg) => write!(f, "Alignment error: {}", msg),
            PricingError::NumericalInstability(msg) => {
                write!(f, "Numerical instability: {}", msg)
            }
        }
    }
}

impl std::error::Error for PricingError {}
