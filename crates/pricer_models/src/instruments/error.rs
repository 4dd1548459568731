//! Contract error types.
//!
//! This module provides structured error handling for option contract
//! construction. Out-of-domain terms are surfaced immediately and never
//! clamped.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Option contract validation errors.
///
/// # Variants
/// - `InvalidSpot`: Spot price non-positive or non-finite
/// - `InvalidStrike`: Strike price non-positive or non-finite
/// - `InvalidExpiry`: Time to expiry negative or non-finite
/// - `InvalidRate`: Risk-free rate non-finite
/// - `InvalidVolatility`: Volatility negative or non-finite
/// - `UnknownOptionType`: Variant tag other than call/put
/// - `InvalidStrategy`: Strategy legs violate the strike ordering
///
/// # Examples
/// ```
/// use pricer_models::instruments::ContractError;
///
/// let err = ContractError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContractError {
    /// Invalid spot price.
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot value
        spot: f64,
    },

    /// Invalid strike price.
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid time to expiry.
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Invalid risk-free rate.
    #[error("Invalid rate: r = {rate}")]
    InvalidRate {
        /// The invalid rate value
        rate: f64,
    },

    /// Invalid volatility.
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Unrecognised option type tag.
    #[error("Unknown option type: {tag}")]
    UnknownOptionType {
        /// The rejected tag
        tag: String,
    },

    /// Invalid strategy construction.
    #[error("Invalid strategy: {message}")]
    InvalidStrategy {
        /// Description of the violated constraint
        message: String,
    },
}

impl From<ContractError> for PricingError {
    fn from(err: ContractError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_spot_display() {
        let err = ContractError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
    }

    #[test]
    fn test_invalid_volatility_display() {
        let err = ContractError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_unknown_option_type_display() {
        let err = ContractError::UnknownOptionType {
            tag: "straddle".to_string(),
        };
        assert_eq!(format!("{}", err), "Unknown option type: straddle");
    }

    #[test]
    fn test_into_pricing_error() {
        let err = ContractError::InvalidExpiry { expiry: -1.0 };
        let pricing_err: PricingError = err.into();
        match pricing_err {
            PricingError::InvalidInput(msg) => assert!(msg.contains("-1")),
            _ => panic!("Expected InvalidInput variant"),
        }
    }

    #[test]
    fn test_clone_and_equality() {
        let err1 = ContractError::InvalidRate { rate: f64::INFINITY };
        let err2 = err1.clone();
        assert_eq!(err1, err2);
    }
}
