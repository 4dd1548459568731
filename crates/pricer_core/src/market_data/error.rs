//! Market data error types.
//!
//! This module provides structured error handling for building price and
//! return series from collaborator-supplied observations.

use crate::types::PricingError;
use thiserror::Error;

/// Market data construction errors.
///
/// # Variants
///
/// - `EmptySeries`: No observations supplied
/// - `NonFiniteValue`: NaN or infinite observation
/// - `NonPositivePrice`: Price at or below zero
/// - `IndexLengthMismatch`: Date index and values differ in length
/// - `UnorderedIndex`: Date index not strictly increasing
/// - `InsufficientData`: Not enough data points for construction
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::MarketDataError;
///
/// let err = MarketDataError::NonPositivePrice { index: 3, price: -1.0 };
/// assert!(format!("{}", err).contains("-1"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MarketDataError {
    /// Series has no observations.
    #[error("Empty series")]
    EmptySeries,

    /// Observation is NaN or infinite.
    #[error("Non-finite value at index {index}: {value}")]
    NonFiniteValue {
        /// Position of the offending observation
        index: usize,
        /// The offending value
        value: f64,
    },

    /// Price is zero or negative.
    #[error("Non-positive price at index {index}: {price}")]
    NonPositivePrice {
        /// Position of the offending price
        index: usize,
        /// The offending price
        price: f64,
    },

    /// Date index and value vector differ in length.
    #[error("Index length mismatch: {dates} dates for {values} values")]
    IndexLengthMismatch {
        /// Number of dates supplied
        dates: usize,
        /// Number of values supplied
        values: usize,
    },

    /// Date index is not strictly increasing.
    #[error("Date index not strictly increasing at position {position}")]
    UnorderedIndex {
        /// First position whose date does not exceed its predecessor
        position: usize,
    },

    /// Insufficient data for construction.
    #[error("Insufficient data: got {got}, need {need}")]
    InsufficientData {
        /// Number of points provided
        got: usize,
        /// Minimum number of points required
        need: usize,
    },
}

impl From<MarketDataError> for PricingError {
    fn from(err: MarketDataError) -> Self {
        match err {
            MarketDataError::EmptySeries | MarketDataError::InsufficientData { .. } => {
                PricingError::InsufficientData(err.to_string())
            }
            _ => PricingError::InvalidInput(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_finite_display() {
        let err = MarketDataError::NonFiniteValue {
            index: 2,
            value: f64::NAN,
        };
        assert_eq!(format!("{}", err), "Non-finite value at index 2: NaN");
    }

    #[test]
    fn test_index_length_mismatch_display() {
        let err = MarketDataError::IndexLengthMismatch { dates: 3, values: 4 };
        assert_eq!(
            format!("{}", err),
            "Index length mismatch: 3 dates for 4 values"
        );
    }

    #[test]
    fn test_insufficient_data_display() {
        let err = MarketDataError::InsufficientData { got: 1, need: 2 };
        assert_eq!(format!("{}", err), "Insufficient data: got 1, need 2");
    }

    #[test]
    fn test_into_pricing_error() {
        let pricing_err: PricingError = MarketDataError::EmptySeries.into();
        assert!(matches!(pricing_err, PricingError::InsufficientData(_)));

        let pricing_err: PricingError = MarketDataError::NonPositivePrice {
            index: 0,
            price: 0.0,
        }
        .into();
        match pricing_err {
            PricingError::InvalidInput(msg) => assert!(msg.contains("Non-positive")),
            _ => panic!("Expected InvalidInput variant"),
        }
    }
}
