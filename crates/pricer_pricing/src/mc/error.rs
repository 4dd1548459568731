//! Error types for the Monte Carlo simulator.
//!
//! All validation happens before any trial is generated, so a simulation
//! either runs to completion or fails without side effects.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Simulation configuration and parameter errors.
#[derive(Error, Clone, Debug, PartialEq)]
pub enum SimulationError {
    /// Trial count of zero.
    #[error("Invalid trial count {0}: must be at least 1")]
    InvalidTrialCount(usize),

    /// Trial count above the configured latency bound.
    #[error("Trial count {requested} exceeds the limit of {limit}")]
    TrialLimitExceeded {
        /// Requested number of trials
        requested: usize,
        /// Configured `max_trials`
        limit: usize,
    },

    /// Horizon outside [1, MAX_HORIZON].
    #[error("Invalid horizon {0}: must be in range [1, 100_000]")]
    InvalidHorizon(usize),

    /// Invalid parameter value with name and description.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Description of the invalid value.
        value: String,
    },
}

impl From<SimulationError> for PricingError {
    fn from(err: SimulationError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simulation_error_display() {
        let err = SimulationError::InvalidTrialCount(0);
        assert!(err.to_string().contains("Invalid trial count 0"));

        let err = SimulationError::TrialLimitExceeded {
            requested: 20,
            limit: 10,
        };
        assert_eq!(err.to_string(), "Trial count 20 exceeds the limit of 10");

        let err = SimulationError::InvalidParameter {
            name: "volatility",
            value: "must be non-negative".to_string(),
        };
        assert!(err.to_string().contains("volatility"));
    }

    #[test]
    fn test_into_pricing_error() {
        let err: PricingError = SimulationError::InvalidHorizon(0).into();
        assert!(matches!(err, PricingError::InvalidInput(_)));
    }
}
