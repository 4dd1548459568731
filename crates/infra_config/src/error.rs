//! Configuration error types.

use thiserror::Error;

/// Configuration error types
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A source could not be read or deserialised.
    #[error("Configuration load error: {0}")]
    Load(#[from] config::ConfigError),

    /// A value was read but lies outside its valid range.
    #[error("Invalid configuration value for '{field}': {reason}")]
    Invalid {
        /// Dotted key of the offending value
        field: &'static str,
        /// Description of the violated constraint
        reason: String,
    },

    /// Invalid log level string.
    #[error("Invalid log level: {0}. Must be one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),

    /// A global tracing subscriber is already installed.
    #[error("Tracing initialisation failed: {0}")]
    TracingInit(String),
}

impl ConfigError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            field,
            reason: reason.into(),
        }
    }
}
