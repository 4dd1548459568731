//! Tracing subscriber installation.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::error::ConfigError;
use crate::settings::LoggingSettings;

/// Builds the filter: `RUST_LOG` when set and valid, otherwise the configured level.
pub fn env_filter(logging: &LoggingSettings) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logging.level.as_filter_str()))
}

/// Installs a global fmt subscriber.
///
/// # Errors
/// `ConfigError::TracingInit` if a global subscriber is already set.
pub fn init_tracing(logging: &LoggingSettings) -> Result<(), ConfigError> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(env_filter(logging))
        .try_init()
        .map_err(|e| ConfigError::TracingInit(e.to_string()))
}
