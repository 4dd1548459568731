//! # infra_config: Configuration and Tracing for the Analytics Engines
//!
//! Loads [`AnalyticsSettings`] from layered sources with the `config` crate
//! and installs the `tracing` subscriber.
//!
//! ## Sources
//!
//! 1. Defaults (`[risk]` 252 periods, 5% tail; `[simulation]` 10 000 trials, seed 42)
//! 2. Optional TOML file
//! 3. Environment variables, e.g. `QUANTRISK__RISK__CONFIDENCE_LEVEL=0.01`
//!
//! ## Example
//!
//! ```
//! use infra_config::{load_settings, init_tracing};
//!
//! let settings = load_settings(None).unwrap();
//! let _ = init_tracing(&settings.logging);
//! assert!(settings.risk.confidence_level > 0.0);
//! ```

#![deny(missing_docs)]

pub mod error;
pub mod loader;
pub mod settings;
pub mod telemetry;

pub use error::ConfigError;
pub use loader::{load_settings, SettingsLoader, ENV_PREFIX, ENV_SEPARATOR};
pub use settings::{
    AnalyticsSettings, LogLevel, LoggingSettings, RiskSettings, SimulationSettings, MAX_HORIZON,
};
pub use telemetry::{env_filter, init_tracing};
