//! Settings structures for the analytics engines.
//!
//! Every section derives `Deserialize` with `#[serde(default)]`, so a
//! source only has to name the keys it overrides.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::error::ConfigError;

/// Largest accepted simulation horizon in periods.
pub const MAX_HORIZON: usize = 100_000;

/// Log levels accepted by the tracing filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// Everything
    Trace,
    /// Per-stage diagnostics
    Debug,
    /// Per-run summaries
    #[default]
    Info,
    /// Degenerate inputs and fallbacks
    Warn,
    /// Failures only
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Convert log level to tracing filter string
    pub fn as_filter_str(&self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Info => "info",
            LogLevel::Warn => "warn",
            LogLevel::Error => "error",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_filter_str())
    }
}

impl<'de> Deserialize<'de> for LogLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        LogLevel::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// `[logging]` section
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Default filter level; `RUST_LOG` takes precedence when set
    pub level: LogLevel,
}

/// `[risk]` section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RiskSettings {
    /// Return observations per year (252 for daily equity data)
    pub periods_per_year: u32,
    /// Annual risk-free rate used by the Sharpe ratio
    pub risk_free_rate: f64,
    /// Tail probability for VaR and expected shortfall
    pub confidence_level: f64,
}

impl Default for RiskSettings {
    fn default() -> Self {
        Self {
            periods_per_year: 252,
            risk_free_rate: 0.0,
            confidence_level: 0.05,
        }
    }
}

impl RiskSettings {
    /// Validate the risk section
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.periods_per_year == 0 {
            return Err(ConfigError::invalid(
                "risk.periods_per_year",
                "must be at least 1",
            ));
        }
        if !self.risk_free_rate.is_finite() {
            return Err(ConfigError::invalid(
                "risk.risk_free_rate",
                format!("must be finite, got {}", self.risk_free_rate),
            ));
        }
        if !(self.confidence_level > 0.0 && self.confidence_level < 1.0) {
            return Err(ConfigError::invalid(
                "risk.confidence_level",
                format!("must lie in (0, 1), got {}", self.confidence_level),
            ));
        }
        Ok(())
    }
}

/// `[simulation]` section
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Number of Monte Carlo trials
    pub n_trials: usize,
    /// Periods simulated per trial
    pub horizon: usize,
    /// Base seed for reproducible runs
    pub seed: u64,
    /// Upper bound on `n_trials`, capping worst-case latency
    pub max_trials: usize,
    /// Run trial blocks on the rayon pool
    pub parallel: bool,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            n_trials: 10_000,
            horizon: 252,
            seed: 42,
            max_trials: 10_000_000,
            parallel: true,
        }
    }
}

impl SimulationSettings {
    /// Validate the simulation section
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_trials == 0 {
            return Err(ConfigError::invalid(
                "simulation.max_trials",
                "must be at least 1",
            ));
        }
        if self.n_trials == 0 || self.n_trials > self.max_trials {
            return Err(ConfigError::invalid(
                "simulation.n_trials",
                format!(
                    "must be in [1, {}], got {}",
                    self.max_trials, self.n_trials
                ),
            ));
        }
        if self.horizon == 0 || self.horizon > MAX_HORIZON {
            return Err(ConfigError::invalid(
                "simulation.horizon",
                format!("must be in [1, {}], got {}", MAX_HORIZON, self.horizon),
            ));
        }
        Ok(())
    }
}

/// Complete settings tree.
///
/// # Examples
/// ```
/// use infra_config::AnalyticsSettings;
///
/// let settings = AnalyticsSettings::default();
/// assert_eq!(settings.risk.periods_per_year, 252);
/// assert_eq!(settings.simulation.seed, 42);
/// assert!(settings.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct AnalyticsSettings {
    /// Logging section
    pub logging: LoggingSettings,
    /// Risk metrics section
    pub risk: RiskSettings,
    /// Monte Carlo section
    pub simulation: SimulationSettings,
}

impl AnalyticsSettings {
    /// Validate every section
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.risk.validate()?;
        self.simulation.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_settings() {
        let settings = AnalyticsSettings::default();
        assert_eq!(settings.logging.level, LogLevel::Info);
        assert_eq!(settings.risk.periods_per_year, 252);
        assert_eq!(settings.risk.risk_free_rate, 0.0);
        assert_eq!(settings.risk.confidence_level, 0.05);
        assert_eq!(settings.simulation.n_trials, 10_000);
        assert_eq!(settings.simulation.horizon, 252);
        assert_eq!(settings.simulation.max_trials, 10_000_000);
        assert!(settings.simulation.parallel);
    }

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str("trace").unwrap(), LogLevel::Trace);
        assert_eq!(LogLevel::from_str("DEBUG").unwrap(), LogLevel::Debug);
        assert_eq!(LogLevel::from_str("Warn").unwrap(), LogLevel::Warn);
        assert!(LogLevel::from_str("verbose").is_err());
        assert_eq!(LogLevel::Error.to_string(), "error");
    }

    #[test]
    fn test_validate_confidence_level() {
        for bad in [0.0, 1.0, -0.1, f64::NAN] {
            let risk = RiskSettings {
                confidence_level: bad,
                ..Default::default()
            };
            assert!(matches!(
                risk.validate(),
                Err(ConfigError::Invalid {
                    field: "risk.confidence_level",
                    ..
                })
            ));
        }
    }

    #[test]
    fn test_validate_periods_and_rate() {
        let risk = RiskSettings {
            periods_per_year: 0,
            ..Default::default()
        };
        assert!(risk.validate().is_err());

        let risk = RiskSettings {
            risk_free_rate: f64::INFINITY,
            ..Default::default()
        };
        assert!(risk.validate().is_err());
    }

    #[test]
    fn test_validate_trial_bounds() {
        let sim = SimulationSettings {
            n_trials: 2_000,
            max_trials: 1_000,
            ..Default::default()
        };
        assert!(matches!(
            sim.validate(),
            Err(ConfigError::Invalid {
                field: "simulation.n_trials",
                ..
            })
        ));

        let sim = SimulationSettings {
            horizon: MAX_HORIZON + 1,
            ..Default::default()
        };
        assert!(sim.validate().is_err());
    }
}
