//! Monte Carlo simulation configuration.
//!
//! This module provides the validated [`SimulationConfig`] and its builder.

use infra_config::SimulationSettings;

use super::error::SimulationError;

pub use infra_config::MAX_HORIZON;

/// Default upper bound on the trial count.
pub const DEFAULT_MAX_TRIALS: usize = 10_000_000;

/// Default base seed.
pub const DEFAULT_SEED: u64 = 42;

/// Monte Carlo simulation configuration.
///
/// Immutable configuration specifying simulation parameters.
/// Use [`SimulationConfigBuilder`] to construct instances.
///
/// # Examples
///
/// ```rust
/// use pricer_pricing::mc::SimulationConfig;
///
/// let config = SimulationConfig::builder()
///     .n_trials(10_000)
///     .horizon(252)
///     .seed(7)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_trials(), 10_000);
/// assert_eq!(config.horizon(), 252);
/// assert!(config.parallel());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Number of independent trials.
    n_trials: usize,
    /// Periods compounded per trial.
    horizon: usize,
    /// Base seed; per-block seeds derive from it.
    seed: u64,
    /// Latency bound on `n_trials`.
    max_trials: usize,
    /// Whether trial blocks run on the rayon pool.
    parallel: bool,
}

impl SimulationConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> SimulationConfigBuilder {
        SimulationConfigBuilder::default()
    }

    /// Builds a configuration from the `[simulation]` settings section.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use infra_config::SimulationSettings;
    /// use pricer_pricing::mc::SimulationConfig;
    ///
    /// let config = SimulationConfig::from_settings(&SimulationSettings::default()).unwrap();
    /// assert_eq!(config.seed(), 42);
    /// ```
    pub fn from_settings(settings: &SimulationSettings) -> Result<Self, SimulationError> {
        Self::builder()
            .n_trials(settings.n_trials)
            .horizon(settings.horizon)
            .seed(settings.seed)
            .max_trials(settings.max_trials)
            .parallel(settings.parallel)
            .build()
    }

    /// Returns the number of trials.
    #[inline]
    pub fn n_trials(&self) -> usize {
        self.n_trials
    }

    /// Returns the number of periods per trial.
    #[inline]
    pub fn horizon(&self) -> usize {
        self.horizon
    }

    /// Returns the base seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns the trial-count limit.
    #[inline]
    pub fn max_trials(&self) -> usize {
        self.max_trials
    }

    /// Returns whether trial blocks run in parallel.
    #[inline]
    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// - `InvalidParameter` if `max_trials` is 0
    /// - `InvalidTrialCount` if `n_trials` is 0
    /// - `TrialLimitExceeded` if `n_trials` > `max_trials`
    /// - `InvalidHorizon` if `horizon` is 0 or greater than 100,000
    pub fn validate(&self) -> Result<(), SimulationError> {
        if self.max_trials == 0 {
            return Err(SimulationError::InvalidParameter {
                name: "max_trials",
                value: "must be at least 1".to_string(),
            });
        }
        if self.n_trials == 0 {
            return Err(SimulationError::InvalidTrialCount(self.n_trials));
        }
        if self.n_trials > self.max_trials {
            return Err(SimulationError::TrialLimitExceeded {
                requested: self.n_trials,
                limit: self.max_trials,
            });
        }
        if self.horizon == 0 || self.horizon > MAX_HORIZON {
            return Err(SimulationError::InvalidHorizon(self.horizon));
        }
        Ok(())
    }
}

/// Builder for [`SimulationConfig`].
#[derive(Clone, Debug)]
pub struct SimulationConfigBuilder {
    n_trials: Option<usize>,
    horizon: Option<usize>,
    seed: u64,
    max_trials: usize,
    parallel: bool,
}

impl Default for SimulationConfigBuilder {
    fn default() -> Self {
        Self {
            n_trials: None,
            horizon: None,
            seed: DEFAULT_SEED,
            max_trials: DEFAULT_MAX_TRIALS,
            parallel: true,
        }
    }
}

impl SimulationConfigBuilder {
    /// Sets the number of trials.
    #[inline]
    pub fn n_trials(mut self, n_trials: usize) -> Self {
        self.n_trials = Some(n_trials);
        self
    }

    /// Sets the number of periods per trial.
    #[inline]
    pub fn horizon(mut self, horizon: usize) -> Self {
        self.horizon = Some(horizon);
        self
    }

    /// Sets the base seed.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the trial-count limit.
    #[inline]
    pub fn max_trials(mut self, max_trials: usize) -> Self {
        self.max_trials = max_trials;
        self
    }

    /// Enables or disables parallel execution.
    #[inline]
    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `SimulationError` if `n_trials` or `horizon` is unset or
    /// any value fails [`SimulationConfig::validate`].
    pub fn build(self) -> Result<SimulationConfig, SimulationError> {
        let n_trials = self.n_trials.ok_or(SimulationError::InvalidParameter {
            name: "n_trials",
            value: "must be specified".to_string(),
        })?;

        let horizon = self.horizon.ok_or(SimulationError::InvalidParameter {
            name: "horizon",
            value: "must be specified".to_string(),
        })?;

        let config = SimulationConfig {
            n_trials,
            horizon,
            seed: self.seed,
            max_trials: self.max_trials,
            parallel: self.parallel,
        };

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let config = SimulationConfig::builder()
            .n_trials(1000)
            .horizon(10)
            .build()
            .unwrap();

        assert_eq!(config.seed(), DEFAULT_SEED);
        assert_eq!(config.max_trials(), DEFAULT_MAX_TRIALS);
        assert!(config.parallel());
    }

    #[test]
    fn test_zero_trials() {
        let result = SimulationConfig::builder().n_trials(0).horizon(10).build();
        assert!(matches!(result, Err(SimulationError::InvalidTrialCount(0))));
    }

    #[test]
    fn test_trial_limit() {
        let result = SimulationConfig::builder()
            .n_trials(1001)
            .horizon(10)
            .max_trials(1000)
            .build();
        assert_eq!(
            result.unwrap_err(),
            SimulationError::TrialLimitExceeded {
                requested: 1001,
                limit: 1000
            }
        );

        let at_limit = SimulationConfig::builder()
            .n_trials(1000)
            .horizon(10)
            .max_trials(1000)
            .build();
        assert!(at_limit.is_ok());
    }

    #[test]
    fn test_horizon_bounds() {
        for horizon in [0, MAX_HORIZON + 1] {
            let result = SimulationConfig::builder()
                .n_trials(10)
                .horizon(horizon)
                .build();
            assert!(matches!(result, Err(SimulationError::InvalidHorizon(_))));
        }
    }

    #[test]
    fn test_missing_fields() {
        let result = SimulationConfig::builder().horizon(10).build();
        assert!(matches!(
            result,
            Err(SimulationError::InvalidParameter {
                name: "n_trials",
                ..
            })
        ));

        let result = SimulationConfig::builder().n_trials(10).build();
        assert!(matches!(
            result,
            Err(SimulationError::InvalidParameter {
                name: "horizon",
                ..
            })
        ));
    }

    #[test]
    fn test_from_settings() {
        let settings = SimulationSettings {
            n_trials: 500,
            horizon: 20,
            seed: 9,
            max_trials: 1000,
            parallel: false,
        };
        let config = SimulationConfig::from_settings(&settings).unwrap();
        assert_eq!(config.n_trials(), 500);
        assert_eq!(config.horizon(), 20);
        assert_eq!(config.seed(), 9);
        assert!(!config.parallel());
    }
}
