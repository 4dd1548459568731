//! Risk metrics configuration.

use infra_config::RiskSettings;

use super::error::RiskError;

/// Default number of return periods per year (daily equity data).
pub const DEFAULT_PERIODS_PER_YEAR: u32 = 252;

/// Default tail probability for VaR and expected shortfall.
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.05;

/// Annualisation and tail parameters for [`RiskMetrics`](super::RiskMetrics).
///
/// # Examples
///
/// ```
/// use pricer_risk::metrics::RiskConfig;
///
/// let config = RiskConfig::default();
/// assert_eq!(config.periods_per_year, 252);
/// assert_eq!(config.risk_free_rate, 0.0);
/// assert_eq!(config.confidence_level, 0.05);
///
/// assert!(RiskConfig::new(12, 0.03, 0.01).is_ok());
/// assert!(RiskConfig::new(0, 0.03, 0.01).is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskConfig {
    /// Return observations per year
    pub periods_per_year: u32,
    /// Annual risk-free rate for the Sharpe ratio
    pub risk_free_rate: f64,
    /// Default tail probability c in (0, 1)
    pub confidence_level: f64,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            periods_per_year: DEFAULT_PERIODS_PER_YEAR,
            risk_free_rate: 0.0,
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
        }
    }
}

impl RiskConfig {
    /// Creates a validated configuration.
    pub fn new(
        periods_per_year: u32,
        risk_free_rate: f64,
        confidence_level: f64,
    ) -> Result<Self, RiskError> {
        let config = Self {
            periods_per_year,
            risk_free_rate,
            confidence_level,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// - `InvalidPeriodsPerYear` if `periods_per_year` is 0
    /// - `InvalidRiskFreeRate` if the rate is NaN or infinite
    /// - `InvalidConfidenceLevel` unless 0 < c < 1
    pub fn validate(&self) -> Result<(), RiskError> {
        if self.periods_per_year == 0 {
            return Err(RiskError::InvalidPeriodsPerYear(self.periods_per_year));
        }
        if !self.risk_free_rate.is_finite() {
            return Err(RiskError::InvalidRiskFreeRate(self.risk_free_rate));
        }
        validate_confidence(self.confidence_level)
    }

    /// Annualisation factor as `f64`.
    #[inline]
    pub fn periods(&self) -> f64 {
        f64::from(self.periods_per_year)
    }
}

impl TryFrom<&RiskSettings> for RiskConfig {
    type Error = RiskError;

    fn try_from(settings: &RiskSettings) -> Result<Self, Self::Error> {
        Self::new(
            settings.periods_per_year,
            settings.risk_free_rate,
            settings.confidence_level,
        )
    }
}

/// Checks that a tail probability lies strictly inside (0, 1).
pub(crate) fn validate_confidence(confidence_level: f64) -> Result<(), RiskError> {
    if confidence_level > 0.0 && confidence_level < 1.0 {
        Ok(())
    } else {
        Err(RiskError::InvalidConfidenceLevel(confidence_level))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_confidence_bounds() {
        for c in [0.0, 1.0, -0.1, 1.1, f64::NAN] {
            assert!(matches!(
                RiskConfig::new(252, 0.0, c),
                Err(RiskError::InvalidConfidenceLevel(_))
            ));
        }
        assert!(RiskConfig::new(252, 0.0, 1e-6).is_ok());
    }

    #[test]
    fn test_invalid_rate() {
        assert!(matches!(
            RiskConfig::new(252, f64::INFINITY, 0.05),
            Err(RiskError::InvalidRiskFreeRate(_))
        ));
    }

    #[test]
    fn test_from_settings() {
        let settings = RiskSettings {
            periods_per_year: 52,
            risk_free_rate: 0.03,
            confidence_level: 0.01,
        };
        let config = RiskConfig::try_from(&settings).unwrap();
        assert_eq!(config.periods_per_year, 52);
        assert_eq!(config.periods(), 52.0);
        assert_eq!(config.risk_free_rate, 0.03);
    }

    #[test]
    fn test_default_matches_settings_default() {
        let config = RiskConfig::try_from(&RiskSettings::default()).unwrap();
        assert_eq!(config, RiskConfig::default());
    }
}
