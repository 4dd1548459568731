//! Layered settings loading.
//!
//! Priority (highest to lowest):
//! 1. Environment variables (`QUANTRISK__SECTION__KEY`)
//! 2. TOML file or inline TOML
//! 3. Default values

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use config::{Config, Environment, File, FileFormat};
use tracing::debug;

use crate::error::ConfigError;
use crate::settings::AnalyticsSettings;

/// Environment variable prefix.
pub const ENV_PREFIX: &str = "QUANTRISK";

/// Separator between prefix, section and key in environment variable names.
pub const ENV_SEPARATOR: &str = "__";

/// Builder assembling the configuration sources.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use infra_config::SettingsLoader;
///
/// let env = HashMap::from([(
///     "QUANTRISK__SIMULATION__SEED".to_string(),
///     "7".to_string(),
/// )]);
/// let settings = SettingsLoader::new()
///     .toml_str("[risk]\nperiods_per_year = 52")
///     .env_source(env)
///     .load()
///     .unwrap();
///
/// assert_eq!(settings.risk.periods_per_year, 52);
/// assert_eq!(settings.simulation.seed, 7);
/// ```
#[derive(Debug, Clone, Default)]
pub struct SettingsLoader {
    file: Option<PathBuf>,
    toml: Option<String>,
    env: Option<HashMap<String, String>>,
}

impl SettingsLoader {
    /// Loader with defaults and the process environment only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a required configuration file; the format follows the extension.
    pub fn file(mut self, path: impl Into<PathBuf>) -> Self {
        self.file = Some(path.into());
        self
    }

    /// Adds inline TOML, layered above the file.
    pub fn toml_str(mut self, toml: impl Into<String>) -> Self {
        self.toml = Some(toml.into());
        self
    }

    /// Replaces the process environment with an explicit variable map.
    pub fn env_source(mut self, vars: HashMap<String, String>) -> Self {
        self.env = Some(vars);
        self
    }

    /// Reads every source, deserialises and validates the result.
    ///
    /// # Errors
    /// - `ConfigError::Load` if a source is missing or malformed
    /// - `ConfigError::Invalid` if a value is out of range
    pub fn load(self) -> Result<AnalyticsSettings, ConfigError> {
        let mut builder = Config::builder();

        if let Some(path) = &self.file {
            debug!(path = %path.display(), "Adding configuration file");
            builder = builder.add_source(File::from(path.as_path()).required(true));
        }
        if let Some(toml) = &self.toml {
            builder = builder.add_source(File::from_str(toml, FileFormat::Toml));
        }
        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator(ENV_SEPARATOR)
                .try_parsing(true)
                .source(self.env),
        );

        let settings: AnalyticsSettings = builder.build()?.try_deserialize()?;
        settings.validate()?;

        debug!(
            level = %settings.logging.level,
            periods_per_year = settings.risk.periods_per_year,
            n_trials = settings.simulation.n_trials,
            "Configuration loaded"
        );
        Ok(settings)
    }
}

/// Loads settings from defaults, an optional file and the process environment.
pub fn load_settings(path: Option<&Path>) -> Result<AnalyticsSettings, ConfigError> {
    let loader = SettingsLoader::new();
    match path {
        Some(path) => loader.file(path).load(),
        None => loader.load(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::LogLevel;

    fn env(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults_without_sources() {
        let settings = SettingsLoader::new()
            .env_source(HashMap::new())
            .load()
            .unwrap();
        assert_eq!(settings, AnalyticsSettings::default());
    }

    #[test]
    fn test_toml_overrides_defaults() {
        let settings = SettingsLoader::new()
            .toml_str(
                r#"
                [logging]
                level = "DEBUG"

                [simulation]
                n_trials = 500
                parallel = false
                "#,
            )
            .env_source(HashMap::new())
            .load()
            .unwrap();

        assert_eq!(settings.logging.level, LogLevel::Debug);
        assert_eq!(settings.simulation.n_trials, 500);
        assert!(!settings.simulation.parallel);
        // Untouched keys keep defaults
        assert_eq!(settings.simulation.horizon, 252);
        assert_eq!(settings.risk.confidence_level, 0.05);
    }

    #[test]
    fn test_env_overrides_toml() {
        let settings = SettingsLoader::new()
            .toml_str("[risk]\nconfidence_level = 0.05\nrisk_free_rate = 0.02")
            .env_source(env(&[
                ("QUANTRISK__RISK__CONFIDENCE_LEVEL", "0.01"),
                ("QUANTRISK__SIMULATION__PARALLEL", "false"),
                ("UNRELATED__RISK__CONFIDENCE_LEVEL", "0.5"),
            ]))
            .load()
            .unwrap();

        assert_eq!(settings.risk.confidence_level, 0.01);
        assert_eq!(settings.risk.risk_free_rate, 0.02);
        assert!(!settings.simulation.parallel);
    }

    #[test]
    fn test_invalid_value_rejected_after_merge() {
        let result = SettingsLoader::new()
            .env_source(env(&[("QUANTRISK__RISK__CONFIDENCE_LEVEL", "1.5")]))
            .load();
        assert!(matches!(result, Err(ConfigError::Invalid { .. })));
    }

    #[test]
    fn test_unknown_log_level_is_load_error() {
        let result = SettingsLoader::new()
            .toml_str("[logging]\nlevel = \"chatty\"")
            .env_source(HashMap::new())
            .load();
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }

    #[test]
    fn test_missing_file_is_load_error() {
        let result = SettingsLoader::new()
            .file("/nonexistent/quantrisk/settings.toml")
            .env_source(HashMap::new())
            .load();
        assert!(matches!(result, Err(ConfigError::Load(_))));
    }
}
