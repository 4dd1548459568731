//! Loading settings from TOML files on disk.

use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;

use approx::assert_relative_eq;
use infra_config::{ConfigError, LogLevel, SettingsLoader};

/// Writes `contents` to a per-test file under the system temp directory.
fn write_config(name: &str, contents: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("infra_config_{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn test_full_file() {
    let path = write_config(
        "full.toml",
        r#"
[logging]
level = "warn"

[risk]
periods_per_year = 12
risk_free_rate = 0.03
confidence_level = 0.01

[simulation]
n_trials = 2000
horizon = 60
seed = 1234
max_trials = 5000
parallel = false
"#,
    );

    let settings = SettingsLoader::new()
        .file(&path)
        .env_source(HashMap::new())
        .load()
        .unwrap();

    assert_eq!(settings.logging.level, LogLevel::Warn);
    assert_eq!(settings.risk.periods_per_year, 12);
    assert_relative_eq!(settings.risk.risk_free_rate, 0.03);
    assert_relative_eq!(settings.risk.confidence_level, 0.01);
    assert_eq!(settings.simulation.n_trials, 2000);
    assert_eq!(settings.simulation.horizon, 60);
    assert_eq!(settings.simulation.seed, 1234);
    assert_eq!(settings.simulation.max_trials, 5000);
    assert!(!settings.simulation.parallel);
}

#[test]
fn test_partial_file_with_env_override() {
    let path = write_config("partial.toml", "[simulation]\nn_trials = 100\n");
    let env = HashMap::from([(
        "QUANTRISK__SIMULATION__N_TRIALS".to_string(),
        "250".to_string(),
    )]);

    let settings = SettingsLoader::new()
        .file(&path)
        .env_source(env)
        .load()
        .unwrap();

    assert_eq!(settings.simulation.n_trials, 250);
    assert_eq!(settings.risk.periods_per_year, 252);
}

#[test]
fn test_file_exceeding_trial_cap_is_invalid() {
    let path = write_config(
        "over_cap.toml",
        "[simulation]\nn_trials = 20\nmax_trials = 10\n",
    );
    let result = SettingsLoader::new()
        .file(&path)
        .env_source(HashMap::new())
        .load();

    assert!(matches!(
        result,
        Err(ConfigError::Invalid {
            field: "simulation.n_trials",
            ..
        })
    ));
}

#[test]
fn test_malformed_file_is_load_error() {
    let path = write_config("broken.toml", "[risk\nperiods_per_year = ");
    let result = SettingsLoader::new()
        .file(&path)
        .env_source(HashMap::new())
        .load();
    assert!(matches!(result, Err(ConfigError::Load(_))));
}
