//! Top-level configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

use super::decision_config::DecisionConfig;
use super::platform_config::PlatformConfig;

/// Name of the project configuration file.
pub const CONFIG_FILE: &str = "verdict.toml";

/// Command-line overrides, applied after env and project file.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub restart_threshold: Option<u32>,
    pub poll_interval_secs: Option<u64>,
    pub fail_on_hold: Option<bool>,
    pub trivy_report: Option<String>,
}

/// Top-level configuration for the release gate.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct VerdictConfig {
    pub platform: PlatformConfig,
    pub decision: DecisionConfig,
}

impl VerdictConfig {
    /// Load configuration for `dir`, resolving CLI > env > `verdict.toml` >
    /// defaults.
    pub fn load(dir: &Path, cli: Option<&CliOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::from_project_file(dir)?;
        config.apply_env()?;
        if let Some(cli) = cli {
            config.apply_cli(cli);
        }
        Ok(config)
    }

    fn from_project_file(dir: &Path) -> Result<Self, ConfigError> {
        let path = dir.join(CONFIG_FILE);
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = std::fs::read_to_string(&path).map_err(|err| ConfigError::ParseError {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;
        toml::from_str(&raw).map_err(|err| ConfigError::ParseError {
            path: path.display().to_string(),
            message: err.to_string(),
        })
    }

    fn apply_env(&mut self) -> Result<(), ConfigError> {
        if let Some(value) = env_parsed::<u32>("VERDICT_RESTART_THRESHOLD")? {
            self.platform.restart_threshold = Some(value);
        }
        if let Some(value) = env_parsed::<u64>("VERDICT_POLL_INTERVAL_SECS")? {
            self.platform.poll_interval_secs = Some(value);
        }
        if let Some(value) = env_parsed::<u64>("VERDICT_READ_TIMEOUT_SECS")? {
            self.platform.read_timeout_secs = Some(value);
        }
        if let Some(value) = env_bool("VERDICT_FAIL_ON_HOLD")? {
            self.decision.fail_on_hold = Some(value);
        }
        if let Some(value) = env_bool("VERDICT_EMPTY_TEST_RUN_PASSES")? {
            self.decision.empty_test_run_passes = Some(value);
        }
        if let Ok(value) = std::env::var("VERDICT_TRIVY_REPORT") {
            if !value.is_empty() {
                self.decision.trivy_report = Some(value);
            }
        }
        Ok(())
    }

    fn apply_cli(&mut self, cli: &CliOverrides) {
        if let Some(value) = cli.restart_threshold {
            self.platform.restart_threshold = Some(value);
        }
        if let Some(value) = cli.poll_interval_secs {
            self.platform.poll_interval_secs = Some(value);
        }
        if let Some(value) = cli.fail_on_hold {
            self.decision.fail_on_hold = Some(value);
        }
        if let Some(ref value) = cli.trivy_report {
            self.decision.trivy_report = Some(value.clone());
        }
    }
}

fn env_parsed<T: std::str::FromStr>(key: &str) -> Result<Option<T>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw.parse::<T>().map(Some).map_err(|_| ConfigError::InvalidValue {
            field: key.to_string(),
            message: format!("cannot parse {raw:?}"),
        }),
        Err(_) => Ok(None),
    }
}

fn env_bool(key: &str) -> Result<Option<bool>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => match raw.to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" => Ok(Some(true)),
            "0" | "false" | "no" => Ok(Some(false)),
            other => Err(ConfigError::InvalidValue {
                field: key.to_string(),
                message: format!("cannot parse {other:?} as bool"),
            }),
        },
        Err(_) => Ok(None),
    }
}
