//! Configuration system for Verdict.
//! TOML-based, layered resolution: CLI > env > project file > defaults.

pub mod decision_config;
pub mod platform_config;
pub mod verdict_config;

pub use decision_config::DecisionConfig;
pub use platform_config::PlatformConfig;
pub use verdict_config::{CliOverrides, VerdictConfig, CONFIG_FILE};
