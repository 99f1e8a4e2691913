//! Platform health evaluation configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the platform health evaluator and its polling loop.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlatformConfig {
    /// Restart count above which a container is restart-risk. Default: 3.
    pub restart_threshold: Option<u32>,
    /// Metrics re-evaluation interval in seconds. Default: 15.
    pub poll_interval_secs: Option<u64>,
    /// Upper bound for a single cluster read call in seconds. Default: 30.
    pub read_timeout_secs: Option<u64>,
}

impl PlatformConfig {
    /// Returns the effective restart threshold, defaulting to 3.
    pub fn effective_restart_threshold(&self) -> u32 {
        self.restart_threshold
            .unwrap_or(constants::DEFAULT_RESTART_THRESHOLD)
    }

    /// Returns the effective poll interval, defaulting to 15 seconds.
    pub fn effective_poll_interval_secs(&self) -> u64 {
        self.poll_interval_secs
            .unwrap_or(constants::DEFAULT_POLL_INTERVAL_SECS)
    }

    /// Returns the effective read timeout, defaulting to 30 seconds.
    pub fn effective_read_timeout_secs(&self) -> u64 {
        self.read_timeout_secs
            .unwrap_or(constants::DEFAULT_READ_TIMEOUT_SECS)
    }
}
