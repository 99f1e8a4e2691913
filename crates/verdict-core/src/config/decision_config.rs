//! Release decision configuration.

use serde::{Deserialize, Serialize};

use crate::constants;

/// Configuration for the decision engine and its surrounding pipeline.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DecisionConfig {
    /// Whether a HOLD verdict fails the pipeline. Default: true.
    pub fail_on_hold: Option<bool>,
    /// Whether a test run with zero executed tests counts as PASSED.
    /// Default: false.
    pub empty_test_run_passes: Option<bool>,
    /// Authoritative Trivy report filename. Default: `trivy-fs-report.json`.
    pub trivy_report: Option<String>,
    /// Candidate paths for the aggregate summary document, searched in
    /// order. Defaults to the well-known artifact locations.
    #[serde(default)]
    pub summary_paths: Vec<String>,
}

impl DecisionConfig {
    /// Returns the effective HOLD policy, defaulting to fail.
    pub fn effective_fail_on_hold(&self) -> bool {
        self.fail_on_hold.unwrap_or(constants::DEFAULT_FAIL_ON_HOLD)
    }

    /// Returns the effective empty-test-run policy, defaulting to FAILED.
    pub fn effective_empty_test_run_passes(&self) -> bool {
        self.empty_test_run_passes
            .unwrap_or(constants::DEFAULT_EMPTY_TEST_RUN_PASSES)
    }

    /// Returns the effective Trivy report filename.
    pub fn effective_trivy_report(&self) -> &str {
        self.trivy_report
            .as_deref()
            .unwrap_or(constants::DEFAULT_TRIVY_REPORT)
    }

    /// Returns the effective summary candidate paths, in search order.
    pub fn effective_summary_paths(&self) -> Vec<String> {
        if self.summary_paths.is_empty() {
            constants::SUMMARY_CANDIDATE_PATHS
                .iter()
                .map(|p| p.to_string())
                .collect()
        } else {
            self.summary_paths.clone()
        }
    }
}
