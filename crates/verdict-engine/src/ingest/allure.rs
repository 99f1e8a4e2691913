//! Layer 1: Allure test summary ingestion.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Counters from the Allure `summary.json` statistic block.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AllureSummary {
    pub total: u64,
    pub passed: u64,
    pub failed: u64,
    pub broken: u64,
    pub skipped: u64,
}

impl AllureSummary {
    /// Parse the `statistic` block; anything missing counts as zero.
    pub fn parse(raw: &Value) -> Self {
        let count = |key: &str| {
            raw.pointer(&format!("/statistic/{key}"))
                .and_then(Value::as_u64)
                .unwrap_or(0)
        };
        Self {
            total: count("total"),
            passed: count("passed"),
            failed: count("failed"),
            broken: count("broken"),
            skipped: count("skipped"),
        }
    }

    /// Layer-1 status under the given empty-run policy.
    ///
    /// A run with zero executed tests counts as FAILED unless
    /// `empty_run_passes` is enabled.
    pub fn status(&self, empty_run_passes: bool) -> &'static str {
        let ran = self.total > 0 || empty_run_passes;
        if ran && self.failed == 0 && self.broken == 0 {
            "PASSED"
        } else {
            "FAILED"
        }
    }
}
