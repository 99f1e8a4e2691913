//! Layer 2: Semgrep static-analysis report ingestion.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::seeded_counts;

const SEEDED: &[&str] = &["ERROR", "WARNING", "INFO"];

/// How many findings the top list keeps.
const TOP_LIMIT: usize = 10;

/// Aggregated Semgrep findings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SemgrepReport {
    pub findings: u64,
    /// Severity counters; seeded with ERROR/WARNING/INFO, grown for any
    /// label the report carries beyond those.
    pub severity: BTreeMap<String, u64>,
    pub top: Vec<String>,
}

impl Default for SemgrepReport {
    fn default() -> Self {
        Self {
            findings: 0,
            severity: seeded_counts(SEEDED),
            top: Vec::new(),
        }
    }
}

impl SemgrepReport {
    /// Parse a Semgrep JSON report. Severity is counted across all results;
    /// the top list keeps the first ten.
    pub fn parse(raw: &Value) -> Self {
        let mut report = Self::default();

        let results = raw
            .get("results")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        for result in results {
            let level = result
                .pointer("/extra/severity")
                .and_then(Value::as_str)
                .unwrap_or("INFO")
                .to_uppercase();
            *report.severity.entry(level.clone()).or_insert(0) += 1;

            if report.top.len() < TOP_LIMIT {
                let check_id = result
                    .get("check_id")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown");
                let path = result.get("path").and_then(Value::as_str).unwrap_or("unknown");
                let message = result
                    .pointer("/extra/message")
                    .and_then(Value::as_str)
                    .unwrap_or("no message");
                report.top.push(format!("{level} | {check_id} | {path} | {message}"));
            }
        }

        report.findings = results.len() as u64;
        report
    }

    /// Error-severity finding count, the decision engine's input.
    pub fn errors(&self) -> u64 {
        self.severity.get("ERROR").copied().unwrap_or(0)
    }
}
