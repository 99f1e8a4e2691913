//! Layer 3: Grype SBOM vulnerability report ingestion.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::seeded_counts;

const SEEDED: &[&str] = &["CRITICAL", "HIGH", "MEDIUM", "LOW", "UNKNOWN"];

const TOP_LIMIT: usize = 10;

/// Aggregated Grype matches.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrypeReport {
    pub findings: u64,
    pub severity: BTreeMap<String, u64>,
    pub top: Vec<String>,
}

impl Default for GrypeReport {
    fn default() -> Self {
        Self {
            findings: 0,
            severity: seeded_counts(SEEDED),
            top: Vec::new(),
        }
    }
}

impl GrypeReport {
    /// Parse a Grype JSON report; a missing severity counts as UNKNOWN.
    pub fn parse(raw: &Value) -> Self {
        let mut report = Self::default();

        let matches = raw
            .get("matches")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        for entry in matches {
            report.findings += 1;
            let severity = entry
                .pointer("/vulnerability/severity")
                .and_then(Value::as_str)
                .unwrap_or("UNKNOWN")
                .to_uppercase();
            *report.severity.entry(severity.clone()).or_insert(0) += 1;

            if report.top.len() < TOP_LIMIT {
                let id = entry
                    .pointer("/vulnerability/id")
                    .and_then(Value::as_str)
                    .unwrap_or("UNKNOWN");
                let pkg = entry
                    .pointer("/artifact/name")
                    .and_then(Value::as_str)
                    .unwrap_or("UNKNOWN");
                let version = entry
                    .pointer("/artifact/version")
                    .and_then(Value::as_str)
                    .unwrap_or("UNKNOWN");
                report.top.push(format!("{severity} | {id} | {pkg}:{version}"));
            }
        }

        report
    }

    pub fn high(&self) -> u64 {
        self.severity.get("HIGH").copied().unwrap_or(0)
    }

    pub fn critical(&self) -> u64 {
        self.severity.get("CRITICAL").copied().unwrap_or(0)
    }
}
