//! Layer 2: Trivy filesystem vulnerability report ingestion.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::seeded_counts;

const SEEDED: &[&str] = &["CRITICAL", "HIGH", "MEDIUM", "LOW"];

const TOP_LIMIT: usize = 10;

/// Aggregated Trivy vulnerabilities across all result blocks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrivyReport {
    pub findings: u64,
    pub severity: BTreeMap<String, u64>,
    pub top: Vec<String>,
}

impl Default for TrivyReport {
    fn default() -> Self {
        Self {
            findings: 0,
            severity: seeded_counts(SEEDED),
            top: Vec::new(),
        }
    }
}

impl TrivyReport {
    /// Parse a Trivy JSON report; a missing severity counts as LOW.
    pub fn parse(raw: &Value) -> Self {
        let mut report = Self::default();

        let results = raw
            .get("Results")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        for result in results {
            let vulns = result
                .get("Vulnerabilities")
                .and_then(Value::as_array)
                .map(Vec::as_slice)
                .unwrap_or(&[]);

            for vuln in vulns {
                report.findings += 1;
                let severity = vuln
                    .get("Severity")
                    .and_then(Value::as_str)
                    .unwrap_or("LOW")
                    .to_uppercase();
                *report.severity.entry(severity.clone()).or_insert(0) += 1;

                if report.top.len() < TOP_LIMIT {
                    let id = vuln
                        .get("VulnerabilityID")
                        .and_then(Value::as_str)
                        .unwrap_or("UNKNOWN");
                    let pkg = vuln.get("PkgName").and_then(Value::as_str).unwrap_or("UNKNOWN");
                    let installed = vuln
                        .get("InstalledVersion")
                        .and_then(Value::as_str)
                        .unwrap_or("");
                    let fixed = vuln.get("FixedVersion").and_then(Value::as_str).unwrap_or("");
                    report
                        .top
                        .push(format!("{severity} | {id} | {pkg} {installed} -> {fixed}"));
                }
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
