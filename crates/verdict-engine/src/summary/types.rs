//! Canonical shape of the normalized aggregate summary.
//!
//! After normalization every leaf the decision engine reads is present with
//! the stated type; downstream code never checks for existence.

use serde::{Deserialize, Serialize};

/// Layer 1 — automated test results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layer1 {
    /// `"PASSED"`, `"FAILED"`, or `"UNKNOWN"`.
    pub status: String,
}

impl Default for Layer1 {
    fn default() -> Self {
        Self {
            status: "UNKNOWN".to_string(),
        }
    }
}

/// Error-severity finding count from the static analyzer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SemgrepCounts {
    pub error: u64,
}

/// High/critical severity counts, shared by the Trivy and Grype layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VulnCounts {
    pub high: u64,
    pub critical: u64,
}

/// Layer 2 — static analysis and filesystem vulnerability scans.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layer2 {
    pub semgrep: SemgrepCounts,
    pub trivy: VulnCounts,
}

/// Layer 3 — SBOM vulnerability scan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layer3 {
    pub grype: VulnCounts,
}

/// Layer 4 — platform health gate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layer4 {
    /// Free text; a blocked platform gate contains `"BLOCKED"`.
    pub kpqe_decision: String,
}

impl Default for Layer4 {
    fn default() -> Self {
        Self {
            kpqe_decision: "UNKNOWN".to_string(),
        }
    }
}

/// The four quality-gate layers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Layers {
    pub layer1: Layer1,
    pub layer2: Layer2,
    pub layer3: Layer3,
    pub layer4: Layer4,
}

/// The normalized aggregate summary: every decision input is present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReleaseSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub repo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub commit: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub run_link: Option<String>,
    pub layers: Layers,
}
