//! Layer 2: Gitleaks secret-scan report ingestion.

use serde::{Deserialize, Serialize};
use serde_json::Value;

const TOP_LIMIT: usize = 5;

/// Aggregated Gitleaks findings. The report is a flat JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GitleaksReport {
    pub findings: u64,
    pub top: Vec<String>,
}

impl GitleaksReport {
    pub fn parse(raw: &Value) -> Self {
        let items = raw.as_array().map(Vec::as_slice).unwrap_or(&[]);

        let top = items
            .iter()
            .take(TOP_LIMIT)
            .map(|item| {
                let rule = item.get("RuleID").and_then(Value::as_str).unwrap_or("Unknown");
                let file = item.get("File").and_then(Value::as_str).unwrap_or("Unknown");
                let description = item
                    .get("Description")
                    .and_then(Value::as_str)
                    .unwrap_or("Unknown");
                format!("{rule} | {file} | {description}")
            })
            .collect();

        Self {
            findings: items.len() as u64,
            top,
        }
    }
}
