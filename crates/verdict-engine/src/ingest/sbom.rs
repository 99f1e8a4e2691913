//! Layer 3: CycloneDX SBOM inventory ingestion.

use serde::{Deserialize, Serialize};
use serde_json::Value;

const TOP_LIMIT: usize = 10;

/// Component inventory from a CycloneDX SBOM document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SbomInventory {
    pub components: u64,
    pub top: Vec<String>,
}

impl SbomInventory {
    pub fn parse(raw: &Value) -> Self {
        let components = raw
            .get("components")
            .and_then(Value::as_array)
            .map(Vec::as_slice)
            .unwrap_or(&[]);

        let top = components
            .iter()
            .take(TOP_LIMIT)
            .map(|component| {
                let name = component.get("name").and_then(Value::as_str).unwrap_or("unknown");
                let version = component
                    .get("version")
                    .and_then(Value::as_str)
                    .unwrap_or("unknown");
                let purl = component.get("purl").and_then(Value::as_str).unwrap_or("");
                format!("{name}:{version} {purl}")
            })
            .collect();

        Self {
            components: components.len() as u64,
            top,
        }
    }
}
