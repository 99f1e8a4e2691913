//! JSON reporter — the `final-decision.json` document.

use verdict_core::errors::ReportError;

use crate::decision::FinalDecision;

use super::Reporter;

pub struct JsonReporter;

impl Reporter for JsonReporter {
    fn name(&self) -> &'static str {
        "json"
    }

    fn generate(&self, decision: &FinalDecision) -> Result<String, ReportError> {
        serde_json::to_string_pretty(decision).map_err(|err| ReportError::RenderFailed {
            format: "json".to_string(),
            message: err.to_string(),
        })
    }
}
