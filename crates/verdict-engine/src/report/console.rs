//! Console reporter — human-readable final decision banner.

use verdict_core::errors::ReportError;

use crate::decision::FinalDecision;

use super::Reporter;

pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn name(&self) -> &'static str {
        "console"
    }

    fn generate(&self, decision: &FinalDecision) -> Result<String, ReportError> {
        let field = |value: &Option<String>| -> String {
            value.as_deref().unwrap_or("UNKNOWN").to_string()
        };

        let mut out = String::new();
        out.push_str("==============================\n");
        out.push_str("  FINAL RELEASE DECISION\n");
        out.push_str("==============================\n");
        out.push_str(&format!("Repo    : {}\n", field(&decision.repo)));
        out.push_str(&format!("Commit  : {}\n", field(&decision.commit)));
        out.push_str(&format!("Run ID  : {}\n", field(&decision.run_id)));
        out.push_str(&format!("Decision: {}\n", decision.final_decision));
        out.push_str("------------------------------\n");
        out.push_str("Reasoning:\n");
        for reason in &decision.reasoning {
            out.push_str(&format!(" - {reason}\n"));
        }
        out.push_str("==============================\n");
        Ok(out)
    }
}
