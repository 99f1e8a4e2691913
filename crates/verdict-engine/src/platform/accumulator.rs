//! Single-layer release decision: collect every failing signal, then decide.

use serde::{Deserialize, Serialize};

use verdict_core::constants::{RELEASE_ALLOWED_MARKER, RELEASE_BLOCKED_MARKER};

use super::types::PlatformHealthReport;

/// Append-only issue accumulator reduced to an allow/block decision.
///
/// Unlike the ordered rule chain in [`crate::decision`], which stops at the
/// first failing gate, this variant records every failing signal before
/// deciding. The two serve different call sites and stay independent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReleaseDecision {
    issues: Vec<String>,
}

impl ReleaseDecision {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every failing signal from a platform health report.
    pub fn from_report(report: &PlatformHealthReport) -> Self {
        let mut decision = Self::new();
        if !report.cluster_reachable {
            decision.record_issue("Cluster not reachable");
        }
        for name in &report.not_ready_node_names {
            decision.record_issue(format!("Node not ready: {name}"));
        }
        for pod in &report.crashloop_pods {
            decision.record_issue(format!("CrashLoop pod: {pod}"));
        }
        for pod in &report.restart_risk_pods {
            decision.record_issue(format!("High restart pod: {pod}"));
        }
        decision
    }

    /// Record a blocking issue. Append-only; recording order is preserved.
    pub fn record_issue(&mut self, issue: impl Into<String>) {
        self.issues.push(issue.into());
    }

    /// True iff no issue has been recorded.
    pub fn is_allowed(&self) -> bool {
        self.issues.is_empty()
    }

    /// Recorded issues, in recording order.
    pub fn issues(&self) -> &[String] {
        &self.issues
    }

    /// Two-branch rendering. The literal `RELEASE ALLOWED` / `RELEASE
    /// BLOCKED` markers are what the layer-4 text classifier matches on.
    pub fn summary(&self) -> String {
        if self.is_allowed() {
            return RELEASE_ALLOWED_MARKER.to_string();
        }
        let mut out = format!("{RELEASE_BLOCKED_MARKER} - issues:");
        for issue in &self.issues {
            out.push_str("\n - ");
            out.push_str(issue);
        }
        out
    }
}
