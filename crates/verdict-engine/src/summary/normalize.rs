//! Summary normalization: any input shape to the canonical summary.

use serde_json::Value;

use super::types::ReleaseSummary;

/// Normalize an arbitrary summary document.
///
/// Total over any input including non-objects, which are treated as empty.
/// Every leaf the decision engine reads is filled independently: a
/// correctly-typed value passes through unchanged, anything absent or
/// type-mismatched takes its documented default (numeric severities 0,
/// statuses `"UNKNOWN"`). A partially populated branch keeps its populated
/// leaves. Normalizing an already-normalized summary is a fixed point.
pub fn normalize(raw: &Value) -> ReleaseSummary {
    let mut summary = ReleaseSummary::default();

    summary.repo = string_at(raw, &["repo"]);
    summary.commit = string_at(raw, &["commit"]);
    summary.run_id = string_at(raw, &["run_id"]);
    summary.run_link = string_at(raw, &["run_link"]);

    if let Some(status) = string_at(raw, &["layers", "layer1", "status"]) {
        summary.layers.layer1.status = status;
    }

    summary.layers.layer2.semgrep.error = count_at(raw, &["layers", "layer2", "semgrep", "error"]);
    summary.layers.layer2.trivy.high = count_at(raw, &["layers", "layer2", "trivy", "high"]);
    summary.layers.layer2.trivy.critical =
        count_at(raw, &["layers", "layer2", "trivy", "critical"]);
    summary.layers.layer3.grype.high = count_at(raw, &["layers", "layer3", "grype", "high"]);
    summary.layers.layer3.grype.critical =
        count_at(raw, &["layers", "layer3", "grype", "critical"]);

    if let Some(decision) = string_at(raw, &["layers", "layer4", "kpqe_decision"]) {
        summary.layers.layer4.kpqe_decision = decision;
    }

    summary
}

fn lookup<'a>(raw: &'a Value, path: &[&str]) -> Option<&'a Value> {
    path.iter().try_fold(raw, |value, key| value.get(key))
}

fn string_at(raw: &Value, path: &[&str]) -> Option<String> {
    lookup(raw, path).and_then(Value::as_str).map(str::to_string)
}

fn count_at(raw: &Value, path: &[&str]) -> u64 {
    lookup(raw, path).and_then(Value::as_u64).unwrap_or(0)
}
