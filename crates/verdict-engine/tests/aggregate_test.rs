//! Tests for aggregate summary assembly over a report tree.

use std::path::Path;

use serde_json::json;

use verdict_core::config::DecisionConfig;
use verdict_engine::aggregate::{aggregate, paths, RunInfo};
use verdict_engine::decision::{DecisionEngine, Verdict};
use verdict_engine::summary::normalize;

fn run_info() -> RunInfo {
    RunInfo {
        repo: "acme/shop".to_string(),
        commit: "abc123".to_string(),
        run_id: "77".to_string(),
        run_link: "https://github.com/acme/shop/actions/runs/77".to_string(),
    }
}

fn write(root: &Path, rel: &str, contents: &str) {
    let path = root.join(rel);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, contents).unwrap();
}

/// Populate a report tree where every gate is clean.
fn write_clean_tree(root: &Path) {
    write(
        root,
        paths::ALLURE_SUMMARY,
        &json!({ "statistic": { "total": 8, "passed": 8, "failed": 0, "broken": 0 } }).to_string(),
    );
    write(root, paths::GITLEAKS_REPORT, "[]");
    write(root, paths::SEMGREP_REPORT, r#"{"results": []}"#);
    write(
        root,
        "security-testing/reports/trivy-fs-report.json",
        r#"{"Results": []}"#,
    );
    write(root, paths::GRYPE_REPORT, r#"{"matches": []}"#);
    write(root, paths::SBOM_REPORT, r#"{"components": [{"name": "serde"}]}"#);
    write(root, paths::KPQE_DECISION, "RELEASE ALLOWED\n");
}

#[test]
fn clean_tree_assembles_a_passing_summary() {
    let dir = tempfile::TempDir::new().unwrap();
    write_clean_tree(dir.path());

    let report = aggregate(dir.path(), &run_info(), &DecisionConfig::default());

    assert_eq!(report.summary.layers.layer1.status, "PASSED");
    assert_eq!(report.summary.layers.layer2.semgrep.error, 0);
    assert_eq!(report.summary.layers.layer2.trivy.high, 0);
    assert_eq!(report.summary.layers.layer3.grype.critical, 0);
    assert_eq!(report.summary.layers.layer4.kpqe_decision, "RELEASE ALLOWED");
    assert_eq!(report.summary.repo.as_deref(), Some("acme/shop"));
    assert_eq!(report.sbom.components, 1);
    assert_eq!(report.kpqe_text, "RELEASE ALLOWED");
}

#[test]
fn empty_tree_assembles_neutral_defaults() {
    let dir = tempfile::TempDir::new().unwrap();

    let report = aggregate(dir.path(), &run_info(), &DecisionConfig::default());

    // No Allure report means zero tests ran, which is FAILED by default.
    assert_eq!(report.summary.layers.layer1.status, "FAILED");
    assert_eq!(report.summary.layers.layer2.semgrep.error, 0);
    assert_eq!(report.summary.layers.layer4.kpqe_decision, "UNKNOWN");
    assert_eq!(report.gitleaks.findings, 0);
}

#[test]
fn empty_test_run_policy_flips_the_missing_allure_status() {
    let dir = tempfile::TempDir::new().unwrap();
    let config = DecisionConfig {
        empty_test_run_passes: Some(true),
        ..Default::default()
    };

    let report = aggregate(dir.path(), &run_info(), &config);
    assert_eq!(report.summary.layers.layer1.status, "PASSED");
}

#[test]
fn trivy_filename_policy_selects_the_report() {
    let dir = tempfile::TempDir::new().unwrap();
    write_clean_tree(dir.path());
    // The alternate filename carries a critical finding; the default one is
    // clean. Only the configured file must be read.
    write(
        dir.path(),
        "security-testing/reports/trivy-report.json",
        &json!({ "Results": [ { "Vulnerabilities": [ { "Severity": "CRITICAL" } ] } ] })
            .to_string(),
    );

    let default_report = aggregate(dir.path(), &run_info(), &DecisionConfig::default());
    assert_eq!(default_report.summary.layers.layer2.trivy.critical, 0);

    let config = DecisionConfig {
        trivy_report: Some("trivy-report.json".to_string()),
        ..Default::default()
    };
    let alternate_report = aggregate(dir.path(), &run_info(), &config);
    assert_eq!(alternate_report.summary.layers.layer2.trivy.critical, 1);
}

#[test]
fn blocked_platform_text_flows_through_to_a_no_go() {
    let dir = tempfile::TempDir::new().unwrap();
    write_clean_tree(dir.path());
    write(
        dir.path(),
        paths::KPQE_DECISION,
        "RELEASE BLOCKED - issues:\n - Node not ready: worker-1\n",
    );

    let report = aggregate(dir.path(), &run_info(), &DecisionConfig::default());
    assert_eq!(report.summary.layers.layer4.kpqe_decision, "RELEASE BLOCKED");

    // Round-trip through serialization and normalization, then decide.
    let serialized = serde_json::to_value(&report.summary).unwrap();
    let normalized = normalize(&serialized);
    assert_eq!(normalized, report.summary);

    let decision = DecisionEngine::new().decide(&normalized);
    assert_eq!(decision.verdict, Verdict::NoGo);
    assert!(decision
        .reasoning
        .iter()
        .any(|r| r == "platform health gate blocked release"));
}

#[test]
fn severity_counts_flow_into_the_summary() {
    let dir = tempfile::TempDir::new().unwrap();
    write_clean_tree(dir.path());
    write(
        dir.path(),
        paths::SEMGREP_REPORT,
        &json!({ "results": [ { "extra": { "severity": "ERROR" } } ] }).to_string(),
    );
    write(
        dir.path(),
        paths::GRYPE_REPORT,
        &json!({ "matches": [ { "vulnerability": { "severity": "HIGH" } } ] }).to_string(),
    );

    let report = aggregate(dir.path(), &run_info(), &DecisionConfig::default());
    assert_eq!(report.summary.layers.layer2.semgrep.error, 1);
    assert_eq!(report.summary.layers.layer3.grype.high, 1);

    let decision = DecisionEngine::new().decide(&report.summary);
    // Semgrep precedes grype in the default order.
    assert_eq!(decision.verdict, Verdict::Hold);
}
