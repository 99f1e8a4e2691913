//! Tests for summary normalization.

use serde_json::json;

use verdict_engine::summary::normalize;

#[test]
fn empty_object_yields_all_defaults() {
    let summary = normalize(&json!({}));

    assert_eq!(summary.layers.layer1.status, "UNKNOWN");
    assert_eq!(summary.layers.layer2.semgrep.error, 0);
    assert_eq!(summary.layers.layer2.trivy.high, 0);
    assert_eq!(summary.layers.layer2.trivy.critical, 0);
    assert_eq!(summary.layers.layer3.grype.high, 0);
    assert_eq!(summary.layers.layer3.grype.critical, 0);
    assert_eq!(summary.layers.layer4.kpqe_decision, "UNKNOWN");
    assert!(summary.repo.is_none());
}

#[test]
fn non_object_input_is_treated_as_empty() {
    for raw in [json!(null), json!("not a mapping"), json!(42), json!([1, 2])] {
        let summary = normalize(&raw);
        assert_eq!(summary.layers.layer1.status, "UNKNOWN");
        assert_eq!(summary.layers.layer4.kpqe_decision, "UNKNOWN");
    }
}

#[test]
fn valid_values_pass_through_unchanged() {
    let raw = json!({
        "repo": "acme/shop",
        "commit": "abc123",
        "run_id": "77",
        "run_link": "https://github.com/acme/shop/actions/runs/77",
        "layers": {
            "layer1": { "status": "PASSED" },
            "layer2": {
                "semgrep": { "error": 2 },
                "trivy": { "high": 3, "critical": 1 }
            },
            "layer3": { "grype": { "high": 0, "critical": 4 } },
            "layer4": { "kpqe_decision": "RELEASE ALLOWED" }
        }
    });
    let summary = normalize(&raw);

    assert_eq!(summary.repo.as_deref(), Some("acme/shop"));
    assert_eq!(summary.layers.layer1.status, "PASSED");
    assert_eq!(summary.layers.layer2.semgrep.error, 2);
    assert_eq!(summary.layers.layer2.trivy.high, 3);
    assert_eq!(summary.layers.layer2.trivy.critical, 1);
    assert_eq!(summary.layers.layer3.grype.critical, 4);
    assert_eq!(summary.layers.layer4.kpqe_decision, "RELEASE ALLOWED");
}

#[test]
fn partially_populated_branch_defaults_per_leaf() {
    // semgrep present, trivy absent: each branch is defaulted on its own.
    let raw = json!({
        "layers": {
            "layer2": { "semgrep": { "error": 5 } }
        }
    });
    let summary = normalize(&raw);

    assert_eq!(summary.layers.layer2.semgrep.error, 5);
    assert_eq!(summary.layers.layer2.trivy.high, 0);
    assert_eq!(summary.layers.layer2.trivy.critical, 0);
    assert_eq!(summary.layers.layer1.status, "UNKNOWN");
}

#[test]
fn type_mismatched_leaves_take_defaults() {
    let raw = json!({
        "layers": {
            "layer1": { "status": 42 },
            "layer2": {
                "semgrep": { "error": "three" },
                "trivy": { "high": -1, "critical": 2.5 }
            },
            "layer4": { "kpqe_decision": ["BLOCKED"] }
        }
    });
    let summary = normalize(&raw);

    assert_eq!(summary.layers.layer1.status, "UNKNOWN");
    assert_eq!(summary.layers.layer2.semgrep.error, 0);
    assert_eq!(summary.layers.layer2.trivy.high, 0);
    assert_eq!(summary.layers.layer2.trivy.critical, 0);
    assert_eq!(summary.layers.layer4.kpqe_decision, "UNKNOWN");
}

#[test]
fn normalize_is_a_fixed_point() {
    let raw = json!({
        "repo": "acme/shop",
        "layers": {
            "layer1": { "status": "FAILED" },
            "layer2": { "trivy": { "high": 7 } }
        }
    });
    let once = normalize(&raw);
    let serialized = serde_json::to_value(&once).unwrap();
    let twice = normalize(&serialized);

    assert_eq!(once, twice);
}

#[test]
fn fixed_point_holds_for_the_empty_summary() {
    let once = normalize(&json!({}));
    let serialized = serde_json::to_value(&once).unwrap();
    let twice = normalize(&serialized);

    assert_eq!(once, twice);
}
