//! Tests for the error taxonomy.

use verdict_core::errors::{
    error_code, ClusterError, ConfigError, ReportError, VerdictErrorCode,
};

#[test]
fn errors_render_their_context() {
    let err = ConfigError::InvalidValue {
        field: "VERDICT_RESTART_THRESHOLD".to_string(),
        message: "cannot parse \"lots\"".to_string(),
    };
    assert!(err.to_string().contains("VERDICT_RESTART_THRESHOLD"));

    let err = ClusterError::ListFailed {
        resource: "pods".to_string(),
        message: "connection reset".to_string(),
    };
    assert_eq!(err.to_string(), "Listing pods failed: connection reset");

    let err = ReportError::SummaryNotFound {
        searched: vec!["a.json".to_string(), "b.json".to_string()],
    };
    assert!(err.to_string().contains("2 paths"));
}

#[test]
fn every_error_exposes_its_stable_code() {
    let config = ConfigError::FileNotFound {
        path: "verdict.toml".to_string(),
    };
    assert_eq!(config.error_code(), error_code::CONFIG_ERROR);

    let cluster = ClusterError::Timeout { seconds: 30 };
    assert_eq!(cluster.error_code(), error_code::CLUSTER_ERROR);

    let report = ReportError::UnknownFormat {
        format: "yaml".to_string(),
    };
    assert_eq!(report.error_code(), error_code::REPORT_ERROR);
}
