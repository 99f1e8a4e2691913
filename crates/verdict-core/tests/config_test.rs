//! Tests for the Verdict configuration system.

use std::sync::Mutex;

use verdict_core::config::{CliOverrides, VerdictConfig};
use verdict_core::constants;

/// Global mutex to serialize tests that modify environment variables.
static ENV_MUTEX: Mutex<()> = Mutex::new(());

/// Clear all VERDICT_ env vars to prevent cross-test contamination.
fn clear_verdict_env_vars() {
    for key in [
        "VERDICT_RESTART_THRESHOLD",
        "VERDICT_POLL_INTERVAL_SECS",
        "VERDICT_READ_TIMEOUT_SECS",
        "VERDICT_FAIL_ON_HOLD",
        "VERDICT_EMPTY_TEST_RUN_PASSES",
        "VERDICT_TRIVY_REPORT",
    ] {
        std::env::remove_var(key);
    }
}

#[test]
fn defaults_apply_when_nothing_is_configured() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_verdict_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    let config = VerdictConfig::load(dir.path(), None).unwrap();

    assert_eq!(
        config.platform.effective_restart_threshold(),
        constants::DEFAULT_RESTART_THRESHOLD
    );
    assert_eq!(
        config.platform.effective_poll_interval_secs(),
        constants::DEFAULT_POLL_INTERVAL_SECS
    );
    assert_eq!(
        config.platform.effective_read_timeout_secs(),
        constants::DEFAULT_READ_TIMEOUT_SECS
    );
    assert!(config.decision.effective_fail_on_hold());
    assert!(!config.decision.effective_empty_test_run_passes());
    assert_eq!(config.decision.effective_trivy_report(), "trivy-fs-report.json");
    assert_eq!(
        config.decision.effective_summary_paths().len(),
        constants::SUMMARY_CANDIDATE_PATHS.len()
    );
}

#[test]
fn project_file_overrides_defaults() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_verdict_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("verdict.toml"),
        r#"
[platform]
restart_threshold = 5
poll_interval_secs = 30

[decision]
fail_on_hold = false
trivy_report = "trivy-report.json"
summary_paths = ["custom/summary.json"]
"#,
    )
    .unwrap();

    let config = VerdictConfig::load(dir.path(), None).unwrap();

    assert_eq!(config.platform.effective_restart_threshold(), 5);
    assert_eq!(config.platform.effective_poll_interval_secs(), 30);
    assert!(!config.decision.effective_fail_on_hold());
    assert_eq!(config.decision.effective_trivy_report(), "trivy-report.json");
    assert_eq!(
        config.decision.effective_summary_paths(),
        vec!["custom/summary.json".to_string()]
    );
}

#[test]
fn env_overrides_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_verdict_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("verdict.toml"),
        "[platform]\nrestart_threshold = 5\n",
    )
    .unwrap();
    std::env::set_var("VERDICT_RESTART_THRESHOLD", "8");
    std::env::set_var("VERDICT_FAIL_ON_HOLD", "false");

    let config = VerdictConfig::load(dir.path(), None).unwrap();
    clear_verdict_env_vars();

    assert_eq!(config.platform.effective_restart_threshold(), 8);
    assert!(!config.decision.effective_fail_on_hold());
}

#[test]
fn cli_overrides_beat_env_and_project_file() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_verdict_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("verdict.toml"),
        "[platform]\nrestart_threshold = 5\n",
    )
    .unwrap();
    std::env::set_var("VERDICT_RESTART_THRESHOLD", "8");

    let cli = CliOverrides {
        restart_threshold: Some(11),
        ..Default::default()
    };
    let config = VerdictConfig::load(dir.path(), Some(&cli)).unwrap();
    clear_verdict_env_vars();

    assert_eq!(config.platform.effective_restart_threshold(), 11);
}

#[test]
fn invalid_env_value_is_rejected() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_verdict_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::env::set_var("VERDICT_RESTART_THRESHOLD", "lots");

    let result = VerdictConfig::load(dir.path(), None);
    clear_verdict_env_vars();

    assert!(result.is_err());
}

#[test]
fn malformed_project_file_is_a_parse_error() {
    let _lock = ENV_MUTEX.lock().unwrap();
    clear_verdict_env_vars();

    let dir = tempfile::TempDir::new().unwrap();
    std::fs::write(dir.path().join("verdict.toml"), "[platform\nbroken").unwrap();

    assert!(VerdictConfig::load(dir.path(), None).is_err());
}
