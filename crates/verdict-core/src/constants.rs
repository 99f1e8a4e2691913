//! Shared constants for the Verdict release gate.

/// Verdict version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Restart count above which a pod container is restart-risk (strict `>`).
pub const DEFAULT_RESTART_THRESHOLD: u32 = 3;

/// Platform metrics poll interval in seconds.
pub const DEFAULT_POLL_INTERVAL_SECS: u64 = 15;

/// Upper bound for a single cluster read call in seconds.
pub const DEFAULT_READ_TIMEOUT_SECS: u64 = 30;

/// Whether a HOLD verdict fails the pipeline by default.
pub const DEFAULT_FAIL_ON_HOLD: bool = true;

/// Whether a test run with zero executed tests counts as PASSED by default.
pub const DEFAULT_EMPTY_TEST_RUN_PASSES: bool = false;

/// Default authoritative Trivy report filename.
pub const DEFAULT_TRIVY_REPORT: &str = "trivy-fs-report.json";

/// Node condition type that carries readiness.
pub const READY_CONDITION: &str = "Ready";

/// Container waiting reason that marks a crash loop.
pub const CRASHLOOP_REASON: &str = "CrashLoopBackOff";

/// Literal marker for an allowed platform release decision.
pub const RELEASE_ALLOWED_MARKER: &str = "RELEASE ALLOWED";

/// Literal marker for a blocked platform release decision.
pub const RELEASE_BLOCKED_MARKER: &str = "RELEASE BLOCKED";

/// Candidate paths searched for the aggregate summary document, in order.
pub const SUMMARY_CANDIDATE_PATHS: &[&str] = &[
    "release-decision/input/release-summary.json",
    "release-dashboard/output/release-summary.json",
    "release-dashboard/release-summary.json",
    "release-dashboard-artifact/release-summary.json",
    "release-dashboard-artifact/output/release-summary.json",
];
