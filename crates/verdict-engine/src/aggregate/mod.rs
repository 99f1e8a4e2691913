//! Aggregate summary assembly.
//!
//! Runs every ingest parser against its well-known report path under a root
//! directory and assembles the canonical [`ReleaseSummary`] plus the
//! per-tool detail an external dashboard renderer consumes. Assembly never
//! fails: absent or corrupt reports contribute their neutral defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use verdict_core::config::DecisionConfig;

use crate::ingest::allure::AllureSummary;
use crate::ingest::discovery;
use crate::ingest::gitleaks::GitleaksReport;
use crate::ingest::grype::GrypeReport;
use crate::ingest::kpqe::KpqeDecision;
use crate::ingest::sbom::SbomInventory;
use crate::ingest::semgrep::SemgrepReport;
use crate::ingest::trivy::TrivyReport;
use crate::summary::ReleaseSummary;

/// Well-known report locations under the aggregation root.
pub mod paths {
    pub const ALLURE_SUMMARY: &str =
        "application-testing/target/site/allure-report/widgets/summary.json";
    pub const GITLEAKS_REPORT: &str = "security-testing/reports/gitleaks-report.json";
    pub const SEMGREP_REPORT: &str = "security-testing/reports/semgrep-report.json";
    /// Directory holding the Trivy report; the filename is policy.
    pub const TRIVY_REPORT_DIR: &str = "security-testing/reports";
    pub const SBOM_REPORT: &str = "sbom-testing/reports/sbom-cyclonedx.json";
    pub const GRYPE_REPORT: &str = "sbom-testing/reports/grype-sbom-report.json";
    pub const KPQE_DECISION: &str = "kpqe-platform-testing/kpqe-release-decision.txt";
}

/// Run metadata for the current CI run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunInfo {
    pub repo: String,
    pub commit: String,
    pub run_id: String,
    pub run_link: String,
}

impl RunInfo {
    /// Read run metadata from the CI environment, defaulting to "UNKNOWN".
    pub fn from_env() -> Self {
        let var = |key: &str| std::env::var(key).unwrap_or_else(|_| "UNKNOWN".to_string());
        let repo = var("GITHUB_REPOSITORY");
        let run_id = var("GITHUB_RUN_ID");
        let run_link = format!("https://github.com/{repo}/actions/runs/{run_id}");
        Self {
            repo,
            commit: var("GITHUB_SHA"),
            run_id,
            run_link,
        }
    }
}

/// Everything parsed from one report tree: the canonical summary plus the
/// per-tool detail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregateReport {
    pub summary: ReleaseSummary,
    pub allure: AllureSummary,
    pub gitleaks: GitleaksReport,
    pub semgrep: SemgrepReport,
    pub trivy: TrivyReport,
    pub grype: GrypeReport,
    pub sbom: SbomInventory,
    pub kpqe_text: String,
}

/// Assemble the aggregate report from the report tree under `root`.
pub fn aggregate(root: &Path, run: &RunInfo, config: &DecisionConfig) -> AggregateReport {
    let json_at = |rel: &str| discovery::read_json_value(&root.join(rel)).unwrap_or(Value::Null);

    let allure = AllureSummary::parse(&json_at(paths::ALLURE_SUMMARY));
    let gitleaks = GitleaksReport::parse(&json_at(paths::GITLEAKS_REPORT));
    let semgrep = SemgrepReport::parse(&json_at(paths::SEMGREP_REPORT));
    let trivy_rel = format!("{}/{}", paths::TRIVY_REPORT_DIR, config.effective_trivy_report());
    let trivy = TrivyReport::parse(&json_at(&trivy_rel));
    let grype = GrypeReport::parse(&json_at(paths::GRYPE_REPORT));
    let sbom = SbomInventory::parse(&json_at(paths::SBOM_REPORT));
    let kpqe_text = discovery::read_text(&root.join(paths::KPQE_DECISION))
        .unwrap_or_else(|| "UNKNOWN".to_string());
    let kpqe = KpqeDecision::classify(&kpqe_text);

    let mut summary = ReleaseSummary::default();
    summary.repo = Some(run.repo.clone());
    summary.commit = Some(run.commit.clone());
    summary.run_id = Some(run.run_id.clone());
    summary.run_link = Some(run.run_link.clone());
    summary.layers.layer1.status = allure
        .status(config.effective_empty_test_run_passes())
        .to_string();
    summary.layers.layer2.semgrep.error = semgrep.errors();
    summary.layers.layer2.trivy.high = trivy.high();
    summary.layers.layer2.trivy.critical = trivy.critical();
    summary.layers.layer3.grype.high = grype.high();
    summary.layers.layer3.grype.critical = grype.critical();
    summary.layers.layer4.kpqe_decision = kpqe.as_summary_str().to_string();

    info!(
        layer1 = %summary.layers.layer1.status,
        semgrep_errors = summary.layers.layer2.semgrep.error,
        kpqe = %summary.layers.layer4.kpqe_decision,
        "aggregate summary assembled"
    );

    AggregateReport {
        summary,
        allure,
        gitleaks,
        semgrep,
        trivy,
        grype,
        sbom,
        kpqe_text,
    }
}
