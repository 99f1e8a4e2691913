//! Precedence-ordered release decision engine.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::summary::ReleaseSummary;

use super::types::{Decision, Verdict};

/// One check in the ordered rule chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DecisionRule {
    TestLayer,
    SemgrepErrors,
    TrivyVulnerabilities,
    GrypeVulnerabilities,
    KpqeGate,
}

impl DecisionRule {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::TestLayer => "test-layer",
            Self::SemgrepErrors => "semgrep-errors",
            Self::TrivyVulnerabilities => "trivy-vulnerabilities",
            Self::GrypeVulnerabilities => "grype-vulnerabilities",
            Self::KpqeGate => "kpqe-gate",
        }
    }

    /// Default rule precedence.
    pub fn default_order() -> &'static [DecisionRule] {
        &[
            Self::TestLayer,
            Self::SemgrepErrors,
            Self::TrivyVulnerabilities,
            Self::GrypeVulnerabilities,
            Self::KpqeGate,
        ]
    }

    /// Audit line reporting the value this rule inspects.
    fn audit(&self, summary: &ReleaseSummary) -> String {
        let layers = &summary.layers;
        match self {
            Self::TestLayer => format!("Layer1 status = {}", layers.layer1.status),
            Self::SemgrepErrors => format!("Semgrep ERROR = {}", layers.layer2.semgrep.error),
            Self::TrivyVulnerabilities => format!(
                "Trivy HIGH/CRITICAL = {}/{}",
                layers.layer2.trivy.high, layers.layer2.trivy.critical
            ),
            Self::GrypeVulnerabilities => format!(
                "Grype HIGH/CRITICAL = {}/{}",
                layers.layer3.grype.high, layers.layer3.grype.critical
            ),
            Self::KpqeGate => format!("KPQE decision = {}", layers.layer4.kpqe_decision),
        }
    }

    /// The verdict and reason when this rule matches, `None` otherwise.
    ///
    /// All numeric comparisons are strict `> 0`; zero never triggers.
    fn matched(&self, summary: &ReleaseSummary) -> Option<(Verdict, &'static str)> {
        let layers = &summary.layers;
        match self {
            Self::TestLayer => (layers.layer1.status != "PASSED")
                .then_some((Verdict::NoGo, "automated test layer did not pass")),
            Self::SemgrepErrors => (layers.layer2.semgrep.error > 0).then_some((
                Verdict::Hold,
                "static-analysis error-severity findings present",
            )),
            Self::TrivyVulnerabilities => (layers.layer2.trivy.high > 0
                || layers.layer2.trivy.critical > 0)
                .then_some((Verdict::NoGo, "high/critical filesystem vulnerabilities found")),
            Self::GrypeVulnerabilities => (layers.layer3.grype.high > 0
                || layers.layer3.grype.critical > 0)
                .then_some((Verdict::NoGo, "high/critical SBOM vulnerabilities found")),
            Self::KpqeGate => layers
                .layer4
                .kpqe_decision
                .to_uppercase()
                .contains("BLOCKED")
                .then_some((Verdict::NoGo, "platform health gate blocked release")),
        }
    }
}

/// Ordered, short-circuiting rule chain over a normalized summary.
///
/// The default ruleset carries the consolidated precedence; a deployment
/// that needs a different order constructs the engine with [`Self::with_rules`]
/// instead of forking the evaluation logic.
#[derive(Debug, Clone)]
pub struct DecisionEngine {
    rules: Vec<DecisionRule>,
}

impl DecisionEngine {
    /// Engine with the default rule precedence.
    pub fn new() -> Self {
        Self {
            rules: DecisionRule::default_order().to_vec(),
        }
    }

    /// Engine with an explicit rule precedence.
    pub fn with_rules(rules: Vec<DecisionRule>) -> Self {
        Self { rules }
    }

    /// Apply the rule chain to a normalized summary.
    ///
    /// The first matching rule decides the verdict; once a rule has matched,
    /// later rules are never evaluated. Every rule's inspected value is
    /// still recorded in rule order, so the reasoning trail is a complete
    /// audit of the inputs. Any summary maps to exactly one verdict.
    pub fn decide(&self, summary: &ReleaseSummary) -> Decision {
        let mut reasoning = Vec::with_capacity(self.rules.len() + 1);
        let mut matched: Option<(Verdict, &'static str)> = None;

        for rule in &self.rules {
            reasoning.push(rule.audit(summary));
            if matched.is_none() {
                matched = rule.matched(summary);
            }
        }

        let (verdict, reason) = matched.unwrap_or((Verdict::Go, "all gates clean"));
        reasoning.push(reason.to_string());

        debug!(verdict = %verdict, "release decision computed");
        Decision { verdict, reasoning }
    }
}

impl Default for DecisionEngine {
    fn default() -> Self {
        Self::new()
    }
}
